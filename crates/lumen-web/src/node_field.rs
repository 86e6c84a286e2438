use crate::constants::EVENT_RESIZE;
use crate::dom::{self, Listener};
use crate::events::{wire_pointer, PointerHandlers};
use crate::frame::FrameLoop;
use crate::render::Canvas2dPainter;
use glam::Vec2;
use lumen_core::node_field::frames_from_dt;
use lumen_core::{NodeField, NodeFieldConfig, PointerState};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

struct FieldState {
    canvas: web::HtmlCanvasElement,
    container: web::Element,
    painter: Canvas2dPainter,
    field: NodeField,
    pointer: PointerState,
}

impl FieldState {
    fn resize(&mut self, color: &str) {
        let (w, h) = dom::sync_canvas_to_container(&self.canvas, &self.container);
        self.painter.apply_style(color);
        self.field.resize(w, h);
        log::debug!("[node-field] resized to {}x{}", w, h);
    }
}

struct Mounted {
    state: Rc<RefCell<FieldState>>,
    color: Rc<RefCell<String>>,
    frame: FrameLoop,
    _resize: Listener,
    _pointer: [Listener; 2],
}

/// Animated node network on a canvas, sized to the canvas's parent.
#[wasm_bindgen]
pub struct NodeFieldAnimator {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl NodeFieldAnimator {
    /// Mount on `canvas`. `config` is JSON; when absent the canvas's
    /// `data-lumen-config` attribute is used.
    pub fn mount(
        canvas: web::HtmlCanvasElement,
        config: Option<String>,
    ) -> Result<NodeFieldAnimator, JsValue> {
        let config = match config {
            Some(json) => dom::config_or_default(&json, "node-field"),
            None => dom::element_config(&canvas, "node-field"),
        };
        Self::mount_with(canvas, config).map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config: &str) {
        let config: NodeFieldConfig = dom::config_or_default(config, "node-field");
        self.apply_config(config);
    }

    /// Stop the frame loop and release every listener. Idempotent.
    pub fn unmount(&mut self) {
        if let Some(m) = self.mounted.take() {
            m.frame.cancel();
            log::info!("[node-field] unmounted");
        }
    }
}

impl NodeFieldAnimator {
    pub fn mount_with(
        canvas: web::HtmlCanvasElement,
        config: NodeFieldConfig,
    ) -> anyhow::Result<Self> {
        let Some(painter) = Canvas2dPainter::for_canvas(&canvas) else {
            log::debug!("[node-field] no 2d context; nothing will render");
            return Ok(Self { mounted: None });
        };
        let window = dom::window()?;
        let container: web::Element = match canvas.parent_element() {
            Some(parent) => parent,
            None => canvas.clone().into(),
        };
        let (w, h) = dom::sync_canvas_to_container(&canvas, &container);
        painter.apply_style(&config.color);
        let field = NodeField::new(w, h, &config, StdRng::from_entropy());
        log::info!(
            "[node-field] mounted {}x{} nodes={} profile={:?}",
            w,
            h,
            field.nodes().len(),
            config.profile
        );

        let state = Rc::new(RefCell::new(FieldState {
            canvas: canvas.clone(),
            container,
            painter,
            field,
            pointer: PointerState::default(),
        }));
        let color = Rc::new(RefCell::new(config.color));

        let state_tick = state.clone();
        let frame = FrameLoop::new(move |dt| {
            let mut guard = state_tick.borrow_mut();
            let s = &mut *guard;
            s.field.step(frames_from_dt(dt), &s.pointer, &mut s.painter);
            true
        });

        let state_resize = state.clone();
        let color_resize = color.clone();
        let resize = Listener::new(&window, EVENT_RESIZE, move |_| {
            state_resize.borrow_mut().resize(&color_resize.borrow());
        })?;

        let state_move = state.clone();
        let state_leave = state.clone();
        let pointer = wire_pointer(
            &canvas,
            PointerHandlers {
                on_move: Box::new(move |pos: Vec2, _size: Vec2| {
                    state_move.borrow_mut().pointer.move_to(pos.x, pos.y)
                }),
                on_leave: Box::new(move || state_leave.borrow_mut().pointer.leave()),
            },
        )?;

        frame.request();
        Ok(Self {
            mounted: Some(Mounted {
                state,
                color,
                frame,
                _resize: resize,
                _pointer: pointer,
            }),
        })
    }

    /// Regenerate with the new density/profile, re-apply the color and the
    /// pointer toggle.
    pub fn apply_config(&mut self, config: NodeFieldConfig) {
        let Some(m) = self.mounted.as_ref() else {
            return;
        };
        let mut s = m.state.borrow_mut();
        s.painter.apply_style(&config.color);
        s.field.reconfigure(&config);
        if !config.interactive {
            s.pointer.leave();
        }
        log::debug!("[node-field] reconfigured nodes={}", s.field.nodes().len());
        *m.color.borrow_mut() = config.color;
    }
}

impl Drop for NodeFieldAnimator {
    fn drop(&mut self) {
        self.unmount();
    }
}
