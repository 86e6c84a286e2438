use crate::dom::{self, Listener};
use crate::events::{wire_pointer, PointerHandlers};
use crate::frame::FrameLoop;
use glam::Vec2;
use lumen_core::config::{HoverConfig, HoverMode};
use lumen_core::hover::HoverMotion;
use lumen_core::input::normalized_in_box;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

struct HoverState {
    el: web::HtmlElement,
    motion: HoverMotion,
}

struct Mounted {
    state: Rc<RefCell<HoverState>>,
    frame: FrameLoop,
    _pointer: [Listener; 2],
}

/// Tilts an element toward the pointer, or lets it trail the pointer across
/// its parent.
#[wasm_bindgen]
pub struct HoverEffect {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl HoverEffect {
    pub fn mount(el: web::HtmlElement, config: Option<String>) -> Result<HoverEffect, JsValue> {
        let config = match config {
            Some(json) => dom::config_or_default(&json, "hover"),
            None => dom::element_config(&el, "hover"),
        };
        Self::mount_with(el, config).map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config: &str) {
        let config: HoverConfig = dom::config_or_default(config, "hover");
        if let Some(m) = self.mounted.as_ref() {
            m.state.borrow_mut().motion.reconfigure(config);
            m.frame.request();
        }
    }

    /// Idempotent.
    pub fn unmount(&mut self) {
        if let Some(m) = self.mounted.take() {
            m.frame.cancel();
            log::debug!("[hover] unmounted");
        }
    }
}

impl HoverEffect {
    pub fn mount_with(el: web::HtmlElement, config: HoverConfig) -> anyhow::Result<Self> {
        // follow tracks the pointer over the surrounding section
        let area: web::Element = match config.mode {
            HoverMode::Tilt => el.clone().into(),
            HoverMode::Follow => el.parent_element().unwrap_or_else(|| el.clone().into()),
        };
        dom::set_style(&el, "will-change", "transform");

        let state = Rc::new(RefCell::new(HoverState {
            el,
            motion: HoverMotion::new(config),
        }));

        let state_tick = state.clone();
        let frame = FrameLoop::new(move |dt| {
            let mut s = state_tick.borrow_mut();
            let moving = s.motion.step(dt);
            dom::set_style(&s.el, "transform", &s.motion.transform_css());
            moving
        });

        let state_move = state.clone();
        let frame_move = frame.clone();
        let state_leave = state.clone();
        let frame_leave = frame.clone();
        let pointer = wire_pointer(
            &area,
            PointerHandlers {
                on_move: Box::new(move |pos: Vec2, size: Vec2| {
                    let normalized = normalized_in_box(pos, Vec2::ZERO, size);
                    state_move.borrow_mut().motion.on_pointer(normalized);
                    frame_move.request();
                }),
                on_leave: Box::new(move || {
                    state_leave.borrow_mut().motion.on_leave();
                    frame_leave.request();
                }),
            },
        )?;

        log::debug!("[hover] mounted");
        Ok(Self {
            mounted: Some(Mounted {
                state,
                frame,
                _pointer: pointer,
            }),
        })
    }
}

impl Drop for HoverEffect {
    fn drop(&mut self) {
        self.unmount();
    }
}
