use crate::constants::{EVENT_RESIZE, EVENT_SCROLL, SELECTOR_PANEL, SELECTOR_TRACK};
use crate::dom::{self, Listener};
use crate::frame::FrameLoop;
use crate::geometry;
use lumen_core::track::{HorizontalTrack, Panel, TrackGeometry};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

struct TrackState {
    section: web::HtmlElement,
    track: web::HtmlElement,
    panels: Vec<web::HtmlElement>,
    engine: HorizontalTrack,
    track_width: f32,
    viewport_width: f32,
}

impl TrackState {
    /// Re-read layout: track overflow, section height for the pin, panel
    /// positions.
    fn measure(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let (vw, vh) = dom::viewport_size(&window);
        self.viewport_width = vw;
        self.track_width = self.track.scroll_width() as f32;
        let height = geometry::pinned_section_height(self.track_width, vw, vh);
        dom::set_style(&self.section, "height", &format!("{:.0}px", height));

        let bounds: Vec<(f32, f32)> = self
            .panels
            .iter()
            .map(|p| (p.offset_left() as f32, p.offset_width() as f32))
            .collect();
        self.engine.set_panel_bounds(&bounds);
        log::debug!(
            "[track] measured track={} viewport={} panels={}",
            self.track_width,
            vw,
            bounds.len()
        );
    }

    fn on_scroll(&mut self) {
        let rect = self.section.get_bounding_client_rect();
        self.engine.on_scroll(&TrackGeometry {
            section_top: rect.top() as f32,
            track_width: self.track_width,
            viewport_width: self.viewport_width,
        });
    }

    fn render(&self) {
        dom::set_style(&self.track, "transform", &self.engine.transform_css());
        for (i, panel) in self.panels.iter().enumerate() {
            let style = self.engine.panel_style(i);
            dom::set_style(panel, "opacity", &style.opacity_css());
            dom::set_style(panel, "transform", &style.transform_css());
        }
    }
}

struct Mounted {
    frame: FrameLoop,
    _scroll: Listener,
    _resize: Listener,
}

/// Pins a section and turns vertical scroll through it into a sideways
/// slide of its panel track.
#[wasm_bindgen]
pub struct HorizontalScroll {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl HorizontalScroll {
    pub fn mount(section: web::HtmlElement) -> Result<HorizontalScroll, JsValue> {
        Self::mount_with(section).map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    /// Idempotent.
    pub fn unmount(&mut self) {
        if let Some(m) = self.mounted.take() {
            m.frame.cancel();
            log::debug!("[track] unmounted");
        }
    }
}

impl HorizontalScroll {
    pub fn mount_with(section: web::HtmlElement) -> anyhow::Result<Self> {
        let window = dom::window()?;
        let track = dom::query_one(&section, SELECTOR_TRACK)
            .ok_or_else(|| anyhow::anyhow!("no {} inside the section", SELECTOR_TRACK))?;
        let panels = dom::query_all(&track, SELECTOR_PANEL);

        // the track's parent is the pinned viewport-sized frame
        match track
            .parent_element()
            .and_then(|p| p.dyn_into::<web::HtmlElement>().ok())
        {
            Some(pin) if pin != section => {
                dom::set_style(&pin, "position", "sticky");
                dom::set_style(&pin, "top", "0");
                dom::set_style(&pin, "overflow", "hidden");
            }
            _ => log::warn!("[track] track sits directly in the section; not pinning"),
        }
        // panel offsets are measured against the track
        dom::set_style(&track, "position", "relative");
        dom::set_style(&track, "will-change", "transform");

        let mut state = TrackState {
            section,
            track,
            panels: panels.clone(),
            engine: HorizontalTrack::new(panels.iter().map(|_| Panel::new(0.0, 0.0)).collect()),
            track_width: 0.0,
            viewport_width: 0.0,
        };
        state.measure();
        state.on_scroll();
        state.render();
        let state = Rc::new(RefCell::new(state));

        let state_tick = state.clone();
        let frame = FrameLoop::new(move |dt| {
            let mut s = state_tick.borrow_mut();
            let vw = s.viewport_width;
            let moving = s.engine.step(dt, vw);
            s.render();
            moving
        });

        let state_scroll = state.clone();
        let frame_scroll = frame.clone();
        let scroll = Listener::new(&window, EVENT_SCROLL, move |_| {
            state_scroll.borrow_mut().on_scroll();
            frame_scroll.request();
        })?;

        let state_resize = state.clone();
        let frame_resize = frame.clone();
        let resize = Listener::new(&window, EVENT_RESIZE, move |_| {
            let mut s = state_resize.borrow_mut();
            s.measure();
            s.on_scroll();
            frame_resize.request();
        })?;

        frame.request();
        log::debug!("[track] mounted panels={}", state.borrow().panels.len());
        Ok(Self {
            mounted: Some(Mounted {
                frame,
                _scroll: scroll,
                _resize: resize,
            }),
        })
    }
}

impl Drop for HorizontalScroll {
    fn drop(&mut self) {
        self.unmount();
    }
}
