use crate::constants::EVENT_SCROLL;
use crate::dom::{self, Listener, Observer};
use lumen_core::constants::PARALLAX_ROOT_MARGIN_PX;
use lumen_core::{Parallax, ParallaxConfig, Phase, ScrollGeometry};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ParallaxState {
    section: web::HtmlElement,
    content: web::HtmlElement,
    engine: Parallax,
}

impl ParallaxState {
    fn update(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let rect = self.section.get_bounding_client_rect();
        let (_, viewport_height) = dom::viewport_size(&window);
        let geom = ScrollGeometry {
            element_top: rect.top() as f32,
            element_height: rect.height() as f32,
            viewport_height,
        };
        if self.engine.on_scroll(&geom) {
            self.render();
        }
    }

    fn render(&self) {
        dom::set_style(&self.content, "transform", &self.engine.transform_css());
    }
}

struct Mounted {
    state: Rc<RefCell<ParallaxState>>,
    scroll: Rc<RefCell<Option<Listener>>>,
    _observer: Observer,
}

/// Displaces a section's content as the page scrolls, only while the
/// section is near the viewport.
#[wasm_bindgen]
pub struct ParallaxSection {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl ParallaxSection {
    pub fn mount(
        section: web::HtmlElement,
        config: Option<String>,
    ) -> Result<ParallaxSection, JsValue> {
        let config = match config {
            Some(json) => dom::config_or_default(&json, "parallax"),
            None => dom::element_config(&section, "parallax"),
        };
        Self::mount_with(section, config).map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config: &str) {
        let config: ParallaxConfig = dom::config_or_default(config, "parallax");
        self.apply_config(config);
    }

    /// Idempotent.
    pub fn unmount(&mut self) {
        if let Some(m) = self.mounted.take() {
            m.scroll.borrow_mut().take();
            m.state.borrow_mut().engine.unmount();
            log::debug!("[parallax] unmounted");
        }
    }
}

impl ParallaxSection {
    pub fn mount_with(section: web::HtmlElement, config: ParallaxConfig) -> anyhow::Result<Self> {
        let window = dom::window()?;
        // the section stays put so its rect is a stable scroll reference
        let content = match section
            .first_element_child()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        {
            Some(child) => child,
            None => {
                log::warn!("[parallax] section has no content element; displacing the section");
                section.clone()
            }
        };
        dom::set_style(&content, "will-change", "transform");

        let state = Rc::new(RefCell::new(ParallaxState {
            section: section.clone(),
            content,
            engine: Parallax::new(config),
        }));
        let scroll: Rc<RefCell<Option<Listener>>> = Rc::new(RefCell::new(None));

        let state_obs = state.clone();
        let scroll_obs = scroll.clone();
        let observer = Observer::watch(
            &section,
            Some(PARALLAX_ROOT_MARGIN_PX),
            None,
            move |visible, _| {
                let live = state_obs.borrow_mut().engine.set_visible(visible);
                if !live {
                    scroll_obs.borrow_mut().take();
                    return;
                }
                if scroll_obs.borrow().is_none() {
                    let state_scroll = state_obs.clone();
                    match Listener::new(&window, EVENT_SCROLL, move |_| {
                        state_scroll.borrow_mut().update()
                    }) {
                        Ok(l) => *scroll_obs.borrow_mut() = Some(l),
                        Err(e) => log::error!("[parallax] scroll listener: {:#}", e),
                    }
                }
                state_obs.borrow_mut().update();
            },
        )?;

        log::debug!("[parallax] mounted");
        Ok(Self {
            mounted: Some(Mounted {
                state,
                scroll,
                _observer: observer,
            }),
        })
    }

    pub fn apply_config(&mut self, config: ParallaxConfig) {
        let Some(m) = self.mounted.as_ref() else {
            return;
        };
        let mut s = m.state.borrow_mut();
        s.engine.reconfigure(config);
        // an idle section still shows the held offset along the new axis
        if s.engine.phase() == Phase::Active {
            s.update();
        } else {
            s.render();
        }
    }
}

impl Drop for ParallaxSection {
    fn drop(&mut self) {
        self.unmount();
    }
}
