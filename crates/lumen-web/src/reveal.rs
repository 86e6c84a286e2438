use crate::constants::{UNIT_CLASS, WORD_CLASS};
use crate::dom::{self, Observer};
use crate::frame::FrameLoop;
use crate::geometry;
use instant::Instant;
use lumen_core::config::SplitMode;
use lumen_core::constants::{NBSP, REVEAL_VISIBILITY_THRESHOLD};
use lumen_core::style::glow_shadow_css;
use lumen_core::{Reveal, RevealConfig, TickOutcome, UnitFrame, VisibilityAction};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

struct RevealState {
    root: web::HtmlElement,
    /// Text found in the element at mount; used when the config has none.
    source_text: String,
    engine: Reveal,
    spans: Vec<web::HtmlElement>,
    frames: Vec<UnitFrame>,
    started: Option<Instant>,
    on_complete: Option<js_sys::Function>,
}

impl RevealState {
    /// Replace the element's content with one span per unit, hidden.
    fn build_units(&mut self) -> anyhow::Result<()> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        self.root.set_inner_html("");
        _ = self
            .root
            .set_attribute("aria-label", &self.engine.config().text);
        let word_mode = self.engine.config().split_granularity == SplitMode::Word;

        self.spans.clear();
        for unit in self.engine.units() {
            let span = document
                .create_element("span")
                .map_err(dom::js_err)?
                .dyn_into::<web::HtmlElement>()
                .map_err(|_| anyhow::anyhow!("span is not an HtmlElement"))?;
            if word_mode {
                span.set_class_name(&format!("{UNIT_CLASS} {WORD_CLASS}"));
            } else {
                span.set_class_name(UNIT_CLASS);
            }
            _ = span.set_attribute("aria-hidden", "true");
            span.set_text_content(Some(&unit.text));
            dom::set_style(&span, "display", "inline-block");
            dom::set_style(&span, "will-change", "transform, opacity");
            self.root.append_child(&span).map_err(dom::js_err)?;
            if unit.joined_after {
                let joiner = document.create_element("span").map_err(dom::js_err)?;
                _ = joiner.set_attribute("aria-hidden", "true");
                joiner.set_text_content(Some(&NBSP.to_string()));
                self.root.append_child(&joiner).map_err(dom::js_err)?;
            }
            self.spans.push(span);
        }
        self.apply_hidden();
        Ok(())
    }

    fn apply_hidden(&mut self) {
        let hidden = self.engine.timeline().hidden_frame();
        self.frames.clear();
        self.frames.resize(self.spans.len(), hidden);
        self.apply_frames();
    }

    fn apply_frames(&self) {
        let glow = self.engine.config().glow;
        let typing = self.engine.config().typing_mode;
        for (span, frame) in self.spans.iter().zip(&self.frames) {
            dom::set_style(span, "opacity", &frame.style.opacity_css());
            dom::set_style(span, "transform", &frame.style.transform_css());
            if glow {
                dom::set_style(span, "text-shadow", &glow_shadow_css(frame.glow, typing));
            }
        }
    }
}

struct Mounted {
    state: Rc<RefCell<RevealState>>,
    frame: FrameLoop,
    _observer: Observer,
}

/// Splits a text block into letters or words and reveals them with a
/// stagger once the block scrolls into view.
#[wasm_bindgen]
pub struct AnimatedText {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl AnimatedText {
    /// `on_complete` is called with no arguments after every finished run.
    pub fn mount(
        root: web::HtmlElement,
        config: Option<String>,
        on_complete: Option<js_sys::Function>,
    ) -> Result<AnimatedText, JsValue> {
        let config = match config {
            Some(json) => dom::config_or_default(&json, "reveal"),
            None => dom::element_config(&root, "reveal"),
        };
        Self::mount_with(root, config, on_complete)
            .map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config: &str) {
        let config: RevealConfig = dom::config_or_default(config, "reveal");
        self.apply_config(config);
    }

    #[wasm_bindgen(js_name = setOnComplete)]
    pub fn set_on_complete(&mut self, on_complete: Option<js_sys::Function>) {
        if let Some(m) = self.mounted.as_ref() {
            m.state.borrow_mut().on_complete = on_complete;
        }
    }

    /// Idempotent. The units keep whatever style they had.
    pub fn unmount(&mut self) {
        if let Some(m) = self.mounted.take() {
            m.frame.cancel();
            let mut s = m.state.borrow_mut();
            s.engine.unmount();
            s.started = None;
            log::debug!("[reveal] unmounted");
        }
    }
}

impl AnimatedText {
    pub fn mount_with(
        root: web::HtmlElement,
        mut config: RevealConfig,
        on_complete: Option<js_sys::Function>,
    ) -> anyhow::Result<Self> {
        let source_text = root
            .text_content()
            .map(|t| geometry::rendered_text(&t))
            .unwrap_or_default();
        if config.text.is_empty() {
            config.text = source_text.clone();
        }

        let mut state = RevealState {
            root: root.clone(),
            source_text,
            engine: Reveal::new(config),
            spans: Vec::new(),
            frames: Vec::new(),
            started: None,
            on_complete,
        };
        state.build_units()?;
        let state = Rc::new(RefCell::new(state));

        let state_tick = state.clone();
        let frame = FrameLoop::new(move |_dt| {
            let mut guard = state_tick.borrow_mut();
            let s = &mut *guard;
            let Some(started) = s.started else {
                return false;
            };
            let elapsed = started.elapsed().as_secs_f64();
            match s.engine.tick(elapsed, &mut s.frames) {
                TickOutcome::Idle => false,
                TickOutcome::Running => {
                    s.apply_frames();
                    true
                }
                TickOutcome::Completed => {
                    s.apply_frames();
                    s.started = None;
                    let callback = s.on_complete.clone();
                    // the callback may call back into this instance
                    drop(guard);
                    dom::notify(callback, "reveal");
                    false
                }
            }
        });

        let state_obs = state.clone();
        let frame_obs = frame.clone();
        let observer = Observer::watch(
            &root,
            None,
            Some(REVEAL_VISIBILITY_THRESHOLD),
            move |visible, observer| {
                let action = state_obs.borrow_mut().engine.on_visibility(visible);
                match action {
                    VisibilityAction::None => {}
                    VisibilityAction::Play | VisibilityAction::PlayAndDisconnect => {
                        if action == VisibilityAction::PlayAndDisconnect {
                            observer.disconnect();
                        }
                        state_obs.borrow_mut().started = Some(Instant::now());
                        frame_obs.request();
                    }
                    VisibilityAction::Hide => {
                        frame_obs.cancel();
                        let mut s = state_obs.borrow_mut();
                        s.started = None;
                        s.apply_hidden();
                    }
                }
            },
        )?;

        log::debug!("[reveal] mounted units={}", state.borrow().spans.len());
        Ok(Self {
            mounted: Some(Mounted {
                state,
                frame,
                _observer: observer,
            }),
        })
    }

    /// Adopt new parameters; a visible or finished reveal replays from the
    /// hidden state and the superseded run never reports completion.
    pub fn apply_config(&mut self, mut config: RevealConfig) {
        let Some(m) = self.mounted.as_ref() else {
            return;
        };
        let mut s = m.state.borrow_mut();
        if config.text.is_empty() {
            config.text = s.source_text.clone();
        }
        let outcome = s.engine.reconfigure(config);
        if outcome.units_changed {
            if let Err(e) = s.build_units() {
                log::error!("[reveal] rebuilding units: {:#}", e);
            }
        }
        if outcome.restarted {
            s.apply_hidden();
            s.started = Some(Instant::now());
            drop(s);
            m.frame.request();
        } else {
            s.apply_hidden();
        }
    }
}

impl Drop for AnimatedText {
    fn drop(&mut self) {
        self.unmount();
    }
}
