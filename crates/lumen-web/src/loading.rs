use crate::constants::{SELECTOR_LOADING_BAR, SELECTOR_LOADING_LABEL, SELECTOR_LOADING_WORD};
use crate::dom;
use crate::frame::FrameLoop;
use lumen_core::loading::{word_offset_percent, LoadingEvent, LoadingProgress, LoadingStage};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

struct LoadingState {
    root: web::HtmlElement,
    bar: Option<web::HtmlElement>,
    label: Option<web::HtmlElement>,
    words: Vec<web::HtmlElement>,
    progress: LoadingProgress,
    rng: StdRng,
    shown_word: Option<usize>,
    on_complete: Option<js_sys::Function>,
}

impl LoadingState {
    fn render(&mut self) {
        if let Some(bar) = &self.bar {
            dom::set_style(bar, "width", &format!("{:.2}%", self.progress.progress()));
        }
        if let Some(label) = &self.label {
            label.set_text_content(Some(&self.progress.percent_label()));
        }
        dom::set_style(&self.root, "opacity", &format!("{:.3}", self.progress.opacity()));

        let index = self.progress.word_index();
        if self.shown_word != Some(index) && !self.words.is_empty() {
            let current = index % self.words.len();
            for (i, word) in self.words.iter().enumerate() {
                let offset = word_offset_percent(i, current);
                dom::set_style(word, "transform", &format!("translateY({:.0}%)", offset));
            }
            self.shown_word = Some(index);
        }
    }
}

struct Mounted {
    state: Rc<RefCell<LoadingState>>,
    frame: FrameLoop,
}

/// Full-screen loader: creeping progress until `finish()`, then a quick
/// ease to 100%, a short hold and a fade out.
#[wasm_bindgen]
pub struct LoadingScreen {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl LoadingScreen {
    /// `on_complete` fires once, after the fade, when the screen is hidden.
    pub fn mount(
        root: web::HtmlElement,
        on_complete: Option<js_sys::Function>,
    ) -> LoadingScreen {
        Self::mount_with(root, on_complete)
    }

    /// Assets are ready.
    pub fn finish(&self) {
        if let Some(m) = self.mounted.as_ref() {
            let mut s = m.state.borrow_mut();
            if s.progress.stage() == LoadingStage::Done {
                return;
            }
            s.progress.finish();
            drop(s);
            m.frame.request();
        }
    }

    /// Idempotent. Leaves the screen as it is.
    pub fn unmount(&mut self) {
        if let Some(m) = self.mounted.take() {
            m.frame.cancel();
            log::debug!("[loading] unmounted");
        }
    }
}

impl LoadingScreen {
    pub fn mount_with(root: web::HtmlElement, on_complete: Option<js_sys::Function>) -> Self {
        let bar = dom::query_one(&root, SELECTOR_LOADING_BAR);
        let label = dom::query_one(&root, SELECTOR_LOADING_LABEL);
        let words = dom::query_all(&root, SELECTOR_LOADING_WORD);
        if bar.is_none() && label.is_none() {
            log::warn!("[loading] no progress bar or label found");
        }

        let mut state = LoadingState {
            root,
            bar,
            label,
            words,
            progress: LoadingProgress::new(),
            rng: StdRng::from_entropy(),
            shown_word: None,
            on_complete,
        };
        state.render();
        let state = Rc::new(RefCell::new(state));

        let state_tick = state.clone();
        let frame = FrameLoop::new(move |dt| {
            let mut guard = state_tick.borrow_mut();
            let s = &mut *guard;
            let event = s.progress.advance(dt, &mut s.rng);
            s.render();
            match event {
                LoadingEvent::None => true,
                LoadingEvent::Idle => false,
                LoadingEvent::Completed => {
                    s.root.set_hidden(true);
                    let callback = s.on_complete.take();
                    drop(guard);
                    log::info!("[loading] complete");
                    dom::notify(callback, "loading");
                    false
                }
            }
        });
        frame.request();
        log::debug!("[loading] mounted");

        Self {
            mounted: Some(Mounted { state, frame }),
        }
    }
}

impl Drop for LoadingScreen {
    fn drop(&mut self) {
        self.unmount();
    }
}
