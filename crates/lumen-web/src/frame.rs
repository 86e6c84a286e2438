use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Cancellable `requestAnimationFrame` chain.
///
/// The tick receives the seconds since the previous tick of the same chain
/// (0 on the first frame after a `request`) and returns whether to keep going.
/// Clones share the chain; dropping the last clone cancels it.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

struct LoopInner {
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
    handle: Cell<Option<i32>>,
    last: Cell<Option<Instant>>,
}

impl FrameLoop {
    pub fn new(mut tick: impl FnMut(f32) -> bool + 'static) -> Self {
        let inner = Rc::new(LoopInner {
            callback: RefCell::new(None),
            handle: Cell::new(None),
            last: Cell::new(None),
        });
        let weak: Weak<LoopInner> = Rc::downgrade(&inner);
        *inner.callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.handle.set(None);
            let now = Instant::now();
            let dt = inner
                .last
                .replace(Some(now))
                .map_or(0.0, |prev| (now - prev).as_secs_f32());
            // the tick may have re-requested already
            if tick(dt) && inner.handle.get().is_none() {
                inner.schedule();
            } else if inner.handle.get().is_none() {
                inner.last.set(None);
            }
        }) as Box<dyn FnMut()>));
        Self { inner }
    }

    /// Arm the next frame unless one is already pending.
    pub fn request(&self) {
        if self.inner.handle.get().is_none() {
            self.inner.schedule();
        }
    }

    /// Idempotent.
    pub fn cancel(&self) {
        self.inner.cancel();
    }
}

impl LoopInner {
    fn schedule(&self) {
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            return;
        };
        if let Some(w) = web::window() {
            match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => self.handle.set(Some(id)),
                Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.last.set(None);
    }
}

impl Drop for LoopInner {
    fn drop(&mut self) {
        self.cancel();
    }
}
