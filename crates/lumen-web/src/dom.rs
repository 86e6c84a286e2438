use crate::constants::ATTR_CONFIG;
use crate::geometry;
use lumen_core::config::{parse_config, Validate};
use serde::de::DeserializeOwned;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn window() -> anyhow::Result<web::Window> {
    web::window().ok_or_else(|| anyhow::anyhow!("no window"))
}

/// Render a thrown JS value for logs and `anyhow` chains.
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// A registered event listener. Dropping it removes the listener.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Option<Closure<dyn FnMut(web::Event)>>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            event,
            closure: Some(closure),
        })
    }

    /// Idempotent.
    pub fn remove(&mut self) {
        if let Some(closure) = self.closure.take() {
            _ = self
                .target
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.remove();
    }
}

/// An `IntersectionObserver` watching one element. Dropping it disconnects.
pub struct Observer {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl Observer {
    /// `on_change` receives the latest intersection state and the observer,
    /// so a single-shot caller can disconnect from inside the callback.
    pub fn watch(
        target: &web::Element,
        root_margin_px: Option<f64>,
        threshold: Option<f64>,
        mut on_change: impl FnMut(bool, &web::IntersectionObserver) + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                let latest = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                    .last();
                if let Some(entry) = latest {
                    on_change(entry.is_intersecting(), &observer);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        if let Some(px) = root_margin_px {
            init.set_root_margin(&geometry::root_margin_css(px));
        }
        if let Some(t) = threshold {
            init.set_threshold(&JsValue::from_f64(t));
        }
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(js_err)?;
        observer.observe(target);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Engine config from the element's `data-lumen-config`, falling back to
/// defaults (with a warning) when it is missing or rejected.
pub fn element_config<T>(el: &web::Element, component: &str) -> T
where
    T: DeserializeOwned + Default + Validate,
{
    let json = el.get_attribute(ATTR_CONFIG).unwrap_or_default();
    config_or_default(&json, component)
}

pub fn config_or_default<T>(json: &str, component: &str) -> T
where
    T: DeserializeOwned + Default + Validate,
{
    match parse_config(json) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[{}] invalid config, using defaults: {}", component, e);
            T::default()
        }
    }
}

/// Size the canvas backing store to its container's client box (CSS pixels).
pub fn sync_canvas_to_container(
    canvas: &web::HtmlCanvasElement,
    container: &web::Element,
) -> (f32, f32) {
    let (w, h) = geometry::backing_size(container.client_width(), container.client_height());
    canvas.set_width(w);
    canvas.set_height(h);
    (w as f32, h as f32)
}

/// Every element under `root` matching `selector`, in document order.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query_one(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w as f32, h as f32)
}

/// Call a zero-argument JS callback. A returned promise is awaited so its
/// rejection lands in the log instead of vanishing.
pub fn notify(callback: Option<js_sys::Function>, component: &'static str) {
    let Some(callback) = callback else {
        return;
    };
    match callback.call0(&JsValue::NULL) {
        Ok(ret) => {
            if let Ok(promise) = ret.dyn_into::<js_sys::Promise>() {
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::error!("[{}] completion callback rejected: {:?}", component, e);
                    }
                });
            }
        }
        Err(e) => log::error!("[{}] completion callback threw: {:?}", component, e),
    }
}
