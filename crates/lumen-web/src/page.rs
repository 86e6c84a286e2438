use crate::constants::{ATTR_MOUNT, ATTR_MOUNTED, EVENT_LOAD};
use crate::dom::{self, Listener};
use crate::geometry::MountKind;
use crate::hover::HoverEffect;
use crate::loading::LoadingScreen;
use crate::node_field::NodeFieldAnimator;
use crate::parallax::ParallaxSection;
use crate::reveal::AnimatedText;
use crate::track::HorizontalScroll;
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

enum Instance {
    NodeField(NodeFieldAnimator),
    Parallax(ParallaxSection),
    Reveal(AnimatedText),
    Loading(LoadingScreen),
    Hover(HoverEffect),
    Track(HorizontalScroll),
}

impl Instance {
    fn mount(kind: MountKind, el: web::HtmlElement) -> anyhow::Result<Self> {
        Ok(match kind {
            MountKind::NodeField => {
                let config = dom::element_config(&el, kind.as_str());
                let canvas = el
                    .dyn_into::<web::HtmlCanvasElement>()
                    .map_err(|_| anyhow::anyhow!("node-field needs a <canvas>"))?;
                Instance::NodeField(NodeFieldAnimator::mount_with(canvas, config)?)
            }
            MountKind::Parallax => {
                let config = dom::element_config(&el, kind.as_str());
                Instance::Parallax(ParallaxSection::mount_with(el, config)?)
            }
            MountKind::Reveal => {
                let config = dom::element_config(&el, kind.as_str());
                Instance::Reveal(AnimatedText::mount_with(el, config, None)?)
            }
            MountKind::Loading => Instance::Loading(LoadingScreen::mount_with(el, None)),
            MountKind::Hover => {
                let config = dom::element_config(&el, kind.as_str());
                Instance::Hover(HoverEffect::mount_with(el, config)?)
            }
            MountKind::Track => Instance::Track(HorizontalScroll::mount_with(el)?),
        })
    }

    fn unmount(&mut self) {
        match self {
            Instance::NodeField(i) => i.unmount(),
            Instance::Parallax(i) => i.unmount(),
            Instance::Reveal(i) => i.unmount(),
            Instance::Loading(i) => i.unmount(),
            Instance::Hover(i) => i.unmount(),
            Instance::Track(i) => i.unmount(),
        }
    }
}

type Registry = Rc<RefCell<FnvHashMap<MountKind, Vec<Instance>>>>;

fn finish_loading(registry: &Registry) {
    if let Some(screens) = registry.borrow().get(&MountKind::Loading) {
        for screen in screens {
            if let Instance::Loading(s) = screen {
                s.finish();
            }
        }
    }
}

/// Every engine mounted by `mountPage()`. Unmounting (or dropping) the
/// handle tears all of them down.
#[wasm_bindgen]
pub struct PageHandle {
    registry: Registry,
    load: Option<Listener>,
}

/// Mount an engine on every `[data-lumen]` element in the document. An
/// element that fails to mount is logged and skipped.
#[wasm_bindgen(js_name = mountPage)]
pub fn mount_page() -> Result<PageHandle, JsValue> {
    PageHandle::scan().map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

#[wasm_bindgen]
impl PageHandle {
    /// Number of live engine instances.
    pub fn count(&self) -> usize {
        self.registry.borrow().values().map(Vec::len).sum()
    }

    /// Tell loading screens the page is ready. Happens on `load` anyway.
    #[wasm_bindgen(js_name = finishLoading)]
    pub fn finish_loading(&self) {
        finish_loading(&self.registry);
    }

    /// Idempotent.
    pub fn unmount(&mut self) {
        self.load.take();
        let mut registry = self.registry.borrow_mut();
        let n: usize = registry.values().map(Vec::len).sum();
        for (_, mut instances) in registry.drain() {
            for instance in &mut instances {
                instance.unmount();
            }
        }
        if n > 0 {
            log::info!("[page] unmounted {} engines", n);
        }
    }
}

impl PageHandle {
    fn scan() -> anyhow::Result<Self> {
        let window = dom::window()?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let root = document
            .document_element()
            .ok_or_else(|| anyhow::anyhow!("no document element"))?;

        let registry: Registry = Rc::new(RefCell::new(FnvHashMap::default()));
        for el in dom::query_all(&root, &format!("[{}]", ATTR_MOUNT)) {
            if el.has_attribute(ATTR_MOUNTED) {
                continue;
            }
            let value = el.get_attribute(ATTR_MOUNT).unwrap_or_default();
            let Some(kind) = MountKind::parse(&value) else {
                log::warn!("[page] unknown engine {:?}", value);
                continue;
            };
            match Instance::mount(kind, el.clone()) {
                Ok(instance) => {
                    _ = el.set_attribute(ATTR_MOUNTED, "");
                    registry.borrow_mut().entry(kind).or_default().push(instance);
                }
                Err(e) => log::error!("[page] {} failed to mount: {:#}", kind.as_str(), e),
            }
        }

        let has_loading = registry.borrow().contains_key(&MountKind::Loading);
        let load = if !has_loading {
            None
        } else if document.ready_state() == "complete" {
            finish_loading(&registry);
            None
        } else {
            let weak = Rc::downgrade(&registry);
            Some(Listener::new(&window, EVENT_LOAD, move |_| {
                if let Some(registry) = weak.upgrade() {
                    finish_loading(&registry);
                }
            })?)
        };

        let handle = Self { registry, load };
        log::info!("[page] mounted {} engines", handle.count());
        Ok(handle)
    }
}

impl Drop for PageHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}
