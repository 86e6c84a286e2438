use crate::constants::{EVENT_POINTER_LEAVE, EVENT_POINTER_MOVE};
use crate::dom::Listener;
use crate::geometry;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer callbacks for one element. Positions are relative to the element's
/// top-left corner; the element's size is passed alongside.
pub struct PointerHandlers {
    pub on_move: Box<dyn FnMut(Vec2, Vec2)>,
    pub on_leave: Box<dyn FnMut()>,
}

/// Wire `pointermove`/`pointerleave` on `el`. The returned listeners unwire
/// on drop.
pub fn wire_pointer(el: &web::Element, handlers: PointerHandlers) -> anyhow::Result<[Listener; 2]> {
    let PointerHandlers {
        mut on_move,
        mut on_leave,
    } = handlers;

    let el_move = el.clone();
    let moved = Listener::new(el, EVENT_POINTER_MOVE, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let rect = el_move.get_bounding_client_rect();
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let origin = Vec2::new(rect.left() as f32, rect.top() as f32);
        let size = Vec2::new(rect.width() as f32, rect.height() as f32);
        on_move(geometry::surface_point(client, origin), size);
    })?;
    let left = Listener::new(el, EVENT_POINTER_LEAVE, move |_| on_leave())?;
    Ok([moved, left])
}
