#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod geometry;
mod hover;
mod loading;
mod node_field;
mod page;
mod parallax;
mod render;
mod reveal;
mod track;

pub use hover::HoverEffect;
pub use loading::LoadingScreen;
pub use node_field::NodeFieldAnimator;
pub use page::{mount_page, PageHandle};
pub use parallax::ParallaxSection;
pub use reveal::AnimatedText;
pub use track::HorizontalScroll;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lumen-web {} ready", env!("CARGO_PKG_VERSION"));
    Ok(())
}
