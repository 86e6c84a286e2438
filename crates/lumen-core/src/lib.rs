pub mod config;
pub mod constants;
pub mod error;
pub mod hover;
pub mod input;
pub mod lifecycle;
pub mod loading;
pub mod node_field;
pub mod paint;
pub mod parallax;
pub mod reveal;
pub mod style;
pub mod track;

pub use config::*;
pub use error::ConfigError;
pub use input::PointerState;
pub use lifecycle::Phase;
pub use node_field::{Node, NodeField};
pub use paint::{Painter, RecordingPainter};
pub use parallax::{Parallax, ScrollGeometry};
pub use reveal::{Reveal, RevealTimeline, TickOutcome, UnitFrame, VisibilityAction};
pub use style::UnitStyle;
