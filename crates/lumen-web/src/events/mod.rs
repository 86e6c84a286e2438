pub mod pointer;

pub use pointer::{wire_pointer, PointerHandlers};
