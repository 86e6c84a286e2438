// Markup hooks and DOM-facing constants for the web front-end.
// Motion tuning lives in `lumen_core::constants`.

/// Marks an element for `mountPage()`; the value names the engine.
pub const ATTR_MOUNT: &str = "data-lumen";
/// JSON configuration for the engine mounted on the element.
pub const ATTR_CONFIG: &str = "data-lumen-config";
/// Set by `mountPage()` on every element it mounted.
pub const ATTR_MOUNTED: &str = "data-lumen-mounted";

// Loading screen parts
pub const SELECTOR_LOADING_BAR: &str = "[data-lumen-bar]";
pub const SELECTOR_LOADING_LABEL: &str = "[data-lumen-label]";
pub const SELECTOR_LOADING_WORD: &str = "[data-lumen-word]";

// Horizontal track parts
pub const SELECTOR_TRACK: &str = "[data-lumen-track]";
pub const SELECTOR_PANEL: &str = "[data-lumen-panel]";

// Reveal unit markup
pub const UNIT_CLASS: &str = "lumen-unit";
pub const WORD_CLASS: &str = "lumen-word";

pub const EVENT_SCROLL: &str = "scroll";
pub const EVENT_RESIZE: &str = "resize";
pub const EVENT_POINTER_MOVE: &str = "pointermove";
pub const EVENT_POINTER_LEAVE: &str = "pointerleave";
pub const EVENT_LOAD: &str = "load";

