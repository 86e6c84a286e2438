/// Motion tuning constants shared by every front-end.
///
/// These constants express intended behavior (areas, fractions of the
/// surface width, settle times) and keep magic numbers out of the engines.

// Node field: count = floor(area / (NODE_AREA_UNIT / density))
pub const NODE_AREA_UNIT: f32 = 10_000.0;
pub const DEFAULT_DENSITY: f32 = 15.0;
pub const MAX_DENSITY: f32 = 100.0;
// Hard ceiling for unvalidated callers; the link scan is quadratic.
pub const MAX_NODES: usize = 20_000;
pub const DEFAULT_NODE_COLOR: &str = "rgba(0, 255, 200, 0.2)";

// Ambient profile (page background)
pub const AMBIENT_SPEED_SPAN: f32 = 0.1; // velocity components in ±span/2 px per frame
pub const AMBIENT_RADIUS_MIN: f32 = 0.5;
pub const AMBIENT_RADIUS_SPAN: f32 = 2.0;
pub const AMBIENT_CONNECTION_FRAC: f32 = 0.07; // of surface width
pub const AMBIENT_LINE_ALPHA: f32 = 1.0;

// Showcase profile (technology section particles)
pub const SHOWCASE_SPEED_SPAN: f32 = 1.0;
pub const SHOWCASE_RADIUS_MIN: f32 = 1.0;
pub const SHOWCASE_RADIUS_SPAN: f32 = 5.0;
pub const SHOWCASE_CONNECTION_FRAC: f32 = 1.0 / 15.0;
pub const SHOWCASE_LINE_ALPHA: f32 = 0.1;
pub const SHOWCASE_OPACITY_MIN: f32 = 0.3;
pub const SHOWCASE_OPACITY_SPAN: f32 = 0.5;

// Pointer interaction
pub const POINTER_INFLUENCE_FRAC: f32 = 0.1; // of surface width
pub const POINTER_PUSH: f32 = 0.01; // max velocity change per frame

pub const CONNECTION_LINE_WIDTH: f64 = 0.5;

// Frame pacing: node velocities are expressed per 60 Hz frame
pub const REFERENCE_FRAME_SEC: f32 = 1.0 / 60.0;
pub const MAX_FRAME_STEPS: f32 = 3.0; // cap after tab switches / long stalls

// Parallax
pub const DEFAULT_PARALLAX_SPEED: f32 = 0.1;
pub const DEFAULT_PARALLAX_EASING: f32 = 0.1;
pub const PARALLAX_RANGE: f32 = 100.0; // px per viewport height of distance at speed 1
pub const PARALLAX_ROOT_MARGIN_PX: f64 = 50.0;

// Text reveal
pub const DEFAULT_REVEAL_DURATION_SEC: f64 = 0.5;
pub const DEFAULT_STAGGER_SEC: f64 = 0.03;
pub const REVEAL_VISIBILITY_THRESHOLD: f64 = 0.1;
pub const REVEAL_RISE_PX: f32 = 10.0;
pub const TYPING_UNIT_DURATION_SEC: f64 = 0.01;
pub const NBSP: char = '\u{00A0}';

// Glow passes (standard / typing)
pub const GLOW_IN_LAG_SEC: f64 = 0.2;
pub const GLOW_IN_DURATION_SEC: f64 = 0.5;
pub const GLOW_OUT_DURATION_SEC: f64 = 0.8;
pub const TYPING_GLOW_IN_LAG_SEC: f64 = 0.02;
pub const TYPING_GLOW_IN_DURATION_SEC: f64 = 0.2;
pub const TYPING_GLOW_OUT_DURATION_SEC: f64 = 0.3;
pub const GLOW_OUT_GAP_SEC: f64 = 0.1;

// Loading screen
pub const LOADING_TICK_SEC: f32 = 0.150;
pub const LOADING_STEP_MAX: f32 = 3.0;
pub const LOADING_CAP: f32 = 80.0;
pub const FINISH_TICK_SEC: f32 = 0.016;
pub const FINISH_EASING: f32 = 0.1;
pub const FINISH_SNAP: f32 = 99.9;
pub const LOADING_HOLD_SEC: f32 = 0.5;
pub const LOADING_FADE_SEC: f32 = 0.7;
pub const LOADER_WORD_PERIOD_SEC: f32 = 1.5;
pub const LOADER_WORDS: [&str; 4] = ["Crafting", "Designing", "Loading", "Preparing"];

// Hover motion
pub const TILT_MAX_DEG: f32 = 10.0;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const TILT_SETTLE_SEC: f32 = 0.4;
pub const TILT_RELEASE_SEC: f32 = 0.6;
pub const FOLLOW_FACTOR_PX: f32 = 50.0;
pub const FOLLOW_SETTLE_SEC: f32 = 0.5;

// Horizontal track
pub const TRACK_SCRUB_SEC: f32 = 1.0;
pub const PANEL_FROM_OPACITY: f32 = 0.3;
pub const PANEL_FROM_SCALE: f32 = 0.8;
pub const PANEL_TWEEN_SEC: f32 = 1.0;

// Exponential smoothing reaches ~95% of the gap after three time constants
pub const SETTLE_TIME_CONSTANTS: f32 = 3.0;
