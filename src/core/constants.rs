// Fixed gauge layout, palette and identifiers shared by the pure core and the web glue.

// Visualization registration
pub const VIS_ID: &str = "tvc_gauge";
pub const VIS_LABEL: &str = "Gauge";

// Layout
pub const CHART_HEIGHT: f64 = 175.0; // px, the gauge is always this tall
pub const GRADIENT_SLICES: usize = 200; // two slices per percent
pub const BACKGROUND_FILL: &str = "#ddd";
pub const CLIP_ID_PREFIX: &str = "foreground-clip";

// Gradient endpoints relative to the base color
pub const DARKER_FACTOR: f64 = 0.7; // per unit of `k` in darker(k)
pub const GRADIENT_DARKER_K: f64 = 0.5;
pub const GRADIENT_BRIGHTER_K: f64 = 0.5;

// Defaults merged under host configuration
pub const DEFAULT_CIRCLE_GAP_DEG: f64 = 60.0;
pub const DEFAULT_CIRCLE_THICKNESS_PX: f64 = 10.0;
pub const DEFAULT_TRANSITION_MS: f64 = 1000.0;
pub const DEFAULT_BASE_COLOR: &str = "#00b7a8";
pub const DEFAULT_TEXT_COLOR: &str = "#000000";
pub const DEFAULT_AUTOMATION_ID: &str = "tvc-gauge";

// Declared option ranges
pub const CIRCLE_GAP_MIN_DEG: f64 = 0.0;
pub const CIRCLE_GAP_MAX_DEG: f64 = 180.0;
pub const CIRCLE_THICKNESS_MIN_PX: f64 = 1.0;
pub const CIRCLE_THICKNESS_MAX_PX: f64 = 20.0;
pub const TRANSITION_MIN_MS: f64 = 0.0;

// Validation
pub const REQUIRED_MEASURES: usize = 2;

// Geometry tolerance, same as d3-shape / d3-path
pub const EPSILON: f64 = 1e-12;
pub const PATH_EPSILON: f64 = 1e-6;
