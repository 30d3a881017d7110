//! Host-independent gauge logic. Nothing in here touches the DOM, so the
//! host-side tests can compile these files directly.

/// Annular-sector path generator producing SVG path data.
///
/// Angles follow the d3-shape convention: radians, measured clockwise from
/// 12 o'clock, with the origin at the arc center. Corners can be rounded; the
/// rounding radius shrinks automatically as the sector gets too narrow to
/// hold two full corners, until the corners merge into a single cap.
pub mod arc;
/// CSS color parsing and the few channel operations the gradient needs.
///
/// Channels are kept as unclamped `f64` so that `darker`/`brighter` and linear
/// interpolation compose without rounding; rounding and clamping happen only
/// when the color is written out as CSS.
pub mod color;
/// Gauge configuration: host settings merged over fixed defaults.
///
/// The host hands over whatever its settings panel currently holds, which may
/// be missing keys, `null`s or numbers typed as strings. Parsing goes through
/// an all-optional [`RawGaugeConfig`] and [`GaugeConfig::merge`] fills the
/// gaps, so a bad field degrades to its default instead of failing the render.
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod markup;
pub mod options;
/// Eased transition of the progress clip's end angle.
///
/// The clip datum outlives individual redraws: each update starts a new
/// transition from wherever the datum currently is. Transitions are tagged
/// with a generation number so a frame loop that has been superseded can
/// tell and stop touching the datum.
pub mod transition;
pub mod values;

pub use arc::{ArcDatum, ArcGenerator};
pub use config::GaugeConfig;
pub use error::GaugeError;
pub use geometry::ChartAttributes;
pub use transition::ClipState;
pub use values::{GaugeValues, QueryFields, Row};
