//! Price-series chart computations.
//!
//! Pure geometry and statistics over a probability series: normalizing
//! samples into plot coordinates, building the smooth stroke/fill paths,
//! extracting summary metrics, and resolving a pointer position to the
//! nearest sample. Everything here is a synchronous function of its
//! inputs; the UI layer recomputes on each render and owns all drawing.

mod cursor;
mod curve;
mod metrics;
mod normalize;

pub use cursor::{ChartCursor, Readout, sample_index};
pub use curve::{Curve, PathCmd};
pub use metrics::{Bias, SeriesMetrics, extrema_indices};
pub use normalize::{PlotArea, Point, normalize};
