//! History trace rendering: pure geometry plus a raster surface.

mod geometry;
mod render;
mod surface;

pub use geometry::{trace_geometry, TraceGeometry, BAND_MAX, BAND_MIN, PAD};
pub use render::{render, STROKE_ANOMALY, STROKE_HEALTHY, STROKE_WIDTH};
pub use surface::{Color, TraceSurface};
