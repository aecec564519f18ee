//! Draws one asset's history trace onto a surface.

use super::geometry::trace_geometry;
use super::surface::{Color, TraceSurface};
use crate::history::HistoryBuffer;

/// Stroke width in layout units.
pub const STROKE_WIDTH: f32 = 2.5;

/// Line colors keyed off the most recent observation's anomaly flag.
pub const STROKE_ANOMALY: Color = Color::rgb(0xef, 0x44, 0x44);
pub const STROKE_HEALTHY: Color = Color::rgb(0x10, 0xb9, 0x81);

/// Re-derive the backing store from the layout box, clear, and stroke the
/// polyline for `asset_id`. With fewer than two matching observations the
/// surface is left blank.
pub fn render(surface: &mut TraceSurface, history: &HistoryBuffer, asset_id: &str) {
    surface.prepare();

    let points = history.for_asset(asset_id);
    let Some(geometry) = trace_geometry(&points, surface.layout_width(), surface.layout_height())
    else {
        return;
    };

    let color = if geometry.last_is_anomaly {
        STROKE_ANOMALY
    } else {
        STROKE_HEALTHY
    };
    surface.stroke_polyline(&geometry.points, color, STROKE_WIDTH);
}
