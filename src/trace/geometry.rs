//! Pure trace geometry: axis bounds, point projection, endpoint status.

use crate::history::ScoreObservation;

/// Inner margin between the polyline and the surface edge, in layout units.
pub const PAD: f32 = 15.0;

/// Reference band for the vertical axis. The scale always spans at least
/// [-0.2, 0.8] so in-range score changes keep a stable visual scale; data
/// outside the band widens it.
pub const BAND_MIN: f64 = -0.2;
pub const BAND_MAX: f64 = 0.8;

/// Projected polyline for one asset's history.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceGeometry {
    /// Vertical bounds after widening for out-of-band scores.
    pub min_val: f64,
    pub max_val: f64,
    /// Surface points in layout units, insertion order.
    pub points: Vec<(f32, f32)>,
    /// Anomaly flag of the most recent observation; the whole line takes
    /// this status color.
    pub last_is_anomaly: bool,
}

fn vertical_bounds(scores: &[f64]) -> (f64, f64) {
    let mut min_val = BAND_MIN;
    let mut max_val = BAND_MAX;
    for s in scores {
        min_val = min_val.min(*s);
        max_val = max_val.max(*s);
    }
    (min_val, max_val)
}

/// Project an asset's observations onto a `width` x `height` layout box.
///
/// Points are spaced evenly by index, categorical steps rather than
/// timestamps. The y axis is linear between the bounds and inverted so
/// higher scores sit higher on the surface. Fewer than two points cannot
/// define a trend line and yield `None`.
pub fn trace_geometry(
    points: &[&ScoreObservation],
    width: f32,
    height: f32,
) -> Option<TraceGeometry> {
    if points.len() < 2 {
        return None;
    }
    let last = points.last()?;

    let scores: Vec<f64> = points.iter().map(|p| p.score.value()).collect();
    let (min_val, max_val) = vertical_bounds(&scores);
    let range = max_val - min_val;

    let span_x = width - PAD * 2.0;
    let span_y = height - PAD * 2.0;
    let last_index = (points.len() - 1) as f32;

    let projected = scores
        .iter()
        .enumerate()
        .map(|(i, score)| {
            let x = PAD + (i as f32 / last_index) * span_x;
            let y = height - PAD - ((score - min_val) / range) as f32 * span_y;
            (x, y)
        })
        .collect();

    Some(TraceGeometry {
        min_val,
        max_val,
        points: projected,
        last_is_anomaly: last.is_anomaly,
    })
}
