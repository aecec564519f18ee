//! Session-scoped history of score observations, one shared buffer per session.

mod buffer;

pub use buffer::HistoryBuffer;

use crate::risk::TaggedScore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Observations kept per session; the oldest is evicted first.
pub const MAX_HISTORY: usize = 40;

/// One prediction outcome captured for the history trace. Immutable once
/// created; the score carries the mode it was produced under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreObservation {
    pub timestamp: DateTime<Utc>,
    pub score: TaggedScore,
    pub is_anomaly: bool,
    pub asset_id: String,
}

impl ScoreObservation {
    pub fn new(asset_id: impl Into<String>, score: TaggedScore, is_anomaly: bool) -> Self {
        Self {
            timestamp: Utc::now(),
            score,
            is_anomaly,
            asset_id: asset_id.into(),
        }
    }
}
