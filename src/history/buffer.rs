//! Bounded FIFO buffer of observations; append evicts from the head.

use super::{ScoreObservation, MAX_HISTORY};
use std::collections::VecDeque;

/// Shared session history across all assets. One completion path appends;
/// trace views re-render from the buffer afterwards.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    points: VecDeque<ScoreObservation>,
    capacity: usize,
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(MAX_HISTORY)
    }
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append at the tail; drop from the head while over capacity.
    pub fn append(&mut self, observation: ScoreObservation) {
        self.points.push_back(observation);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Observations for one asset, insertion order preserved.
    pub fn for_asset(&self, asset_id: &str) -> Vec<&ScoreObservation> {
        self.points
            .iter()
            .filter(|p| p.asset_id == asset_id)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreObservation> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
