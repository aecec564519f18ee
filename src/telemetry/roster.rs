//! Fixed fleet of monitored machines and their latest analysis state.

use super::{SensorField, SensorReading};
use crate::risk::{assess, ModelMode, RiskAssessment, TaggedScore};
use crate::service::PredictionResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operating-mode cluster assignment passed through from the service for
/// display only; risk scoring never consults it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterAssignment {
    pub id: i64,
    pub name: Option<String>,
    pub confidence: Option<f64>,
    pub recommendation: Option<String>,
}

/// Latest completed prediction for an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub score: TaggedScore,
    pub is_anomaly: bool,
    pub checked_at: DateTime<Utc>,
    pub cluster: Option<ClusterAssignment>,
}

/// A monitored machine. Mutated only by sensor adjustments and completed
/// prediction responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub probe_id: String,
    pub reading: SensorReading,
    pub analysis: Option<Analysis>,
    /// Last supervised probability, kept across mode switches.
    pub failure_probability: Option<f64>,
}

impl Asset {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        probe_id: impl Into<String>,
        reading: SensorReading,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            probe_id: probe_id.into(),
            reading,
            analysis: None,
            failure_probability: None,
        }
    }

    /// Adjust one sensor, clamped into its range. This and
    /// [`Asset::apply_prediction`] are the only mutation paths.
    pub fn set_sensor(&mut self, field: SensorField, value: f64) {
        self.reading.set(field, value);
    }

    /// Record a completed prediction. This is the only path that writes the
    /// result fields.
    pub fn apply_prediction(
        &mut self,
        mode: ModelMode,
        response: &PredictionResponse,
        at: DateTime<Utc>,
    ) {
        if mode == ModelMode::Supervised {
            self.failure_probability = Some(response.anomaly_score);
        }
        self.analysis = Some(Analysis {
            score: TaggedScore::new(mode, response.anomaly_score),
            is_anomaly: response.anomalous(),
            checked_at: at,
            cluster: response.cluster(),
        });
    }

    /// Current display assessment. The stored score is interpreted under the
    /// mode it was captured with, not the active one.
    pub fn assessment(&self) -> RiskAssessment {
        let analysis = self.analysis.as_ref();
        assess(analysis.map(|a| a.score), analysis.map(|a| a.is_anomaly))
    }

    pub fn last_checked(&self) -> Option<DateTime<Utc>> {
        self.analysis.as_ref().map(|a| a.checked_at)
    }
}

/// The fixed set of monitored machines. Assets are never added or removed
/// at runtime; callers mutate them in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    assets: Vec<Asset>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            assets: vec![
                Asset::new(
                    "hvac",
                    "HVAC Unit A",
                    "#A1-99",
                    SensorReading {
                        rotational_speed_rpm: 1500.0,
                        process_temperature_k: 305.0,
                        torque_nm: 40.0,
                        tool_wear_min: 0.0,
                    },
                ),
                Asset::new(
                    "pump",
                    "Chilled Water Pump",
                    "#P2-42",
                    SensorReading {
                        rotational_speed_rpm: 1200.0,
                        process_temperature_k: 300.0,
                        torque_nm: 35.0,
                        tool_wear_min: 10.0,
                    },
                ),
                Asset::new(
                    "fan",
                    "Supply Fan Cluster",
                    "#F9-12",
                    SensorReading {
                        rotational_speed_rpm: 1800.0,
                        process_temperature_k: 310.0,
                        torque_nm: 25.0,
                        tool_wear_min: 50.0,
                    },
                ),
            ],
        }
    }
}

impl Roster {
    pub fn get(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Asset> {
        self.assets.iter_mut().find(|a| a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Asset> {
        self.assets.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
