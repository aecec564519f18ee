//! Asset telemetry: sensor readings, adjustment ranges, and the fixed roster.

mod roster;

pub use roster::{Analysis, Asset, ClusterAssignment, Roster};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One set of AI4I sensor inputs, serialized under the exact column names
/// the prediction service expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    #[serde(rename = "Rotational speed [rpm]")]
    pub rotational_speed_rpm: f64,
    #[serde(rename = "Process temperature [K]")]
    pub process_temperature_k: f64,
    #[serde(rename = "Torque [Nm]")]
    pub torque_nm: f64,
    #[serde(rename = "Tool wear [min]")]
    pub tool_wear_min: f64,
}

/// Adjustable sensor field on an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorField {
    RotationalSpeed,
    ProcessTemperature,
    Torque,
    ToolWear,
}

/// Bounds and granularity for operator adjustments to one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SensorField {
    pub fn range(&self) -> SensorRange {
        match self {
            SensorField::RotationalSpeed => SensorRange {
                min: 800.0,
                max: 3000.0,
                step: 50.0,
            },
            SensorField::ProcessTemperature => SensorRange {
                min: 290.0,
                max: 360.0,
                step: 1.0,
            },
            SensorField::Torque => SensorRange {
                min: 0.0,
                max: 100.0,
                step: 1.0,
            },
            SensorField::ToolWear => SensorRange {
                min: 0.0,
                max: 300.0,
                step: 5.0,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SensorField::RotationalSpeed => "Rotational speed (rpm)",
            SensorField::ProcessTemperature => "Process temperature (K)",
            SensorField::Torque => "Torque (Nm)",
            SensorField::ToolWear => "Component wear (min)",
        }
    }
}

impl SensorReading {
    pub fn get(&self, field: SensorField) -> f64 {
        match field {
            SensorField::RotationalSpeed => self.rotational_speed_rpm,
            SensorField::ProcessTemperature => self.process_temperature_k,
            SensorField::Torque => self.torque_nm,
            SensorField::ToolWear => self.tool_wear_min,
        }
    }

    /// Set a field, clamped into its adjustment range.
    pub fn set(&mut self, field: SensorField, value: f64) {
        let range = field.range();
        let clamped = value.clamp(range.min, range.max);
        match field {
            SensorField::RotationalSpeed => self.rotational_speed_rpm = clamped,
            SensorField::ProcessTemperature => self.process_temperature_k = clamped,
            SensorField::Torque => self.torque_nm = clamped,
            SensorField::ToolWear => self.tool_wear_min = clamped,
        }
    }
}

/// "HH:MM - Today" for a checked instant, "Never" before the first check.
pub fn format_display_time(checked_at: Option<DateTime<Utc>>) -> String {
    match checked_at {
        Some(at) => format!("{} - Today", at.format("%H:%M")),
        None => "Never".to_string(),
    }
}
