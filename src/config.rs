//! Console configuration, loaded from a JSON file with full defaults.

use crate::risk::ModelMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Prediction service endpoint and timeouts
    pub service: ServiceConfig,
    /// Layout of the history trace surface
    pub trace: TraceConfig,
    /// Logging
    pub log: LogConfig,
    /// Model family used for analysis runs
    pub mode: ModelMode,
    /// Seconds between analysis cycles; 0 runs a single cycle and exits
    pub cycle_interval_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Layout box of the trace surface, in layout units
    pub width: f32,
    pub height: f32,
    /// Backing store scale; 1.0 renders at layout resolution
    pub device_pixel_ratio: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            trace: TraceConfig::default(),
            log: LogConfig::default(),
            mode: ModelMode::Unsupervised,
            cycle_interval_secs: 0,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: 15,
            connect_timeout_secs: 5,
        }
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 240.0,
            device_pixel_ratio: 1.0,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl ConsoleConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<ConsoleConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }
}
