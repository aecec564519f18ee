//! Aurora Console — facility health monitoring core.
//!
//! Modular structure:
//! - [`telemetry`] — Asset roster, sensor readings, adjustment ranges
//! - [`service`] — Prediction service HTTP client
//! - [`risk`] — Score normalization and insight derivation
//! - [`history`] — Bounded session buffer of score observations
//! - [`trace`] — History trace geometry and raster rendering
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod telemetry;
pub mod service;
pub mod risk;
pub mod history;
pub mod trace;
pub mod logging;

pub use config::ConsoleConfig;
pub use history::{HistoryBuffer, ScoreObservation, MAX_HISTORY};
pub use risk::{Insight, ModelMode, RiskAssessment, TaggedScore};
pub use service::{PredictClient, PredictionResponse};
pub use telemetry::{Asset, Roster, SensorReading};
pub use trace::{render, TraceSurface};
pub use logging::StructuredLogger;
