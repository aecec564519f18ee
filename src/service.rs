//! Prediction service client: health probe and the single predict call.

use crate::config::ServiceConfig;
use crate::risk::ModelMode;
use crate::telemetry::{ClusterAssignment, SensorReading};
use serde::Deserialize;
use std::time::Duration;

/// Response from `POST /predict`. Only `is_anomaly` and `anomaly_score`
/// feed risk scoring; the cluster fields pass through for display.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResponse {
    pub is_anomaly: u8,
    pub anomaly_score: f64,
    #[serde(default)]
    pub operating_mode_cluster: Option<i64>,
    #[serde(default)]
    pub cluster_name: Option<String>,
    #[serde(default)]
    pub cluster_confidence: Option<f64>,
    #[serde(default)]
    pub cluster_recommendations: Option<Vec<String>>,
}

impl PredictionResponse {
    pub fn anomalous(&self) -> bool {
        self.is_anomaly == 1
    }

    /// Cluster pass-through, present only when the service assigned one.
    pub fn cluster(&self) -> Option<ClusterAssignment> {
        self.operating_mode_cluster.map(|id| ClusterAssignment {
            id,
            name: self.cluster_name.clone(),
            confidence: self.cluster_confidence,
            recommendation: self
                .cluster_recommendations
                .as_ref()
                .and_then(|r| r.first().cloned()),
        })
    }
}

/// Response from `GET /health`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub unsupervised_model_loaded: bool,
    #[serde(default)]
    pub supervised_model_loaded: bool,
}

pub struct PredictClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl PredictClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| e.to_string())?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ping the service; drives the connectivity indicator only.
    pub fn health(&self) -> Result<HealthStatus, String> {
        let url = format!("{}/health", self.base_url);
        let res = self.client.get(&url).send().map_err(|e| e.to_string())?;
        if !res.status().is_success() {
            return Err(res.status().to_string());
        }
        res.json::<HealthStatus>().map_err(|e| e.to_string())
    }

    /// Run one prediction. Any failure means no new observation: callers
    /// leave the asset and history untouched. A score that survives the
    /// JSON decode is always finite; serde refuses NaN and infinities.
    pub fn predict(
        &self,
        mode: ModelMode,
        reading: &SensorReading,
    ) -> Result<PredictionResponse, String> {
        let url = format!("{}/predict?mode={}", self.base_url, mode.as_str());
        let res = self
            .client
            .post(&url)
            .json(reading)
            .send()
            .map_err(|e| e.to_string())?;
        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().unwrap_or_default();
            return Err(format!("{} {}", status, text));
        }
        res.json::<PredictionResponse>().map_err(|e| e.to_string())
    }
}
