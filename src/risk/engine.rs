//! Maps raw model scores to a display risk percentage and a fixed-vocabulary insight.

use serde::{Deserialize, Serialize};

/// Model family that produced a score. Selects the normalization applied by
/// [`risk_percent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelMode {
    /// Isolation-forest style anomaly measure; higher raw score = more normal.
    Unsupervised,
    /// Failure probability in [0, 1] from a supervised classifier.
    Supervised,
}

impl ModelMode {
    /// Query-string value the prediction service expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelMode::Unsupervised => "unsupervised",
            ModelMode::Supervised => "supervised",
        }
    }
}

/// A raw score tagged with the mode that produced it, so stored observations
/// keep their meaning after the active mode changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "score", rename_all = "snake_case")]
pub enum TaggedScore {
    Unsupervised(f64),
    Supervised(f64),
}

impl TaggedScore {
    pub fn new(mode: ModelMode, value: f64) -> Self {
        match mode {
            ModelMode::Unsupervised => TaggedScore::Unsupervised(value),
            ModelMode::Supervised => TaggedScore::Supervised(value),
        }
    }

    pub fn mode(&self) -> ModelMode {
        match self {
            TaggedScore::Unsupervised(_) => ModelMode::Unsupervised,
            TaggedScore::Supervised(_) => ModelMode::Supervised,
        }
    }

    /// Raw value regardless of mode; the history trace plots this.
    pub fn value(&self) -> f64 {
        match self {
            TaggedScore::Unsupervised(v) | TaggedScore::Supervised(v) => *v,
        }
    }

    pub fn risk_percent(&self) -> i32 {
        risk_percent(self.mode(), Some(self.value()))
    }
}

/// Convert a raw model score to a display risk percentage.
///
/// Supervised scores are probabilities and map straight to percent, with no
/// clamping. Unsupervised scores are clamped to [-0.5, 0.5] and linearly
/// inverted, so -0.5 reads as 100 and 0.5 as 0. An absent score reads as 0.
///
/// This is a display heuristic, not a calibrated probability.
pub fn risk_percent(mode: ModelMode, score: Option<f64>) -> i32 {
    let Some(score) = score else {
        return 0;
    };
    match mode {
        ModelMode::Supervised => (score * 100.0).round() as i32,
        ModelMode::Unsupervised => {
            let clamped = score.clamp(-0.5, 0.5);
            let normalized = 0.5 - clamped;
            (normalized * 100.0).round() as i32
        }
    }
}

/// Fixed insight vocabulary shown next to the risk figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Insight {
    AwaitingAnalysis,
    NormalEnvelope,
    SlightDeviation,
    ElevatedRisk,
}

impl Insight {
    /// First-match decision table over the anomaly flag and risk percent.
    /// A set anomaly flag forces the elevated tier regardless of risk.
    pub fn derive(is_anomaly: Option<bool>, risk_percent: i32) -> Self {
        match is_anomaly {
            None => Insight::AwaitingAnalysis,
            Some(false) if risk_percent < 30 => Insight::NormalEnvelope,
            Some(false) if risk_percent < 60 => Insight::SlightDeviation,
            Some(_) => Insight::ElevatedRisk,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Insight::AwaitingAnalysis => {
                "Awaiting analysis. Adjust telemetry and run a health scan."
            }
            Insight::NormalEnvelope => {
                "Operating within normal envelope. No immediate maintenance required."
            }
            Insight::SlightDeviation => {
                "Slight deviation detected. Consider scheduling routine inspection soon."
            }
            Insight::ElevatedRisk => {
                "Elevated risk of failure. Recommend targeted inspection and load reduction."
            }
        }
    }
}

/// Displayable assessment for one asset's current state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_percent: i32,
    pub insight: Insight,
}

/// Derive the assessment from the latest tagged score and anomaly flag.
/// An absent score gives 0% risk; an absent flag gives the awaiting tier.
pub fn assess(score: Option<TaggedScore>, is_anomaly: Option<bool>) -> RiskAssessment {
    let risk_percent = score.map(|s| s.risk_percent()).unwrap_or(0);
    RiskAssessment {
        risk_percent,
        insight: Insight::derive(is_anomaly, risk_percent),
    }
}
