//! Risk scoring: raw model scores to bounded percentages and insight text.

mod engine;

pub use engine::{assess, risk_percent, Insight, ModelMode, RiskAssessment, TaggedScore};
