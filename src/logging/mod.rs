//! Structured JSON logging for console and cycle summaries.

mod format;

pub use format::{AssessmentLine, StructuredLogger};
