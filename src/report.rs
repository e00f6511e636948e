use regression::{FitMetrics, Observation};
use serde::Serialize;

use crate::session::Comparison;

/// A prediction answered during a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub x: f64,
    pub y: f64,
}

/// Everything a run produced, ready to be serialized for the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub metrics: FitMetrics,
    pub training_points: usize,
    /// Lowest observed `y` in the training data.
    pub min_y: f64,
    /// Highest observed `y` in the training data.
    pub max_y: f64,
    pub predictions: Vec<Prediction>,
    pub curve: Vec<Observation>,
    pub comparison: Vec<Comparison>,
}

impl Report {
    /// Encodes the report as pretty printed JSON.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if encoding fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
