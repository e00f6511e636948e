use regression::DEFAULT_CURVE_SAMPLES;
use serde::Deserialize;

use crate::error::{PredictorError, Result};

const DEFAULT_HOURS: &str = "1,2,3,4,5,6,7,8,9";
const DEFAULT_SCORES: &str = "35,50,55,65,70,75,80,85,95";

/// Everything a prediction run needs, as the user would type it.
///
/// Missing fields in a JSON config take their default value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PredictorConfig {
    /// Comma separated x values (hours studied).
    pub x_values: String,
    /// Comma separated y values (scores), one per x value.
    pub y_values: String,
    /// Inputs to predict once the model is trained.
    pub queries: Vec<String>,
    /// Number of points of the regression curve drawn over the training range.
    pub curve_samples: usize,
    /// Whether negative query inputs are accepted.
    pub allow_negative_queries: bool,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            x_values: DEFAULT_HOURS.to_string(),
            y_values: DEFAULT_SCORES.to_string(),
            queries: Vec::new(),
            curve_samples: DEFAULT_CURVE_SAMPLES,
            allow_negative_queries: false,
        }
    }
}

impl PredictorConfig {
    /// Checks the settings that can be rejected before touching any data.
    ///
    /// # Errors
    /// Returns `PredictorError::InvalidConfig` if `curve_samples` is less than 2.
    pub fn validate(&self) -> Result<()> {
        if self.curve_samples < 2 {
            return Err(PredictorError::InvalidConfig(format!(
                "curve_samples must be at least 2, got {}",
                self.curve_samples
            )));
        }

        Ok(())
    }
}
