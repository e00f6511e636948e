use std::fmt;

/// The regression crate's result type.
pub type Result<T> = std::result::Result<T, RegressionError>;

/// Errors produced by the regression engine.
///
/// Every variant is local to the failed call: the engine keeps its previous
/// state and can be retried with corrected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegressionError {
    /// Fewer than two observations were given to `train`.
    InsufficientData {
        /// Number of observations received.
        got: usize,
    },

    /// `predict` or curve generation was called before a successful `train`.
    ModelNotTrained,

    /// The least-squares denominator vanished (every x is the same) or the
    /// fit produced a non-finite parameter.
    DegenerateFit,

    /// A curve was requested with fewer than two samples.
    InvalidSampleCount {
        /// Requested sample count.
        got: usize,
    },
}

impl fmt::Display for RegressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegressionError::InsufficientData { got } => {
                write!(f, "need at least 2 data points to train the model, got {got}")
            }
            RegressionError::ModelNotTrained => {
                write!(f, "model must be trained before making predictions")
            }
            RegressionError::DegenerateFit => write!(
                f,
                "cannot fit a line: all x values are identical or the fit is not finite"
            ),
            RegressionError::InvalidSampleCount { got } => {
                write!(f, "a curve needs at least 2 samples, got {got}")
            }
        }
    }
}

impl std::error::Error for RegressionError {}
