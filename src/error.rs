use std::{error::Error, fmt, io};

use regression::RegressionError;

use crate::input::InputError;

/// The predictor's result type.
pub type Result<T> = std::result::Result<T, PredictorError>;

/// All errors that can occur while running a prediction session.
#[derive(Debug)]
pub enum PredictorError {
    /// The textual training data or a query could not be used.
    Input(InputError),
    /// The regression engine refused the operation.
    Regression(RegressionError),
    /// Invalid configuration, caught before any training happens.
    InvalidConfig(String),
    /// The configuration file could not be read.
    Io(io::Error),
    /// The configuration file is not valid JSON, or the report could not be encoded.
    Json(serde_json::Error),
}

impl fmt::Display for PredictorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "invalid input: {e}"),
            Self::Regression(e) => write!(f, "regression failed: {e}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl Error for PredictorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input(e) => Some(e),
            Self::Regression(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<InputError> for PredictorError {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

impl From<RegressionError> for PredictorError {
    fn from(e: RegressionError) -> Self {
        Self::Regression(e)
    }
}

impl From<io::Error> for PredictorError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for PredictorError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
