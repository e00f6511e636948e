mod error;
mod linear;
mod metrics;
mod observation;

pub use error::{RegressionError, Result};
pub use linear::{LinearRegression, DEFAULT_CURVE_SAMPLES};
pub use metrics::FitMetrics;
pub use observation::{x_bounds, y_bounds, Observation};
