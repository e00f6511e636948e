use serde::Serialize;

/// Parameters of a fitted line `y = slope * x + intercept`.
///
/// This type keeps fields private so a snapshot can't be edited and fed
/// back as if it came from a fit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FitMetrics {
    slope: f64,
    intercept: f64,
}

impl FitMetrics {
    /// Creates a new `FitMetrics`.
    ///
    /// # Args
    /// * `slope` - The fitted slope.
    /// * `intercept` - The fitted intercept.
    ///
    /// # Returns
    /// A `FitMetrics` instance containing the provided parameters.
    pub(crate) fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Returns the slope of the fitted line.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Returns the intercept of the fitted line.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}
