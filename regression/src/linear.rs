use ndarray::Array1;

use crate::{FitMetrics, Observation, RegressionError, Result};

/// Number of samples used by [`LinearRegression::generate_default_curve`].
pub const DEFAULT_CURVE_SAMPLES: usize = 100;

/// Simple linear regression fitted by ordinary least squares.
///
/// The model starts untrained. Each call to [`train`](Self::train) recomputes
/// the slope and intercept from the full set of observations it receives;
/// the observations themselves are not kept.
#[derive(Debug, Clone, Default)]
pub struct LinearRegression {
    slope: f64,
    intercept: f64,
    trained: bool,
}

impl LinearRegression {
    /// Creates a new, untrained `LinearRegression`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fits the line `y = slope * x + intercept` to `observations`.
    ///
    /// # Args
    /// * `observations` - The training set, at least two points with at least
    ///   two distinct `x` values.
    ///
    /// # Errors
    /// - `RegressionError::InsufficientData` if fewer than two observations are given.
    /// - `RegressionError::DegenerateFit` if every `x` is the same or the fitted
    ///   parameters are not finite.
    ///
    /// On error the previous parameters are left untouched.
    pub fn train(&mut self, observations: &[Observation]) -> Result<()> {
        let n = observations.len();
        if n < 2 {
            return Err(RegressionError::InsufficientData { got: n });
        }

        let first_x = observations[0].x;
        if observations.iter().all(|o| o.x == first_x) {
            return Err(RegressionError::DegenerateFit);
        }

        let n = n as f64;
        let (sum_x, sum_y) = observations
            .iter()
            .fold((0., 0.), |(sum_x, sum_y), o| (sum_x + o.x, sum_y + o.y));
        let (mean_x, mean_y) = (sum_x / n, sum_y / n);

        // Centered sums keep their precision when x sits far from zero.
        let (s_xy, s_xx) = observations.iter().fold((0., 0.), |(s_xy, s_xx), o| {
            let dx = o.x - mean_x;
            (s_xy + dx * (o.y - mean_y), s_xx + dx * dx)
        });

        if !(s_xx > 0.) || !s_xx.is_finite() {
            return Err(RegressionError::DegenerateFit);
        }

        let slope = s_xy / s_xx;
        let intercept = mean_y - slope * mean_x;

        if !slope.is_finite() || !intercept.is_finite() {
            return Err(RegressionError::DegenerateFit);
        }

        self.slope = slope;
        self.intercept = intercept;
        self.trained = true;
        Ok(())
    }

    /// Evaluates the fitted line at `x`.
    ///
    /// # Errors
    /// Returns `RegressionError::ModelNotTrained` if the model was never trained.
    pub fn predict(&self, x: f64) -> Result<f64> {
        if !self.trained {
            return Err(RegressionError::ModelNotTrained);
        }

        Ok(self.slope * x + self.intercept)
    }

    /// Samples the fitted line at `samples` evenly spaced points in `[min_x, max_x]`.
    ///
    /// The step is `(max_x - min_x) / (samples - 1)`, so the first point is at
    /// `min_x` and the last one at `max_x`. The bounds are not reordered: if
    /// `min_x > max_x` the points are produced in descending `x`.
    ///
    /// # Args
    /// * `min_x` - First sampled abscissa.
    /// * `max_x` - Last sampled abscissa.
    /// * `samples` - Number of points to produce.
    ///
    /// # Errors
    /// - `RegressionError::ModelNotTrained` if the model was never trained.
    /// - `RegressionError::InvalidSampleCount` if `samples < 2`.
    pub fn generate_curve(
        &self,
        min_x: f64,
        max_x: f64,
        samples: usize,
    ) -> Result<Vec<Observation>> {
        if !self.trained {
            return Err(RegressionError::ModelNotTrained);
        }

        if samples < 2 {
            return Err(RegressionError::InvalidSampleCount { got: samples });
        }

        Array1::linspace(min_x, max_x, samples)
            .iter()
            .map(|&x| -> Result<Observation> {
                let y = self.predict(x)?;
                Ok(Observation::new(x, y))
            })
            .collect()
    }

    /// Same as [`generate_curve`](Self::generate_curve) with
    /// [`DEFAULT_CURVE_SAMPLES`] points.
    pub fn generate_default_curve(&self, min_x: f64, max_x: f64) -> Result<Vec<Observation>> {
        self.generate_curve(min_x, max_x, DEFAULT_CURVE_SAMPLES)
    }

    /// Returns the current slope and intercept, both zero while untrained.
    pub fn metrics(&self) -> FitMetrics {
        FitMetrics::new(self.slope, self.intercept)
    }

    pub fn is_trained(&self) -> bool {
        self.trained
    }
}
