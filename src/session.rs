use log::{debug, info};
use regression::{x_bounds, FitMetrics, LinearRegression, Observation, RegressionError};
use serde::Serialize;

use crate::error::Result;

/// A training point next to the value the fitted line gives for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    pub x: f64,
    pub actual: f64,
    pub predicted: f64,
}

/// One trained model together with the data it was trained on and the
/// regression curve drawn over that data.
///
/// The three pieces always change together: a failed `train` leaves all of
/// them as they were.
#[derive(Debug, Clone)]
pub struct Session {
    model: LinearRegression,
    training_data: Vec<Observation>,
    curve: Vec<Observation>,
    curve_samples: usize,
}

impl Session {
    /// Creates a new, untrained `Session`.
    ///
    /// # Arguments
    /// * `curve_samples` - Number of points of the regression curve built on every training.
    pub fn new(curve_samples: usize) -> Self {
        Self {
            model: LinearRegression::new(),
            training_data: Vec::new(),
            curve: Vec::new(),
            curve_samples,
        }
    }

    /// Fits a fresh model to `data` and samples its curve over the range of `data`.
    ///
    /// # Returns
    /// The fitted parameters.
    ///
    /// # Errors
    /// Any `RegressionError` raised while fitting or sampling the curve. The
    /// session keeps its previous state in that case.
    pub fn train(&mut self, data: Vec<Observation>) -> Result<FitMetrics> {
        let mut model = LinearRegression::new();
        model.train(&data)?;

        let (min_x, max_x) =
            x_bounds(&data).ok_or(RegressionError::InsufficientData { got: data.len() })?;
        let curve = model.generate_curve(min_x, max_x, self.curve_samples)?;
        debug!(min_x = min_x, max_x = max_x, samples = curve.len(); "regression curve generated");

        let metrics = model.metrics();
        info!(
            points = data.len(), slope = metrics.slope(), intercept = metrics.intercept();
            "model trained"
        );

        self.model = model;
        self.training_data = data;
        self.curve = curve;
        Ok(metrics)
    }

    /// Predicts `y` for `x` with the current model.
    ///
    /// # Errors
    /// `RegressionError::ModelNotTrained` if the session was never trained.
    pub fn predict(&self, x: f64) -> Result<f64> {
        let y = self.model.predict(x)?;
        debug!(x = x, y = y; "prediction");
        Ok(y)
    }

    /// Pairs every training point with its fitted value, in training order.
    ///
    /// # Errors
    /// `RegressionError::ModelNotTrained` if the session was never trained.
    pub fn comparison(&self) -> Result<Vec<Comparison>> {
        if !self.model.is_trained() {
            return Err(RegressionError::ModelNotTrained.into());
        }

        self.training_data
            .iter()
            .map(|o| -> Result<Comparison> {
                Ok(Comparison {
                    x: o.x,
                    actual: o.y,
                    predicted: self.model.predict(o.x)?,
                })
            })
            .collect()
    }

    /// Drops the model, the training data and the curve.
    pub fn reset(&mut self) {
        info!("session reset");
        *self = Self::new(self.curve_samples);
    }

    pub fn training_data(&self) -> &[Observation] {
        &self.training_data
    }

    pub fn curve(&self) -> &[Observation] {
        &self.curve
    }

    pub fn metrics(&self) -> FitMetrics {
        self.model.metrics()
    }

    pub fn is_trained(&self) -> bool {
        self.model.is_trained()
    }
}
