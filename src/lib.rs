pub mod configs;
pub mod error;
pub mod input;
mod report;
mod session;

pub use error::{PredictorError, Result};
pub use report::{Prediction, Report};
pub use session::{Comparison, Session};

use configs::PredictorConfig;

/// Trains a model on the configured data and answers every configured query.
///
/// # Errors
/// Returns the first `PredictorError` hit: invalid config, unparsable input,
/// or a regression failure.
pub fn run(config: &PredictorConfig) -> Result<Report> {
    config.validate()?;

    log::info!("parsing training data");
    let data = input::parse_observations(&config.x_values, &config.y_values)?;

    let mut session = Session::new(config.curve_samples);
    let metrics = session.train(data)?;

    let predictions = config
        .queries
        .iter()
        .map(|query| -> Result<Prediction> {
            let x = input::parse_query(query, config.allow_negative_queries)?;
            let y = session.predict(x)?;
            log::info!("predicted {y:.1} for {x}");
            Ok(Prediction { x, y })
        })
        .collect::<Result<Vec<_>>>()?;

    let training_data = session.training_data();
    let (min_y, max_y) = regression::y_bounds(training_data).ok_or(
        regression::RegressionError::InsufficientData {
            got: training_data.len(),
        },
    )?;

    Ok(Report {
        metrics,
        training_points: training_data.len(),
        min_y,
        max_y,
        predictions,
        curve: session.curve().to_vec(),
        comparison: session.comparison()?,
    })
}
