mod json;
mod predictor;

pub use json::{load_config, parse_config};
pub use predictor::PredictorConfig;
