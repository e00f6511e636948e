use std::{fs, path::Path};

use super::PredictorConfig;
use crate::error::Result;

/// Parses a [`PredictorConfig`] from JSON text.
///
/// # Errors
/// Returns `PredictorError::Json` if the text is not a valid config and
/// `PredictorError::InvalidConfig` if it fails validation.
pub fn parse_config(content: &str) -> Result<PredictorConfig> {
    let config: PredictorConfig = serde_json::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Loads a [`PredictorConfig`] from a JSON file.
///
/// # Errors
/// Returns `PredictorError::Io` if the file cannot be read, otherwise the
/// same errors as [`parse_config`].
pub fn load_config(path: &Path) -> Result<PredictorConfig> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PredictorError;

    #[test]
    fn empty_object_is_default() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config, PredictorConfig::default());
    }

    #[test]
    fn overrides_fields() {
        let config = parse_config(
            r#"{
                "x_values": "0,1",
                "y_values": "1,3",
                "queries": ["2", "-1"],
                "curve_samples": 3,
                "allow_negative_queries": true
            }"#,
        )
        .unwrap();

        assert_eq!(config.x_values, "0,1");
        assert_eq!(config.y_values, "1,3");
        assert_eq!(config.queries, vec!["2", "-1"]);
        assert_eq!(config.curve_samples, 3);
        assert!(config.allow_negative_queries);
    }

    #[test]
    fn rejects_unknown_fields() {
        let res = parse_config(r#"{ "slope": 2.0 }"#);
        assert!(matches!(res, Err(PredictorError::Json(_))));
    }

    #[test]
    fn rejects_short_curve() {
        let res = parse_config(r#"{ "curve_samples": 1 }"#);
        assert!(matches!(res, Err(PredictorError::InvalidConfig(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let res = load_config(Path::new("/definitely/not/here.json"));
        assert!(matches!(res, Err(PredictorError::Io(_))));
    }
}
