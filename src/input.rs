//! Turns the user's comma separated text into numbers the engine can use.
//!
//! The engine assumes well formed input, so every check on raw text lives
//! here: unparsable tokens, non-finite values, series of different lengths
//! and negative queries.

use std::{error::Error, fmt};

use regression::Observation;

/// Rejections produced while parsing user supplied text.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// The x and y series have a different number of values.
    LengthMismatch { x: usize, y: usize },
    /// A token is not a finite number.
    InvalidNumber {
        field: &'static str,
        index: usize,
        token: String,
    },
    /// A prediction was asked for a negative input while those are disallowed.
    NegativeQuery { value: f64 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::LengthMismatch { x, y } => write!(
                f,
                "x and y must have the same number of values, got {x} and {y}"
            ),
            InputError::InvalidNumber {
                field,
                index,
                token,
            } => write!(f, "{field}[{index}] is not a valid number: '{token}'"),
            InputError::NegativeQuery { value } => {
                write!(f, "prediction input cannot be negative, got {value}")
            }
        }
    }
}

impl Error for InputError {}

fn parse_number(field: &'static str, index: usize, token: &str) -> Result<f64, InputError> {
    let token = token.trim();

    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::InvalidNumber {
            field,
            index,
            token: token.to_string(),
        })
}

/// Parses a comma separated list of numbers.
///
/// # Args
/// * `field` - Name of the series, used in error messages.
/// * `text` - The raw text, e.g. `"1, 2.5, 3"`.
///
/// # Errors
/// Returns `InputError::InvalidNumber` for the first token that is empty, not
/// a number, or not finite.
pub fn parse_series(field: &'static str, text: &str) -> Result<Vec<f64>, InputError> {
    text.split(',')
        .enumerate()
        .map(|(i, token)| parse_number(field, i, token))
        .collect()
}

/// Pairs two series element by element.
///
/// # Errors
/// Returns `InputError::LengthMismatch` if the series have different lengths.
pub fn pair_series(xs: &[f64], ys: &[f64]) -> Result<Vec<Observation>, InputError> {
    if xs.len() != ys.len() {
        return Err(InputError::LengthMismatch {
            x: xs.len(),
            y: ys.len(),
        });
    }

    Ok(xs
        .iter()
        .zip(ys)
        .map(|(&x, &y)| Observation::new(x, y))
        .collect())
}

/// Parses the x and y text fields into training observations.
///
/// The token counts are compared before any token is parsed, so a length
/// mismatch is reported ahead of a bad number.
pub fn parse_observations(x_text: &str, y_text: &str) -> Result<Vec<Observation>, InputError> {
    let (x_len, y_len) = (x_text.split(',').count(), y_text.split(',').count());
    if x_len != y_len {
        return Err(InputError::LengthMismatch { x: x_len, y: y_len });
    }

    let xs = parse_series("x", x_text)?;
    let ys = parse_series("y", y_text)?;
    pair_series(&xs, &ys)
}

/// Parses a single prediction input.
///
/// # Errors
/// - `InputError::InvalidNumber` if `text` is not a finite number.
/// - `InputError::NegativeQuery` if the value is negative and `allow_negative` is false.
pub fn parse_query(text: &str, allow_negative: bool) -> Result<f64, InputError> {
    let value = parse_number("query", 0, text)?;

    if !allow_negative && value < 0. {
        return Err(InputError::NegativeQuery { value });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_series_with_spaces() {
        let xs = parse_series("x", " 1, 2.5 ,3,  -4e1").unwrap();
        assert_eq!(xs, vec![1., 2.5, 3., -40.]);
    }

    #[test]
    fn reports_first_bad_token() {
        let err = parse_series("y", "1,two,3,four").unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidNumber {
                field: "y",
                index: 1,
                token: "two".into(),
            }
        );
    }

    #[test]
    fn rejects_empty_tokens() {
        assert!(parse_series("x", "").is_err());
        assert!(parse_series("x", "1,,2").is_err());
        assert!(parse_series("x", "1,2,").is_err());
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(parse_series("x", "1,NaN").is_err());
        assert!(parse_series("x", "inf,1").is_err());
        assert!(parse_series("x", "1,1e400").is_err());
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let err = parse_observations("1,2,3", "4,5").unwrap_err();
        assert_eq!(err, InputError::LengthMismatch { x: 3, y: 2 });
    }

    #[test]
    fn mismatch_is_reported_before_bad_numbers() {
        assert_eq!(
            parse_observations("1,2,3", "4,x"),
            Err(InputError::LengthMismatch { x: 3, y: 2 })
        );
        assert_eq!(
            parse_observations("1,2,3", "4,5,x"),
            Err(InputError::InvalidNumber {
                field: "y",
                index: 2,
                token: "x".into(),
            })
        );
    }

    #[test]
    fn pairs_in_order() {
        let obs = parse_observations("3,1,2", "30,10,20").unwrap();
        assert_eq!(
            obs,
            vec![
                Observation::new(3., 30.),
                Observation::new(1., 10.),
                Observation::new(2., 20.),
            ]
        );
    }

    #[test]
    fn query_sign_policy() {
        assert_eq!(parse_query("6.5", false), Ok(6.5));
        assert_eq!(parse_query("0", false), Ok(0.));
        assert_eq!(
            parse_query("-1", false),
            Err(InputError::NegativeQuery { value: -1. })
        );
        assert_eq!(parse_query("-1", true), Ok(-1.));
        assert!(parse_query("abc", true).is_err());
    }
}
