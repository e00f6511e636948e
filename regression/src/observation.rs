use serde::{Deserialize, Serialize};

/// A single `(x, y)` pair, either a training sample or a point of a
/// generated curve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub x: f64,
    pub y: f64,
}

impl Observation {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Observation {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

fn bounds(mut values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let first = values.next()?;
    Some(values.fold((first, first), |(min, max), v| (min.min(v), max.max(v))))
}

/// Returns the smallest and largest `x` in `observations`.
///
/// # Returns
/// `None` when `observations` is empty.
pub fn x_bounds(observations: &[Observation]) -> Option<(f64, f64)> {
    bounds(observations.iter().map(|o| o.x))
}

/// Returns the smallest and largest `y` in `observations`.
///
/// # Returns
/// `None` when `observations` is empty.
pub fn y_bounds(observations: &[Observation]) -> Option<(f64, f64)> {
    bounds(observations.iter().map(|o| o.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_empty_is_none() {
        assert_eq!(x_bounds(&[]), None);
    }

    #[test]
    fn bounds_ignore_order() {
        let data: Vec<Observation> = [(4., 1.), (-2., 0.), (9., 3.), (0.5, 7.)]
            .into_iter()
            .map(Observation::from)
            .collect();

        assert_eq!(x_bounds(&data), Some((-2., 9.)));
    }

    #[test]
    fn bounds_of_single_point() {
        assert_eq!(x_bounds(&[Observation::new(3., 10.)]), Some((3., 3.)));
    }

    #[test]
    fn y_bounds_track_scores() {
        let data: Vec<Observation> = [(1., 35.), (2., 95.), (3., 50.)]
            .into_iter()
            .map(Observation::from)
            .collect();

        assert_eq!(y_bounds(&data), Some((35., 95.)));
        assert_eq!(y_bounds(&[]), None);
    }
}
