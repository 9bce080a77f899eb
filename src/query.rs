//! Caller-side handling of raw observation input.
//!
//! The estimator itself only accepts finite numbers. This module turns the
//! text a user typed into an [`Observation`], rejecting anything that is not a
//! usable coordinate, and decides which estimation mode the observation
//! supports.

use crate::geometry::Point;
use crate::sampling::SamplingStrategy;
use serde::{Deserialize, Serialize};

/// Numerator of the pixel-change → distance conversion.
pub const DELTA_TO_DISTANCE: f64 = 3655.0;

/// Converts the measured pixel change of the thrown eye into a distance
/// estimate. Only positive, finite changes carry distance information, and
/// the resulting distance must be finite too (a subnormal change overflows).
pub fn distance_from_delta(delta: f64) -> Option<f64> {
    if !(delta.is_finite() && delta > 0.0) {
        return None;
    }
    let distance = DELTA_TO_DISTANCE / delta;
    distance.is_finite().then_some(distance)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryError {
    Missing { field: &'static str },
    NotANumber { field: &'static str, value: String },
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::Missing { field } => write!(f, "missing value for {field}"),
            QueryError::NotANumber { field, value } => {
                write!(f, "{field} is not a valid number: {value:?}")
            }
        }
    }
}

impl std::error::Error for QueryError {}

/// Two observed positions and an optional pixel-change measurement.
///
/// The first position is where the first eye was thrown, the second where
/// the player stood for the second throw.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub first: Point,
    pub second: Point,
    #[serde(default)]
    pub measured_delta: Option<f64>,
}

impl Observation {
    pub fn new(first: Point, second: Point) -> Self {
        Self {
            first,
            second,
            measured_delta: None,
        }
    }

    pub fn with_delta(mut self, delta: f64) -> Self {
        self.measured_delta = Some(delta);
        self
    }

    /// Parses the four coordinate fields and the optional pixel change.
    ///
    /// Blank or unparsable pixel change is treated as absent.
    pub fn parse(x1: &str, z1: &str, x2: &str, z2: &str, delta: &str) -> Result<Self, QueryError> {
        let first = Point::new(parse_field("x1", x1)?, parse_field("z1", z1)?);
        let second = Point::new(parse_field("x2", x2)?, parse_field("z2", z2)?);
        let measured_delta = delta
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|d| d.is_finite());
        Ok(Self {
            first,
            second,
            measured_delta,
        })
    }

    /// Distance estimate, if a usable pixel change was measured.
    pub fn distance(&self) -> Option<f64> {
        self.measured_delta.and_then(distance_from_delta)
    }

    /// Distance mode measures from the second position back toward the first;
    /// otherwise the bearing runs from the first position through the second.
    pub fn strategy(&self) -> SamplingStrategy {
        match self.distance() {
            Some(distance) => SamplingStrategy::Distance {
                anchor: self.second,
                toward: self.first,
                distance,
            },
            None => SamplingStrategy::Coordinate {
                from: self.first,
                toward: self.second,
            },
        }
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<f64, QueryError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(QueryError::Missing { field });
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(QueryError::NotANumber {
            field,
            value: trimmed.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_converts_to_distance() {
        assert_eq!(distance_from_delta(5.0), Some(731.0));
        assert_eq!(distance_from_delta(0.0), None);
        assert_eq!(distance_from_delta(-2.0), None);
        assert_eq!(distance_from_delta(f64::NAN), None);
    }

    #[test]
    fn subnormal_delta_does_not_overflow_into_distance() {
        assert_eq!(distance_from_delta(1e-320), None);
        assert_eq!(distance_from_delta(1e-300), Some(DELTA_TO_DISTANCE / 1e-300));

        let o = Observation::parse("100", "0", "0", "0", "1e-320").expect("valid");
        assert_eq!(o.measured_delta, Some(1e-320));
        assert_eq!(o.distance(), None);
        assert!(matches!(o.strategy(), SamplingStrategy::Coordinate { .. }));
    }

    #[test]
    fn parse_accepts_padded_numbers() {
        let o = Observation::parse(" 10", "-20.5", "30 ", "40", "").expect("valid");
        assert_eq!(o.first, Point::new(10.0, -20.5));
        assert_eq!(o.second, Point::new(30.0, 40.0));
        assert_eq!(o.measured_delta, None);
    }

    #[test]
    fn parse_reports_the_offending_field() {
        assert_eq!(
            Observation::parse("1", "", "3", "4", ""),
            Err(QueryError::Missing { field: "z1" })
        );
        assert_eq!(
            Observation::parse("1", "2", "abc", "4", ""),
            Err(QueryError::NotANumber {
                field: "x2",
                value: "abc".to_string()
            })
        );
        assert!(matches!(
            Observation::parse("1", "2", "3", "inf", ""),
            Err(QueryError::NotANumber { field: "z2", .. })
        ));
    }

    #[test]
    fn unusable_delta_falls_back_to_coordinate_mode() {
        let o = Observation::parse("0", "0", "100", "0", "oops").expect("valid");
        assert!(matches!(o.strategy(), SamplingStrategy::Coordinate { .. }));
        let o = o.with_delta(0.0);
        assert!(matches!(o.strategy(), SamplingStrategy::Coordinate { .. }));
    }

    #[test]
    fn positive_delta_selects_distance_mode_from_second_point() {
        let o = Observation::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0)).with_delta(5.0);
        match o.strategy() {
            SamplingStrategy::Distance {
                anchor,
                toward,
                distance,
            } => {
                assert_eq!(anchor, Point::new(100.0, 0.0));
                assert_eq!(toward, Point::new(0.0, 0.0));
                assert_eq!(distance, 731.0);
            }
            other => panic!("unexpected strategy {other:?}"),
        }
    }
}
