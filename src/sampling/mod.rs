//! Weighted test points along a bearing.
//!
//! Two strategies share the same output shape:
//! - [`SamplingStrategy::Coordinate`]: no distance information. Walks a fixed
//!   ladder of distances down the sight line and fans out perpendicular to it,
//!   weighting each point by its perpendicular offset.
//! - [`SamplingStrategy::Distance`]: an external distance estimate is known.
//!   Samples a few distances around it on the exact sight line, weighting each
//!   by how far it strays from the estimate.
//!
//! Both start from the sight-line origin, which is the observed position
//! shifted by [`SIGHT_LINE_OFFSET`](crate::geometry::SIGHT_LINE_OFFSET).

mod coordinate;
mod distance;

pub use coordinate::coordinate_samples;
pub use distance::{distance_ladder, distance_samples};

use crate::geometry::{sight_line_start, Bearing, Point};
use crate::types::EstimationMethod;
use crate::weight::{SIGMA_COORD, SIGMA_DIST};
use serde::{Deserialize, Serialize};

/// A test point and the weight it carries into accumulation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WeightedSample {
    pub point: Point,
    pub weight: f64,
}

/// Knobs for both sampling strategies.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SamplingParams {
    /// Perpendicular and residual tolerance (blocks).
    pub sigma_coord: f64,
    /// Tolerance on a supplied distance estimate (blocks).
    pub sigma_dist: f64,
    /// First distance on the coordinate-mode ladder.
    pub ladder_start: f64,
    /// Spacing between ladder rungs.
    pub ladder_step: f64,
    /// Number of ladder rungs.
    pub ladder_rungs: usize,
    /// Samples drawn around a supplied distance (odd, centered on it).
    pub distance_samples: usize,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            sigma_coord: SIGMA_COORD,
            sigma_dist: SIGMA_DIST,
            ladder_start: 500.0,
            ladder_step: 200.0,
            ladder_rungs: 20,
            distance_samples: 5,
        }
    }
}

/// Which observations drive an estimation call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum SamplingStrategy {
    /// Bearing from `from` toward `toward`; the sight line starts at `toward`.
    Coordinate { from: Point, toward: Point },
    /// Bearing from `anchor` toward `toward`; the target is `distance` out.
    Distance {
        anchor: Point,
        toward: Point,
        distance: f64,
    },
}

impl SamplingStrategy {
    pub fn method(&self) -> EstimationMethod {
        match self {
            SamplingStrategy::Coordinate { .. } => EstimationMethod::Coordinate,
            SamplingStrategy::Distance { .. } => EstimationMethod::Distance,
        }
    }

    /// Sight line for this strategy, or `None` if the two points coincide.
    pub fn bearing(&self) -> Option<Bearing> {
        match *self {
            SamplingStrategy::Coordinate { from, toward } => {
                Bearing::through(sight_line_start(&toward), from, toward)
            }
            SamplingStrategy::Distance { anchor, toward, .. } => {
                Bearing::through(sight_line_start(&anchor), anchor, toward)
            }
        }
    }

    /// Best estimate reported when no region collects any weight.
    ///
    /// Without a usable bearing this is the most directly supplied point.
    pub fn fallback_point(&self, bearing: Option<&Bearing>) -> Point {
        match (*self, bearing) {
            (SamplingStrategy::Coordinate { toward, .. }, _) => toward,
            (SamplingStrategy::Distance { anchor, .. }, None) => anchor,
            (SamplingStrategy::Distance { anchor, distance, .. }, Some(b)) => {
                anchor + b.dir * distance
            }
        }
    }

    /// Weighted samples along `bearing`, in emission order.
    pub fn samples(&self, bearing: &Bearing, params: &SamplingParams) -> Vec<WeightedSample> {
        match *self {
            SamplingStrategy::Coordinate { .. } => coordinate_samples(bearing, params),
            SamplingStrategy::Distance { distance, .. } => {
                distance_samples(bearing, distance, params)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_bearing_starts_at_offset_later_point() {
        let s = SamplingStrategy::Coordinate {
            from: Point::new(0.0, 0.0),
            toward: Point::new(1000.0, 0.0),
        };
        let b = s.bearing().expect("bearing");
        assert_eq!(b.anchor, Point::new(1000.5, 0.5));
        assert_eq!(b.dir, Point::new(1.0, 0.0));
    }

    #[test]
    fn distance_bearing_starts_at_offset_anchor() {
        let s = SamplingStrategy::Distance {
            anchor: Point::new(10.0, 20.0),
            toward: Point::new(10.0, -80.0),
            distance: 731.0,
        };
        let b = s.bearing().expect("bearing");
        assert_eq!(b.anchor, Point::new(10.5, 20.5));
        assert_eq!(b.dir, Point::new(0.0, -1.0));
        assert_eq!(s.fallback_point(Some(&b)), Point::new(10.0, 20.0 - 731.0));
    }

    #[test]
    fn degenerate_fallbacks_return_supplied_point() {
        let p = Point::new(5.0, 5.0);
        let c = SamplingStrategy::Coordinate { from: p, toward: p };
        assert!(c.bearing().is_none());
        assert_eq!(c.fallback_point(None), p);

        let d = SamplingStrategy::Distance {
            anchor: p,
            toward: p,
            distance: 800.0,
        };
        assert!(d.bearing().is_none());
        assert_eq!(d.fallback_point(None), p);
    }
}
