use crate::geometry::Point;
use serde::Serialize;

/// Which sampling strategy produced a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EstimationMethod {
    Coordinate,
    Distance,
}

impl EstimationMethod {
    pub fn label(self) -> &'static str {
        match self {
            EstimationMethod::Coordinate => "Coordinate-only calculation",
            EstimationMethod::Distance => "Distance-based (using pixel change)",
        }
    }
}

/// A region that collected weight during one estimation call.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Rounded mean of the clamped sample points attributed to the region.
    pub projection: (i64, i64),
    /// `projection / 8`, rounded: the same spot in the 1:8 scaled dimension.
    pub secondary: (i64, i64),
    pub raw_weight: f64,
    /// Share of the total raw weight of this call.
    pub conditional_probability: f64,
    /// Distance from the projection to the sight-line origin.
    pub distance_from_anchor: f64,
    pub region_center: Point,
    pub region_distance_from_origin: f64,
    pub region_distance_bucket: i64,
    pub region_bounds: String,
}

impl Candidate {
    #[inline]
    pub fn projection_point(&self) -> Point {
        Point::new(self.projection.0 as f64, self.projection.1 as f64)
    }
}

/// Ranked outcome of one estimation call.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    pub method: EstimationMethod,
    /// Sorted by `conditional_probability`, highest first.
    pub candidates: Vec<Candidate>,
    pub best_estimate: Point,
    /// Spread between the top candidate and the next few runners-up.
    pub uncertainty: f64,
}

impl EstimationResult {
    pub(crate) fn empty(method: EstimationMethod, best_estimate: Point) -> Self {
        Self {
            method,
            candidates: Vec::new(),
            best_estimate,
            uncertainty: 0.0,
        }
    }

    pub fn best(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
