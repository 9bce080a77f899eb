//! Optional trace of a single estimation call.
//!
//! Returned by [`Estimator::estimate_with_diagnostics`](crate::Estimator::estimate_with_diagnostics)
//! alongside the result. None of it feeds back into the estimate.

pub mod timing;

pub use timing::{StageTiming, TimingBreakdown};

use crate::geometry::{Bearing, Point};
use crate::types::{EstimationMethod, EstimationResult};
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BearingDiagnostics {
    pub anchor: Point,
    pub direction: Point,
}

impl From<&Bearing> for BearingDiagnostics {
    fn from(b: &Bearing) -> Self {
        Self {
            anchor: b.anchor,
            direction: b.dir,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationTrace {
    pub method: EstimationMethod,
    /// `None` when the two input points coincide.
    pub bearing: Option<BearingDiagnostics>,
    pub sample_count: usize,
    pub grid_regions: usize,
    pub touched_regions: usize,
    pub candidate_count: usize,
    pub total_raw_weight: f64,
    pub timing: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedEstimate {
    pub result: EstimationResult,
    pub trace: EstimationTrace,
}
