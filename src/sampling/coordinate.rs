use super::{SamplingParams, WeightedSample};
use crate::geometry::Bearing;
use crate::weight::gaussian;

/// Ladder of distances down the sight line, each fanned out to
/// `{-σ, 0, +σ}` perpendicular offsets. Samples are emitted rung by rung,
/// offsets in ascending order.
pub fn coordinate_samples(bearing: &Bearing, params: &SamplingParams) -> Vec<WeightedSample> {
    let sigma = params.sigma_coord;
    let offsets = [-sigma, 0.0, sigma];
    let mut out = Vec::with_capacity(params.ladder_rungs * offsets.len());
    for rung in 0..params.ladder_rungs {
        let along = params.ladder_start + rung as f64 * params.ladder_step;
        for &across in &offsets {
            out.push(WeightedSample {
                point: bearing.point_at(along, across),
                weight: gaussian(across, 0.0, sigma),
            });
        }
    }
    out
}
