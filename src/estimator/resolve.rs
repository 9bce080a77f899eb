use super::accumulator::Accumulator;
use crate::geometry::{residual, round_half_up, Point};
use crate::grid::RegionGrid;
use crate::types::Candidate;
use std::cmp::Ordering;

/// Number of candidates (including the top one) considered for uncertainty.
const UNCERTAINTY_WINDOW: usize = 5;
/// Scale between the primary and the secondary coordinate system.
const SECONDARY_SCALE: f64 = 8.0;

/// Turns accumulated slots into normalized candidates sorted by conditional
/// probability, highest first. Ties keep first-touch order.
///
/// Returns an empty list when nothing collected positive, finite weight.
pub(crate) fn resolve_candidates(
    grid: &RegionGrid,
    acc: &Accumulator,
    anchor: &Point,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for (id, slot) in acc.touched() {
        if !(slot.weight.is_finite() && slot.weight > 0.0) || slot.hits == 0 {
            continue;
        }
        let Some(region) = grid.get(id) else {
            continue;
        };
        let mean = slot.mean();
        let projection = (round_half_up(mean.x), round_half_up(mean.y));
        let projected = Point::new(projection.0 as f64, projection.1 as f64);
        candidates.push(Candidate {
            projection,
            secondary: (
                round_half_up(projected.x / SECONDARY_SCALE),
                round_half_up(projected.y / SECONDARY_SCALE),
            ),
            raw_weight: slot.weight,
            conditional_probability: 0.0,
            distance_from_anchor: residual(&projected, anchor),
            region_center: region.center,
            region_distance_from_origin: region.distance_from_origin,
            region_distance_bucket: region.distance_bucket,
            region_bounds: region.bounds.describe(),
        });
    }

    let total: f64 = candidates.iter().map(|c| c.raw_weight).sum();
    if !(total.is_finite() && total > 0.0) {
        return Vec::new();
    }
    for c in &mut candidates {
        c.conditional_probability = c.raw_weight / total;
    }
    candidates.sort_by(|a, b| {
        b.conditional_probability
            .partial_cmp(&a.conditional_probability)
            .unwrap_or(Ordering::Equal)
    });
    candidates
}

/// Largest distance between the top candidate and the next few runners-up.
pub(crate) fn uncertainty(candidates: &[Candidate]) -> f64 {
    let Some(top) = candidates.first() else {
        return 0.0;
    };
    if candidates.len() < 2 {
        return 0.0;
    }
    let top = top.projection_point();
    candidates
        .iter()
        .take(UNCERTAINTY_WINDOW)
        .map(|c| residual(&c.projection_point(), &top))
        .fold(0.0, f64::max)
}
