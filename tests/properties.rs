mod common;

use common::observations::{bearing_pairs, mixed_observations};
use stronghold_locator::geometry::round_half_up;
use stronghold_locator::grid::{GridParams, RegionGrid};
use stronghold_locator::query::distance_from_delta;
use stronghold_locator::sampling::{distance_ladder, SamplingParams, SamplingStrategy};
use stronghold_locator::weight::gaussian;
use stronghold_locator::{EstimationResult, Estimator};

fn all_results(estimator: &Estimator) -> Vec<EstimationResult> {
    mixed_observations()
        .iter()
        .map(|o| estimator.estimate(o))
        .collect()
}

#[test]
fn conditional_probabilities_sum_to_one() {
    let estimator = Estimator::default();
    let mut non_empty = 0;
    for result in all_results(&estimator) {
        if result.is_empty() {
            continue;
        }
        non_empty += 1;
        let total: f64 = result
            .candidates
            .iter()
            .map(|c| c.conditional_probability)
            .sum();
        assert!((total - 1.0).abs() <= 1e-9, "sum={total}");
    }
    assert!(non_empty > 0, "expected at least one non-empty result");
}

#[test]
fn candidates_are_sorted_by_probability() {
    let estimator = Estimator::default();
    for result in all_results(&estimator) {
        for pair in result.candidates.windows(2) {
            assert!(
                pair[0].conditional_probability >= pair[1].conditional_probability,
                "{} < {}",
                pair[0].conditional_probability,
                pair[1].conditional_probability
            );
        }
        if let Some(best) = result.best() {
            assert_eq!(result.best_estimate, best.projection_point());
        }
    }
}

#[test]
fn secondary_coordinates_are_projection_over_eight() {
    let estimator = Estimator::default();
    for result in all_results(&estimator) {
        for c in &result.candidates {
            assert_eq!(
                c.secondary,
                (
                    round_half_up(c.projection.0 as f64 / 8.0),
                    round_half_up(c.projection.1 as f64 / 8.0)
                )
            );
        }
    }
}

#[test]
fn uncertainty_is_bounded_by_runner_up_spread() {
    let estimator = Estimator::default();
    for result in all_results(&estimator) {
        if result.candidates.len() < 2 {
            assert_eq!(result.uncertainty, 0.0);
            continue;
        }
        let top = result.candidates[0].projection_point();
        let max = result.candidates[1..]
            .iter()
            .take(4)
            .map(|c| (c.projection_point() - top).norm())
            .fold(0.0, f64::max);
        assert_eq!(result.uncertainty, max);
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let estimator = Estimator::default();
    for obs in mixed_observations() {
        let a = estimator.estimate(&obs);
        let b = estimator.estimate(&obs);
        assert_eq!(a, b);
        for (ca, cb) in a.candidates.iter().zip(&b.candidates) {
            assert_eq!(ca.raw_weight.to_bits(), cb.raw_weight.to_bits());
        }
    }
}

#[test]
fn degenerate_bearings_never_fail() {
    let estimator = Estimator::default();
    let r = estimator.estimate_from_coordinates(5.0, 5.0, 5.0, 5.0);
    assert!(r.candidates.is_empty());
    assert_eq!(r.uncertainty, 0.0);
    assert_eq!((r.best_estimate.x, r.best_estimate.y), (5.0, 5.0));

    for (a, _) in bearing_pairs() {
        let r = estimator.estimate_from_distance(a.x, a.y, a.x, a.y, 731.0);
        assert!(r.candidates.is_empty());
        assert_eq!(r.best_estimate, a);
    }
}

#[test]
fn distance_mode_samples_around_converted_distance() {
    let distance = distance_from_delta(5.0).expect("positive delta");
    assert_eq!(distance, 731.0);
    assert_eq!(
        distance_ladder(distance, &SamplingParams::default()),
        vec![706.0, 718.5, 731.0, 743.5, 756.0]
    );

    let estimator = Estimator::default();
    let detailed = estimator.estimate_with_diagnostics(SamplingStrategy::Distance {
        anchor: stronghold_locator::geometry::Point::new(0.0, 0.0),
        toward: stronghold_locator::geometry::Point::new(3.0, 4.0),
        distance,
    });
    assert_eq!(detailed.trace.sample_count, 5);
}

#[test]
fn gaussian_is_symmetric_about_its_mean() {
    for &(x, m, s) in &[(0.0, 0.0, 50.0), (12.5, 731.0, 25.0), (-4000.0, 1.0, 50.0)] {
        let lhs = gaussian(x, m, s);
        let rhs = gaussian(2.0 * m - x, m, s);
        assert!((lhs - rhs).abs() <= 1e-15, "x={x} m={m} s={s}");
    }
}

#[test]
fn grid_generation_is_deterministic_and_respects_min_distance() {
    let a = RegionGrid::generate(&GridParams::default());
    let b = RegionGrid::generate(&GridParams::default());
    assert_eq!(a.regions(), b.regions());
    assert!(a.regions().iter().all(|r| r.distance_from_origin >= 512.0));
}
