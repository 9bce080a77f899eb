use super::{SamplingParams, WeightedSample};
use crate::geometry::Bearing;
use crate::weight::gaussian;

/// Distances sampled around `center`: `distance_samples` values spaced
/// `σ_dist / 2` apart and centered on `center`, clamped at zero.
pub fn distance_ladder(center: f64, params: &SamplingParams) -> Vec<f64> {
    let n = params.distance_samples;
    let half = (n / 2) as f64;
    let step = params.sigma_dist / 2.0;
    (0..n)
        .map(|i| (center + (i as f64 - half) * step).max(0.0))
        .collect()
}

/// Points on the exact sight line at each ladder distance, weighted by how
/// far that distance is from `center`.
pub fn distance_samples(
    bearing: &Bearing,
    center: f64,
    params: &SamplingParams,
) -> Vec<WeightedSample> {
    distance_ladder(center, params)
        .into_iter()
        .map(|d| WeightedSample {
            point: bearing.point_at(d, 0.0),
            weight: gaussian(d, center, params.sigma_dist),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn ladder_centers_on_estimate() {
        let ladder = distance_ladder(3655.0 / 5.0, &SamplingParams::default());
        assert_eq!(ladder, vec![706.0, 718.5, 731.0, 743.5, 756.0]);
    }

    #[test]
    fn ladder_clamps_at_zero() {
        let ladder = distance_ladder(10.0, &SamplingParams::default());
        assert_eq!(ladder, vec![0.0, 0.0, 10.0, 22.5, 35.0]);
    }

    #[test]
    fn samples_lie_on_the_line_and_peak_at_center() {
        let bearing =
            Bearing::through(Point::new(0.5, 0.5), Point::zeros(), Point::new(0.0, 3.0))
                .expect("bearing");
        let samples = distance_samples(&bearing, 731.0, &SamplingParams::default());
        assert_eq!(samples.len(), 5);
        for s in &samples {
            assert_eq!(s.point.x, 0.5);
        }
        assert_eq!(samples[2].point, Point::new(0.5, 731.5));
        assert!(samples[2].weight > samples[1].weight);
        assert_eq!(samples[1].weight, samples[3].weight);
        assert_eq!(samples[0].weight, samples[4].weight);
    }
}
