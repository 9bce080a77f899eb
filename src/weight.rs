//! Gaussian weighting used for perpendicular offsets, residuals and distance
//! estimates.

/// Tolerance on the perpendicular offset and on the residual between a sample
/// and the region it is attributed to.
pub const SIGMA_COORD: f64 = 50.0;
/// Tolerance on an externally supplied distance estimate.
pub const SIGMA_DIST: f64 = 25.0;

/// Normal density `N(x; mean, std_dev)`. Returns 0 for a non-positive `std_dev`.
#[inline]
pub fn gaussian(x: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev <= 0.0 {
        return 0.0;
    }
    let z = (x - mean) / std_dev;
    (-0.5 * z * z).exp() / (std_dev * (2.0 * std::f64::consts::PI).sqrt())
}
