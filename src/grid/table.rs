//! Empirical distance → probability prior.
//!
//! Keys are distances from the world origin in blocks; values are the observed
//! share of strongholds near that distance. The table is kept in ascending key
//! order, which makes the nearest-key lookup deterministic on exact ties.

pub(crate) const DISTANCE_PRIORS: [(i64, f64); 24] = [
    (500, 0.0262),
    (600, 0.0639),
    (800, 0.1705),
    (900, 0.1582),
    (1000, 0.1427),
    (1100, 0.1204),
    (1200, 0.0919),
    (1300, 0.1133),
    (1400, 0.1139),
    (1500, 0.1228),
    (1700, 0.0586),
    (1800, 0.0535),
    (1900, 0.0610),
    (2100, 0.0590),
    (2200, 0.0431),
    (2300, 0.0375),
    (2400, 0.0292),
    (2500, 0.0493),
    (2600, 0.0382),
    (2700, 0.0347),
    (2800, 0.0258),
    (3000, 0.0171),
    (3100, 0.0169),
    (3200, 0.0189),
];

/// Returns the `(bucket, probability)` entry whose key is closest to
/// `distance`. On an exact tie the smaller key wins.
pub(crate) fn nearest_bucket(distance: i64) -> (i64, f64) {
    let mut best = DISTANCE_PRIORS[0];
    let mut best_diff = (best.0 - distance).abs();
    for &(key, prob) in DISTANCE_PRIORS.iter().skip(1) {
        let diff = (key - distance).abs();
        if diff < best_diff {
            best_diff = diff;
            best = (key, prob);
        }
    }
    best
}
