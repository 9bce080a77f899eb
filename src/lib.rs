#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod estimator;
pub mod query;
pub mod report;
pub mod types;

// Building blocks, public for tools and experiments.
pub mod config;
pub mod geometry;
pub mod grid;
pub mod io;
pub mod sampling;
pub mod weight;

// --- High-level re-exports -------------------------------------------------

pub use crate::estimator::{Estimator, EstimatorParams};
pub use crate::query::Observation;
pub use crate::types::{Candidate, EstimationMethod, EstimationResult};

pub use crate::diagnostics::{DetailedEstimate, EstimationTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use stronghold_locator::prelude::*;
///
/// let estimator = Estimator::default();
/// let result = estimator.estimate_from_coordinates(0.0, 0.0, 1000.0, 0.0);
/// if let Some(best) = result.best() {
///     println!(
///         "best=({}, {}) p={:.3}",
///         best.projection.0, best.projection.1, best.conditional_probability
///     );
/// }
/// ```
pub mod prelude {
    pub use crate::query::Observation;
    pub use crate::{Estimator, EstimatorParams, EstimationResult};
}
