//! Stronghold estimator.
//!
//! Pipeline per call
//! - Bearing: derive the sight line from the two observed points; a
//!   zero-length bearing short-circuits to an empty, zero-uncertainty result.
//! - Sampling: emit weighted test points with the chosen
//!   [`SamplingStrategy`].
//! - Accumulation: attribute each sample to every region within `σ_coord`,
//!   weighting by sample weight, region prior and residual.
//! - Resolution: average the clamped points per region, normalize weights
//!   into conditional probabilities and rank.
//!
//! The region grid is built once in [`Estimator::new`] and only read
//! afterwards, so a single estimator can serve concurrent calls.

mod accumulator;
mod params;
mod resolve;

pub use params::EstimatorParams;

use crate::diagnostics::timing::StageClock;
use crate::diagnostics::{DetailedEstimate, EstimationTrace};
use crate::geometry::Point;
use crate::grid::RegionGrid;
use crate::query::Observation;
use crate::sampling::SamplingStrategy;
use crate::types::EstimationResult;
use accumulator::Accumulator;
use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Clone, Debug)]
pub struct Estimator {
    params: EstimatorParams,
    grid: RegionGrid,
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(EstimatorParams::default())
    }
}

impl Estimator {
    pub fn new(params: EstimatorParams) -> Self {
        let grid = RegionGrid::generate(&params.grid);
        debug!("Estimator: region grid ready with {} regions", grid.len());
        Self { params, grid }
    }

    pub fn params(&self) -> &EstimatorParams {
        &self.params
    }

    pub fn grid(&self) -> &RegionGrid {
        &self.grid
    }

    /// Coordinate-only estimate: the target lies somewhere down the sight
    /// line from `(x1, z1)` through `(x2, z2)`.
    pub fn estimate_from_coordinates(
        &self,
        x1: f64,
        z1: f64,
        x2: f64,
        z2: f64,
    ) -> EstimationResult {
        self.estimate_with(SamplingStrategy::Coordinate {
            from: Point::new(x1, z1),
            toward: Point::new(x2, z2),
        })
    }

    /// Distance-based estimate: the target lies `distance` blocks from the
    /// anchor, in the direction of `(toward_x, toward_z)`.
    pub fn estimate_from_distance(
        &self,
        anchor_x: f64,
        anchor_z: f64,
        toward_x: f64,
        toward_z: f64,
        distance: f64,
    ) -> EstimationResult {
        self.estimate_with(SamplingStrategy::Distance {
            anchor: Point::new(anchor_x, anchor_z),
            toward: Point::new(toward_x, toward_z),
            distance,
        })
    }

    /// Picks the strategy the observation supports and runs it.
    pub fn estimate(&self, observation: &Observation) -> EstimationResult {
        self.estimate_with(observation.strategy())
    }

    /// Runs every observation independently; order is preserved.
    pub fn estimate_batch(&self, observations: &[Observation]) -> Vec<EstimationResult> {
        #[cfg(feature = "parallel")]
        {
            observations.par_iter().map(|o| self.estimate(o)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            observations.iter().map(|o| self.estimate(o)).collect()
        }
    }

    pub fn estimate_with(&self, strategy: SamplingStrategy) -> EstimationResult {
        self.estimate_with_diagnostics(strategy).result
    }

    pub fn estimate_with_diagnostics(&self, strategy: SamplingStrategy) -> DetailedEstimate {
        let mut clock = StageClock::start();
        let method = strategy.method();
        let Some(bearing) = strategy.bearing() else {
            debug!("Estimator: degenerate bearing ({:?}), returning empty result", method);
            let result = EstimationResult::empty(method, strategy.fallback_point(None));
            let trace = EstimationTrace {
                method,
                bearing: None,
                sample_count: 0,
                grid_regions: self.grid.len(),
                touched_regions: 0,
                candidate_count: 0,
                total_raw_weight: 0.0,
                timing: clock.finish(),
            };
            return DetailedEstimate { result, trace };
        };

        let sampling = &self.params.sampling;
        let samples = strategy.samples(&bearing, sampling);
        clock.lap("sampling");

        let acc = Accumulator::run(&self.grid, &samples, sampling.sigma_coord);
        let touched_regions = acc.touched().len();
        clock.lap("accumulate");

        let candidates = resolve::resolve_candidates(&self.grid, &acc, &bearing.anchor);
        let uncertainty = resolve::uncertainty(&candidates);
        let total_raw_weight: f64 = candidates.iter().map(|c| c.raw_weight).sum();
        clock.lap("resolve");

        let best_estimate = match candidates.first() {
            Some(top) => top.projection_point(),
            None => strategy.fallback_point(Some(&bearing)),
        };
        let timing = clock.finish();
        debug!(
            "Estimator: method={:?} samples={} touched={} candidates={} uncertainty={:.1} elapsed_ms={:.3}",
            method,
            samples.len(),
            touched_regions,
            candidates.len(),
            uncertainty,
            timing.total_ms
        );

        let trace = EstimationTrace {
            method,
            bearing: Some((&bearing).into()),
            sample_count: samples.len(),
            grid_regions: self.grid.len(),
            touched_regions,
            candidate_count: candidates.len(),
            total_raw_weight,
            timing,
        };
        let result = EstimationResult {
            method,
            candidates,
            best_estimate,
            uncertainty,
        };
        DetailedEstimate { result, trace }
    }
}
