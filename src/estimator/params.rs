//! Parameters for the estimator.
//!
//! Defaults reproduce the fixed layout and tolerances the priors were
//! measured against; overriding them is mainly useful for experiments.

use crate::grid::GridParams;
use crate::sampling::SamplingParams;
use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EstimatorParams {
    /// Candidate lattice layout.
    pub grid: GridParams,
    /// Sampling ladders and tolerances.
    pub sampling: SamplingParams,
}
