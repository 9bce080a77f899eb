//! Fixed lattice of candidate regions with distance-based priors.
//!
//! Regions are `cell_size`-wide squares separated by `gap`-wide corridors,
//! laid out over a symmetric index range on both axes. Cells whose center lies
//! closer than `min_distance` to the origin are dropped; each survivor takes
//! the prior of the nearest entry in the distance table.
//!
//! The grid is built once per [`Estimator`](crate::Estimator) and never
//! mutated, so it can be shared freely across threads.

mod region;
mod table;

pub use region::{Region, RegionId};

use crate::geometry::{round_half_up, Rect};
use log::trace;
use serde::Deserialize;

use region::axis_span;
use table::nearest_bucket;

/// Layout of the candidate lattice.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridParams {
    /// Side length of each region.
    pub cell_size: f64,
    /// Corridor width between neighbouring regions.
    pub gap: f64,
    /// Indices run from `-index_extent` to `index_extent` inclusive on both axes.
    pub index_extent: i32,
    /// Regions whose center is closer than this to the origin are discarded.
    pub min_distance: f64,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            cell_size: 272.0,
            gap: 160.0,
            index_extent: 15,
            min_distance: 512.0,
        }
    }
}

/// Immutable, ordered collection of candidate regions.
#[derive(Clone, Debug)]
pub struct RegionGrid {
    regions: Vec<Region>,
}

impl RegionGrid {
    /// Builds the lattice for `params`. Deterministic; never fails.
    pub fn generate(params: &GridParams) -> Self {
        let extent = params.index_extent.max(0);
        let side = (2 * extent + 1) as usize;
        let mut regions = Vec::with_capacity(side * side);
        for xi in -extent..=extent {
            let (x_min, x_max) = axis_span(xi, params.cell_size, params.gap);
            for zi in -extent..=extent {
                let (z_min, z_max) = axis_span(zi, params.cell_size, params.gap);
                let bounds = Rect::new(x_min, x_max, z_min, z_max);
                let dist = bounds.center().norm();
                if dist < params.min_distance {
                    continue;
                }
                let (bucket, prior) = nearest_bucket(round_half_up(dist));
                let id = RegionId(regions.len() as u32);
                regions.push(Region::new(id, bounds, bucket, prior));
            }
        }
        trace!(
            "RegionGrid: kept {} of {} cells (min_distance={})",
            regions.len(),
            side * side,
            params.min_distance
        );
        Self { regions }
    }

    #[inline]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    #[inline]
    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.index())
    }
}

impl Default for RegionGrid {
    fn default() -> Self {
        Self::generate(&GridParams::default())
    }
}
