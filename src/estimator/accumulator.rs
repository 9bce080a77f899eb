//! Per-call weight accumulation over the region grid.
//!
//! State is an arena with one slot per grid region, addressed by
//! [`RegionId`]. Each region is folded independently over the samples in
//! emission order, so the sequential and the `parallel` paths produce the same
//! sums bit for bit.

use crate::geometry::{clamp_to_rect, residual, Point};
use crate::grid::{Region, RegionGrid, RegionId};
use crate::sampling::WeightedSample;
use crate::weight::gaussian;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Weight and clamped-point statistics gathered for one region.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RegionSlot {
    pub weight: f64,
    pub sum: Point,
    pub hits: usize,
    /// Index of the first sample that touched the region.
    pub first_sample: usize,
}

impl RegionSlot {
    fn new(first_sample: usize) -> Self {
        Self {
            weight: 0.0,
            sum: Point::zeros(),
            hits: 0,
            first_sample,
        }
    }

    fn push(&mut self, clamped: Point, weight: f64) {
        self.weight += weight;
        self.sum += clamped;
        self.hits += 1;
    }

    /// Component-wise mean of the clamped points.
    pub fn mean(&self) -> Point {
        if self.hits == 0 {
            Point::zeros()
        } else {
            self.sum / self.hits as f64
        }
    }
}

pub(crate) struct Accumulator {
    slots: Vec<Option<RegionSlot>>,
}

impl Accumulator {
    /// Attributes every sample to every region within `sigma` of it.
    pub fn run(grid: &RegionGrid, samples: &[WeightedSample], sigma: f64) -> Self {
        #[cfg(feature = "parallel")]
        let slots = grid
            .regions()
            .par_iter()
            .map(|region| fold_region(region, samples, sigma))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let slots = grid
            .regions()
            .iter()
            .map(|region| fold_region(region, samples, sigma))
            .collect();
        Self { slots }
    }

    /// Touched regions in the order they were first reached when walking
    /// samples in emission order and regions in grid order.
    pub fn touched(&self) -> Vec<(RegionId, &RegionSlot)> {
        let mut out: Vec<(RegionId, &RegionSlot)> = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|s| (RegionId(i as u32), s)))
            .collect();
        // Stable: regions reached by the same sample keep grid order.
        out.sort_by_key(|(_, s)| s.first_sample);
        out
    }
}

fn fold_region(region: &Region, samples: &[WeightedSample], sigma: f64) -> Option<RegionSlot> {
    let mut slot: Option<RegionSlot> = None;
    for (i, sample) in samples.iter().enumerate() {
        let clamped = clamp_to_rect(&sample.point, &region.bounds);
        let r = residual(&clamped, &sample.point);
        if r.is_nan() || r > sigma {
            continue;
        }
        let w = sample.weight * region.prior_probability * gaussian(r, 0.0, sigma);
        slot.get_or_insert_with(|| RegionSlot::new(i)).push(clamped, w);
    }
    slot
}
