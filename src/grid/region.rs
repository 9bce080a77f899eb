use crate::geometry::{Point, Rect};
use serde::Serialize;

/// Index of a region inside its [`RegionGrid`](super::RegionGrid).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RegionId(pub u32);

impl RegionId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Rectangular candidate area with a prior probability of holding the target.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: RegionId,
    pub bounds: Rect,
    pub center: Point,
    pub distance_from_origin: f64,
    pub prior_probability: f64,
    pub distance_bucket: i64,
}

impl Region {
    pub(crate) fn new(id: RegionId, bounds: Rect, bucket: i64, prior: f64) -> Self {
        let center = bounds.center();
        Self {
            id,
            bounds,
            center,
            distance_from_origin: center.norm(),
            prior_probability: prior,
            distance_bucket: bucket,
        }
    }
}

/// Near/far edges of one axis for grid index `index`.
///
/// Non-negative indices start on the grid line; negative indices are laid out
/// backward from a gap offset, so the pattern is not mirror-symmetric.
pub(crate) fn axis_span(index: i32, cell_size: f64, gap: f64) -> (f64, f64) {
    let step = cell_size + gap;
    if index >= 0 {
        let lo = index as f64 * step;
        (lo, lo + cell_size)
    } else {
        let hi = index as f64 * step - gap;
        (hi - cell_size, hi)
    }
}
