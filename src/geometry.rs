//! Planar helpers shared by the sampling and accumulation stages.
//!
//! Coordinates live in the horizontal `(x, z)` plane and are stored as
//! `nalgebra::Vector2<f64>` with `x` in component 0 and `z` in component 1.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

pub type Point = Vector2<f64>;

/// Vectors shorter than this are treated as having no direction.
pub const DEGENERATE_LENGTH: f64 = 1e-10;

/// Offset applied to an observed position to get the start of the sight line.
/// Targeting coordinates are block corners; the thrown eye leaves from the
/// block center.
pub const SIGHT_LINE_OFFSET: f64 = 0.5;

/// Axis-aligned rectangle `[x_min, x_max] × [z_min, z_max]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    pub x_min: f64,
    pub x_max: f64,
    pub z_min: f64,
    pub z_max: f64,
}

impl Rect {
    pub fn new(x_min: f64, x_max: f64, z_min: f64, z_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            z_min,
            z_max,
        }
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            (self.x_min + self.x_max) / 2.0,
            (self.z_min + self.z_max) / 2.0,
        )
    }

    /// Human readable corner pair, e.g. `(432, 0) to (704, 272)`.
    pub fn describe(&self) -> String {
        format!(
            "({}, {}) to ({}, {})",
            self.x_min as i64, self.z_min as i64, self.x_max as i64, self.z_max as i64
        )
    }
}

/// A sight line: where it starts and the unit vector it travels along.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bearing {
    pub anchor: Point,
    pub dir: Point,
}

impl Bearing {
    /// Builds the bearing from `from` toward `toward`, starting at `start`.
    /// Returns `None` when the two points coincide.
    pub fn through(start: Point, from: Point, toward: Point) -> Option<Self> {
        let (delta, len) = direction(&from, &toward);
        if len < DEGENERATE_LENGTH {
            return None;
        }
        Some(Self {
            anchor: start,
            dir: delta / len,
        })
    }

    /// Direction rotated by +90°.
    #[inline]
    pub fn perpendicular(&self) -> Point {
        Point::new(-self.dir.y, self.dir.x)
    }

    /// Point `along` units down the line and `across` units to its left.
    #[inline]
    pub fn point_at(&self, along: f64, across: f64) -> Point {
        self.anchor + self.dir * along + self.perpendicular() * across
    }
}

/// Start of the sight line for an observation made at `p`.
#[inline]
pub fn sight_line_start(p: &Point) -> Point {
    Point::new(p.x + SIGHT_LINE_OFFSET, p.y + SIGHT_LINE_OFFSET)
}

/// Returns `p2 - p1` and its Euclidean length. Callers must check the length
/// against [`DEGENERATE_LENGTH`] before normalizing.
#[inline]
pub fn direction(p1: &Point, p2: &Point) -> (Point, f64) {
    let delta = p2 - p1;
    let len = delta.norm();
    (delta, len)
}

/// Closest point to `p` inside `rect`.
#[inline]
pub fn clamp_to_rect(p: &Point, rect: &Rect) -> Point {
    Point::new(
        rect.x_min.max(rect.x_max.min(p.x)),
        rect.z_min.max(rect.z_max.min(p.y)),
    )
}

#[inline]
pub fn residual(a: &Point, b: &Point) -> f64 {
    (a - b).norm()
}

/// Rounds to the nearest integer with halves going toward +∞
/// (`2.5 → 3`, `-2.5 → -2`).
#[inline]
pub fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}
