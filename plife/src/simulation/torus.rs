//! Toroidal 2D space
//!
//! The left/right and top/bottom edges are identified. Distances use the
//! shorter of the two paths around each axis, positions are kept inside
//! `[0, width) x [0, height)`.

use crate::error::WorldError;
use crate::simulation::states::NVec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Torus {
    pub width: f64,
    pub height: f64,
}

impl Torus {
    /// Rejects zero, negative and non-finite extents.
    pub fn new(width: f64, height: f64) -> Result<Self, WorldError> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(WorldError::InvalidExtent { width, height });
        }
        Ok(Self { width, height })
    }

    /// Displacement from `from` to `to` along the shorter path on each axis.
    pub fn delta(&self, from: &NVec2, to: &NVec2) -> NVec2 {
        let d = to - from;
        NVec2::new(wrap_axis(d.x, self.width), wrap_axis(d.y, self.height))
    }

    /// Map a position back onto the torus (exit one edge, re-enter the opposite one).
    pub fn wrap(&self, p: &mut NVec2) {
        p.x = wrap_coordinate(p.x, self.width);
        p.y = wrap_coordinate(p.y, self.height);
    }

    pub fn contains(&self, p: &NVec2) -> bool {
        (0.0..self.width).contains(&p.x) && (0.0..self.height).contains(&p.y)
    }
}

/// Shortest-path correction for one axis component of a raw displacement.
pub fn wrap_axis(d: f64, extent: f64) -> f64 {
    if d > 0.5 * extent {
        d - extent
    } else if d < -0.5 * extent {
        d + extent
    } else {
        d
    }
}

/// Euclidean remainder into `[0, extent)`.
pub fn wrap_coordinate(x: f64, extent: f64) -> f64 {
    let r = x.rem_euclid(extent);
    // rem_euclid rounds tiny negative inputs up to exactly `extent`
    if r >= extent {
        0.0
    } else {
        r
    }
}
