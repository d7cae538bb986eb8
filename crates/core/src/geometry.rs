//! Axis-aligned geometry primitives for cargo placement.
//!
//! The cargo space uses a right-handed frame with `y` as the up axis
//! (gravity acts along -y); `x` spans the truck width and `z` its depth.
//! All placement geometry is axis-aligned, so intersection and support
//! queries reduce to per-axis interval arithmetic.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerance for zero-area and non-negativity tests.
pub const EPS: f64 = 1e-8;

/// An axis-aligned box given by its minimum corner and extents.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner (bottom-back-left).
    pub position: Vector3<f64>,
    /// Extents (width, height, depth), all non-negative.
    pub dimensions: Vector3<f64>,
}

impl Aabb {
    /// Creates an AABB from its minimum corner and extents.
    pub fn new(x: f64, y: f64, z: f64, w: f64, h: f64, d: f64) -> Self {
        Self {
            position: Vector3::new(x, y, z),
            dimensions: Vector3::new(w, h, d),
        }
    }

    /// Creates an AABB from a corner point and an extents vector.
    pub fn from_vectors(position: Vector3<f64>, dimensions: Vector3<f64>) -> Self {
        Self {
            position,
            dimensions,
        }
    }

    /// Returns the maximum corner of the box.
    pub fn max_corner(&self) -> Vector3<f64> {
        self.position + self.dimensions
    }

    /// Returns the enclosed volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Returns the footprint area in the xz-plane (seen from above).
    pub fn base_area(&self) -> f64 {
        self.dimensions.x * self.dimensions.z
    }

    /// Returns the xz centroid of the box.
    pub fn center_xz(&self) -> (f64, f64) {
        (
            self.position.x + self.dimensions.x / 2.0,
            self.position.z + self.dimensions.z / 2.0,
        )
    }

    /// Checks whether this box shares interior volume with another.
    ///
    /// Boxes that merely touch along a face do not intersect, so a box
    /// resting exactly on top of another is not a collision.
    pub fn intersects(&self, other: &Aabb) -> bool {
        let a_max = self.max_corner();
        let b_max = other.max_corner();

        let sep_x = a_max.x <= other.position.x || b_max.x <= self.position.x;
        let sep_y = a_max.y <= other.position.y || b_max.y <= self.position.y;
        let sep_z = a_max.z <= other.position.z || b_max.z <= self.position.z;

        !(sep_x || sep_y || sep_z)
    }
}

/// Length of the overlap between the intervals `[a0, a1]` and `[b0, b1]`.
pub fn overlap_1d(a0: f64, a1: f64, b0: f64, b1: f64) -> f64 {
    let lo = a0.max(b0);
    let hi = a1.min(b1);
    (hi - lo).max(0.0)
}

/// Area of the xz-plane overlap between two boxes.
pub fn overlap_area_xz(top: &Aabb, bottom: &Aabb) -> f64 {
    let ox = overlap_1d(
        top.position.x,
        top.position.x + top.dimensions.x,
        bottom.position.x,
        bottom.position.x + bottom.dimensions.x,
    );
    let oz = overlap_1d(
        top.position.z,
        top.position.z + top.dimensions.z,
        bottom.position.z,
        bottom.position.z + bottom.dimensions.z,
    );
    ox * oz
}

/// Checks whether the point `(px, pz)` lies in the closed xz rectangle where
/// `top` and `bottom` overlap, tolerant by [`EPS`].
pub fn point_in_overlap_xz(px: f64, pz: f64, top: &Aabb, bottom: &Aabb) -> bool {
    let x0 = top.position.x.max(bottom.position.x);
    let x1 = (top.position.x + top.dimensions.x).min(bottom.position.x + bottom.dimensions.x);
    let z0 = top.position.z.max(bottom.position.z);
    let z1 = (top.position.z + top.dimensions.z).min(bottom.position.z + bottom.dimensions.z);

    (px + EPS) >= x0 && (px - EPS) <= x1 && (pz + EPS) >= z0 && (pz - EPS) <= z1
}

/// Returns the six axis-aligned orientations of a box with extents `(w, h, d)`.
///
/// The enumeration order is part of the packing contract: when two candidate
/// placements tie on position, the earlier orientation wins.
pub fn orientations(dims: &Vector3<f64>) -> [Vector3<f64>; 6] {
    let (w, h, d) = (dims.x, dims.y, dims.z);
    [
        Vector3::new(w, h, d),
        Vector3::new(w, d, h),
        Vector3::new(h, w, d),
        Vector3::new(h, d, w),
        Vector3::new(d, w, h),
        Vector3::new(d, h, w),
    ]
}
