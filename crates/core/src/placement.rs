//! Placement records and per-box load budgets.

use crate::geometry::{Aabb, EPS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A box may carry at most this multiple of its own weight.
pub const MAX_STACK_MULTIPLIER: f64 = 6.0;

/// Pressure cap over a box's top face, in kg per square meter.
pub const MAX_PRESSURE: f64 = 2500.0;

/// An accepted placement: the box id and the volume it occupies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// The id of the placed box.
    pub id: String,
    /// The accepted position and oriented extents.
    pub aabb: Aabb,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(id: impl Into<String>, aabb: Aabb) -> Self {
        Self {
            id: id.into(),
            aabb,
        }
    }
}

/// Mutable per-placed-box state tracked while a packing is constructed.
///
/// `load_on_top` accumulates the weight shares of boxes resting directly on
/// this one; it is applied provisionally during the candidate sweep and must
/// never exceed `max_load`.
#[derive(Debug, Clone)]
pub struct PlacedState {
    /// The occupied volume.
    pub aabb: Aabb,
    /// The box id.
    pub id: String,
    /// The box weight in kilograms.
    pub weight: f64,
    /// Load budget derived from weight and footprint.
    pub max_load: f64,
    /// Load currently applied by boxes resting on this one.
    pub load_on_top: f64,
}

impl PlacedState {
    /// Creates the state for a freshly accepted placement.
    pub fn new(aabb: Aabb, id: impl Into<String>, weight: f64) -> Self {
        let max_load = max_load_for(weight, aabb.base_area());
        Self {
            aabb,
            id: id.into(),
            weight,
            max_load,
            load_on_top: 0.0,
        }
    }

    /// Returns the y coordinate of the top face.
    pub fn top_y(&self) -> f64 {
        self.aabb.position.y + self.aabb.dimensions.y
    }
}

/// Computes the load budget of a supporting box.
///
/// Capacity is limited by both a weight-proportional heuristic and a simple
/// pressure proxy over the top face; the stricter one wins.
pub fn max_load_for(weight: f64, base_area: f64) -> f64 {
    let by_weight = weight * MAX_STACK_MULTIPLIER;
    let by_pressure = base_area.max(EPS) * MAX_PRESSURE;
    by_weight.min(by_pressure).max(EPS)
}
