//! Truck cargo volume definitions.

use nalgebra::Vector3;

use crate::geometry::Aabb;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default weight capacity in kilograms when a request does not specify one.
pub const DEFAULT_MAX_WEIGHT: f64 = 12_000.0;

/// The rectangular cargo volume of a truck.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Truck {
    /// Interior extents (width, height, depth) in meters.
    dimensions: Vector3<f64>,

    /// Maximum total cargo weight in kilograms.
    max_weight: f64,
}

impl Truck {
    /// Creates a truck with the given interior extents and the default
    /// weight capacity.
    pub fn new(w: f64, h: f64, d: f64) -> Self {
        Self {
            dimensions: Vector3::new(w, h, d),
            max_weight: DEFAULT_MAX_WEIGHT,
        }
    }

    /// Sets the maximum total cargo weight.
    pub fn with_max_weight(mut self, max_weight: f64) -> Self {
        self.max_weight = max_weight;
        self
    }

    /// Returns the interior extents (width, height, depth).
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Returns the interior width.
    pub fn w(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the interior height.
    pub fn h(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the interior depth.
    pub fn d(&self) -> f64 {
        self.dimensions.z
    }

    /// Returns the maximum total cargo weight.
    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    /// Returns the cargo volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Checks whether a placed box lies fully inside the cargo volume.
    ///
    /// Faces may touch the truck walls.
    pub fn contains(&self, b: &Aabb) -> bool {
        let max = b.max_corner();
        b.position.x >= 0.0
            && b.position.y >= 0.0
            && b.position.z >= 0.0
            && max.x <= self.dimensions.x
            && max.y <= self.dimensions.y
            && max.z <= self.dimensions.z
    }

    /// Validates the truck definition.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions.x <= 0.0 || self.dimensions.y <= 0.0 || self.dimensions.z <= 0.0 {
            return Err(Error::InvalidGeometry(
                "all truck extents must be positive".into(),
            ));
        }

        if self.max_weight <= 0.0 {
            return Err(Error::InvalidGeometry(
                "truck max_weight must be positive".into(),
            ));
        }

        Ok(())
    }
}
