//! Cargo box definitions.

use nalgebra::Vector3;

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A box to be loaded into the truck.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CargoBox {
    /// Unique identifier (SKU or line-item id).
    id: String,

    /// Extents (width, height, depth) in meters.
    dimensions: Vector3<f64>,

    /// Weight in kilograms.
    weight: f64,

    /// Loading priority; higher values are seeded earlier.
    priority: i32,
}

impl CargoBox {
    /// Creates a new box with the given id and extents.
    ///
    /// Weight defaults to 1.0 kg and priority to 1.
    pub fn new(id: impl Into<String>, w: f64, h: f64, d: f64) -> Self {
        Self {
            id: id.into(),
            dimensions: Vector3::new(w, h, d),
            weight: 1.0,
            priority: 1,
        }
    }

    /// Sets the weight in kilograms.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the loading priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the box identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the extents (width, height, depth).
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Returns the width.
    pub fn w(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the height.
    pub fn h(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the depth.
    pub fn d(&self) -> f64 {
        self.dimensions.z
    }

    /// Returns the weight in kilograms.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the loading priority.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Returns the volume of the box.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Validates the box definition.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(Error::InvalidGeometry("box id must not be empty".into()));
        }

        if self.dimensions.x <= 0.0 || self.dimensions.y <= 0.0 || self.dimensions.z <= 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "all extents for '{}' must be positive",
                self.id
            )));
        }

        if self.weight < 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "weight for '{}' cannot be negative",
                self.id
            )));
        }

        Ok(())
    }
}
