//! Packing result representation.

use crate::placement::Placement;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of packing a set of boxes into a truck.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackResult {
    /// Accepted placements, in placement order.
    pub placed: Vec<Placement>,

    /// Ids of boxes that could not be placed, in attempt order.
    pub unplaced: Vec<String>,

    /// Total volume of the placed boxes.
    pub used_volume: f64,

    /// Total volume of all input boxes, placed or not.
    pub total_volume: f64,

    /// Ratio of used volume to truck volume (0.0 - 1.0).
    pub utilization: f64,

    /// Total weight of the placed boxes.
    pub total_weight: f64,
}

impl PackResult {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if every input box was placed.
    pub fn all_placed(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Returns the number of placed boxes.
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// Fitness of this result for the genetic optimizer.
    ///
    /// Higher is better: rewards utilization, penalizes unplaced boxes.
    pub fn score(&self) -> f64 {
        self.utilization * 100.0 - self.unplaced.len() as f64 * 0.5
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization * 100.0)
    }
}
