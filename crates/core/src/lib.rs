//! # Cargopack Core
//!
//! Truck-loading optimization engine: places a maximum-volume subset of
//! boxes into a rectangular cargo volume under physical plausibility
//! constraints.
//!
//! The engine combines two layers:
//!
//! - A deterministic constructive packer ([`pack_by_order`]) that walks the
//!   boxes in a given order and places each at the best extreme point over
//!   six axis-aligned orientations, honoring containment, non-overlap,
//!   support coverage and crush limits.
//! - A genetic optimizer ([`optimize_ga`]) over loading orders, with
//!   tournament selection, ordered crossover, swap mutation and elitism,
//!   seeded for reproducible results.
//!
//! ## Quick Start
//!
//! ```rust
//! use cargopack_core::{CargoBox, GaParams, Truck, optimize_ga};
//!
//! let truck = Truck::new(2.4, 2.6, 6.0).with_max_weight(8000.0);
//! let boxes = vec![
//!     CargoBox::new("SKU-00001", 1.2, 0.8, 1.0).with_weight(120.0),
//!     CargoBox::new("SKU-00002", 0.6, 0.4, 0.8).with_weight(35.0).with_priority(3),
//! ];
//!
//! let result = optimize_ga(&truck, &boxes, &GaParams::default()).unwrap();
//! println!(
//!     "placed {} boxes, utilization {}",
//!     result.placed.len(),
//!     result.utilization_percent()
//! );
//! ```
//!
//! ## Physical constraints
//!
//! Boxes above the floor must rest on the top faces of other boxes: at
//! least 90% of the base area must be covered and the xz centroid must lie
//! over a support. Each support absorbs an area-weighted share of the new
//! box's weight, capped by `min(6 x own weight, 2500 kg/m^2 x footprint)`.
//!
//! ## Feature Flags
//!
//! - `serde`: enable serialization/deserialization of the data types

pub mod candidates;
pub mod error;
pub mod ga;
pub mod geometry;
pub mod item;
pub mod packer;
pub mod placement;
pub mod result;
pub mod support;
pub mod truck;

// Re-exports
pub use candidates::CandidateSet;
pub use error::{Error, Result};
pub use ga::{optimize_ga, GaParams};
pub use geometry::Aabb;
pub use item::CargoBox;
pub use packer::pack_by_order;
pub use placement::{PlacedState, Placement};
pub use result::PackResult;
pub use truck::Truck;
