//! Request and response types for the optimization API.

use serde::{Deserialize, Serialize};

use cargopack_core::PackResult;

/// A truck-loading optimization request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeRequest {
    /// Truck cargo volume.
    pub truck: TruckRequest,

    /// Boxes to load.
    #[serde(default)]
    pub boxes: Vec<BoxRequest>,

    /// Optimizer parameters (defaults apply when absent).
    #[serde(default)]
    pub params: Option<ParamsRequest>,
}

/// Truck definition in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TruckRequest {
    /// Interior width in meters.
    pub w: f64,

    /// Interior height in meters.
    pub h: f64,

    /// Interior depth in meters.
    pub d: f64,

    /// Maximum total cargo weight in kilograms.
    #[serde(default = "default_max_weight")]
    pub max_weight: f64,
}

/// Box definition in a request.
///
/// The identifier may arrive as `id` or `sku`; `id` wins when both are set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxRequest {
    /// Box identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Alternative identifier field used by dataset payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Width in meters.
    pub w: f64,

    /// Height in meters.
    pub h: f64,

    /// Depth in meters.
    pub d: f64,

    /// Weight in kilograms.
    #[serde(default = "default_weight")]
    pub weight: f64,

    /// Loading priority.
    #[serde(default = "default_priority")]
    pub priority: i32,
}

/// Optimizer parameters in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamsRequest {
    /// GA population size.
    #[serde(default = "default_population")]
    pub population: i32,

    /// GA generation count.
    #[serde(default = "default_generations")]
    pub generations: i32,

    /// Swap-mutation probability (0.0 - 1.0).
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f64,

    /// PRNG seed for reproducible results.
    #[serde(default = "default_seed")]
    pub seed: u32,
}

impl Default for ParamsRequest {
    fn default() -> Self {
        Self {
            population: default_population(),
            generations: default_generations(),
            mutation_rate: default_mutation_rate(),
            seed: default_seed(),
        }
    }
}

/// A truck-loading optimization response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeResponse {
    /// Accepted placements, in placement order.
    pub placed: Vec<PlacedBoxResponse>,

    /// Ids of boxes that could not be placed.
    pub unplaced: Vec<String>,

    /// Aggregate metrics of the returned packing.
    pub metrics: MetricsResponse,
}

/// One placed box in a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedBoxResponse {
    /// Box identifier.
    pub id: String,
    /// Placement x coordinate.
    pub x: f64,
    /// Placement y coordinate.
    pub y: f64,
    /// Placement z coordinate.
    pub z: f64,
    /// Oriented width.
    pub w: f64,
    /// Oriented height.
    pub h: f64,
    /// Oriented depth.
    pub d: f64,
}

/// Aggregate metrics in a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsResponse {
    /// Total volume of the placed boxes.
    pub used_volume: f64,
    /// Total volume of all input boxes.
    pub total_volume: f64,
    /// Used volume over truck volume (0.0 - 1.0).
    pub utilization: f64,
    /// Total weight of the placed boxes.
    pub total_weight: f64,
}

impl From<PackResult> for OptimizeResponse {
    fn from(result: PackResult) -> Self {
        Self {
            placed: result
                .placed
                .into_iter()
                .map(|p| PlacedBoxResponse {
                    id: p.id,
                    x: p.aabb.position.x,
                    y: p.aabb.position.y,
                    z: p.aabb.position.z,
                    w: p.aabb.dimensions.x,
                    h: p.aabb.dimensions.y,
                    d: p.aabb.dimensions.z,
                })
                .collect(),
            unplaced: result.unplaced,
            metrics: MetricsResponse {
                used_volume: result.used_volume,
                total_volume: result.total_volume,
                utilization: result.utilization,
                total_weight: result.total_weight,
            },
        }
    }
}

fn default_max_weight() -> f64 {
    12_000.0
}

fn default_weight() -> f64 {
    1.0
}

fn default_priority() -> i32 {
    1
}

fn default_population() -> i32 {
    40
}

fn default_generations() -> i32 {
    40
}

fn default_mutation_rate() -> f64 {
    0.08
}

fn default_seed() -> u32 {
    12345
}
