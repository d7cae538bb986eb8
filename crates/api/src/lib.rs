//! # Cargopack API
//!
//! Typed request/response adapter for the cargopack optimizer. Hosts parse
//! an [`OptimizeRequest`] (or hand over raw JSON), this crate applies the
//! documented field defaults and dispatches to
//! [`optimize_ga`](cargopack_core::optimize_ga).
//!
//! ```rust
//! let response = cargopack_api::optimize_json(
//!     r#"{
//!         "truck": { "w": 2.0, "h": 2.0, "d": 2.0, "max_weight": 100.0 },
//!         "boxes": [ { "id": "A", "w": 1.0, "h": 1.0, "d": 1.0, "weight": 5.0 } ]
//!     }"#,
//! )
//! .unwrap();
//! assert!(response.contains("\"unplaced\":[]"));
//! ```

pub mod types;

pub use types::{
    BoxRequest, MetricsResponse, OptimizeRequest, OptimizeResponse, ParamsRequest,
    PlacedBoxResponse, TruckRequest,
};

use cargopack_core::{optimize_ga, CargoBox, Error, GaParams, Result, Truck};

/// Runs one optimization for a typed request.
pub fn optimize(request: OptimizeRequest) -> Result<OptimizeResponse> {
    let truck = Truck::new(request.truck.w, request.truck.h, request.truck.d)
        .with_max_weight(request.truck.max_weight);

    let boxes = request
        .boxes
        .iter()
        .map(convert_box)
        .collect::<Result<Vec<_>>>()?;

    let params = convert_params(request.params.unwrap_or_default())?;

    let result = optimize_ga(&truck, &boxes, &params)?;
    Ok(result.into())
}

/// Runs one optimization for a JSON request string and returns the response
/// as JSON.
pub fn optimize_json(request_json: &str) -> Result<String> {
    let request: OptimizeRequest =
        serde_json::from_str(request_json).map_err(|e| Error::Serialization(e.to_string()))?;

    let response = optimize(request)?;

    serde_json::to_string(&response).map_err(|e| Error::Serialization(e.to_string()))
}

fn convert_box(req: &BoxRequest) -> Result<CargoBox> {
    let id = req
        .id
        .clone()
        .or_else(|| req.sku.clone())
        .ok_or_else(|| Error::InvalidGeometry("box is missing an 'id' or 'sku' field".into()))?;

    Ok(CargoBox::new(id, req.w, req.h, req.d)
        .with_weight(req.weight)
        .with_priority(req.priority))
}

fn convert_params(req: ParamsRequest) -> Result<GaParams> {
    if req.population < 0 {
        return Err(Error::InvalidParams(format!(
            "population must be non-negative, got {}",
            req.population
        )));
    }
    if req.generations < 0 {
        return Err(Error::InvalidParams(format!(
            "generations must be non-negative, got {}",
            req.generations
        )));
    }

    Ok(GaParams::default()
        .with_population(req.population as usize)
        .with_generations(req.generations as usize)
        .with_mutation_rate(req.mutation_rate)
        .with_seed(req.seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimize_single_box() {
        let request = OptimizeRequest {
            truck: TruckRequest {
                w: 1.0,
                h: 1.0,
                d: 1.0,
                max_weight: 10.0,
            },
            boxes: vec![BoxRequest {
                id: Some("A".to_string()),
                sku: None,
                w: 1.0,
                h: 1.0,
                d: 1.0,
                weight: 5.0,
                priority: 1,
            }],
            params: Some(ParamsRequest {
                seed: 1,
                ..Default::default()
            }),
        };

        let response = optimize(request).unwrap();

        assert_eq!(response.placed.len(), 1);
        assert_eq!(response.placed[0].id, "A");
        assert_eq!(response.placed[0].x, 0.0);
        assert_eq!(response.placed[0].y, 0.0);
        assert_eq!(response.placed[0].z, 0.0);
        assert_eq!(response.metrics.utilization, 1.0);
        assert!(response.unplaced.is_empty());
    }

    #[test]
    fn test_json_round_trip_with_defaults() {
        // Neither params nor the optional box fields are present; the
        // documented defaults apply.
        let response_json = optimize_json(
            r#"{
                "truck": { "w": 2.0, "h": 2.0, "d": 2.0 },
                "boxes": [ { "id": "A", "w": 1.0, "h": 1.0, "d": 1.0 } ]
            }"#,
        )
        .unwrap();

        let response: OptimizeResponse = serde_json::from_str(&response_json).unwrap();
        assert_eq!(response.placed.len(), 1);
        assert_eq!(response.metrics.total_volume, 1.0);
        assert_eq!(response.metrics.total_weight, 1.0);
    }

    #[test]
    fn test_sku_is_accepted_as_identifier() {
        let response_json = optimize_json(
            r#"{
                "truck": { "w": 2.0, "h": 2.0, "d": 2.0 },
                "boxes": [ { "sku": "SKU-00042", "w": 1.0, "h": 1.0, "d": 1.0 } ]
            }"#,
        )
        .unwrap();

        let response: OptimizeResponse = serde_json::from_str(&response_json).unwrap();
        assert_eq!(response.placed[0].id, "SKU-00042");
    }

    #[test]
    fn test_id_preferred_over_sku() {
        let request: OptimizeRequest = serde_json::from_str(
            r#"{
                "truck": { "w": 2.0, "h": 2.0, "d": 2.0 },
                "boxes": [ { "id": "primary", "sku": "secondary", "w": 1.0, "h": 1.0, "d": 1.0 } ]
            }"#,
        )
        .unwrap();

        let response = optimize(request).unwrap();
        assert_eq!(response.placed[0].id, "primary");
    }

    #[test]
    fn test_missing_identifier_rejected() {
        let result = optimize_json(
            r#"{
                "truck": { "w": 2.0, "h": 2.0, "d": 2.0 },
                "boxes": [ { "w": 1.0, "h": 1.0, "d": 1.0 } ]
            }"#,
        );

        assert!(matches!(result, Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn test_negative_population_rejected() {
        let result = optimize_json(
            r#"{
                "truck": { "w": 2.0, "h": 2.0, "d": 2.0 },
                "boxes": [ { "id": "A", "w": 1.0, "h": 1.0, "d": 1.0 } ],
                "params": { "population": -3 }
            }"#,
        );

        assert!(matches!(result, Err(Error::InvalidParams(_))));
    }

    #[test]
    fn test_invalid_truck_rejected() {
        let result = optimize_json(
            r#"{
                "truck": { "w": 0.0, "h": 2.0, "d": 2.0 },
                "boxes": [ { "id": "A", "w": 1.0, "h": 1.0, "d": 1.0 } ]
            }"#,
        );

        assert!(matches!(result, Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = optimize_json("not valid json {{{");
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_empty_boxes_zeroed_metrics() {
        let response_json = optimize_json(
            r#"{ "truck": { "w": 2.0, "h": 2.0, "d": 2.0, "max_weight": 100.0 }, "boxes": [] }"#,
        )
        .unwrap();

        let response: OptimizeResponse = serde_json::from_str(&response_json).unwrap();
        assert!(response.placed.is_empty());
        assert!(response.unplaced.is_empty());
        assert_eq!(response.metrics.used_volume, 0.0);
        assert_eq!(response.metrics.total_volume, 0.0);
        assert_eq!(response.metrics.utilization, 0.0);
        assert_eq!(response.metrics.total_weight, 0.0);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = optimize_json(
            r#"{
                "truck": { "w": 2.0, "h": 2.0, "d": 2.0 },
                "boxes": [
                    { "id": "A", "w": 1.0, "h": 1.0, "d": 1.0 },
                    { "id": "A", "w": 0.5, "h": 0.5, "d": 0.5 }
                ]
            }"#,
        );

        assert!(matches!(result, Err(Error::DuplicateId(_))));
    }

    #[test]
    fn test_same_request_same_response_json() {
        let request = r#"{
            "truck": { "w": 3.0, "h": 2.0, "d": 4.0, "max_weight": 500.0 },
            "boxes": [
                { "id": "A", "w": 1.0, "h": 1.0, "d": 2.0, "weight": 30.0 },
                { "id": "B", "w": 1.5, "h": 0.5, "d": 1.0, "weight": 10.0 },
                { "id": "C", "w": 2.0, "h": 1.0, "d": 1.0, "weight": 60.0, "priority": 4 }
            ],
            "params": { "seed": 77 }
        }"#;

        assert_eq!(optimize_json(request).unwrap(), optimize_json(request).unwrap());
    }
}
