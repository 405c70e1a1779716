//! More than one response shape.
//!
//! A response doesn't have to be a single struct: it can be one of several
//! tagged variants, a list of models, or a bare map. The vehicle endpoint
//! answers with either a car or a plane shape depending on what the id names.

use axum::{Json, Router, routing::get};
use serde::Serialize;
use serde_json::{Value, json};

use crate::app::errors::ApiError;
use crate::extract::ValidPath;

pub fn router() -> Router {
    Router::new()
        .route("/vehicles/:vehicle_id", get(read_vehicle))
        .route("/items", get(list_items))
        .route("/keyword-weights", get(read_keyword_weights))
}

/// One of two shapes, discriminated by a `type` field in the JSON.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Vehicle {
    Car { description: String },
    Plane { description: String, size: u32 },
}

/// GET /extra-models/vehicles/:vehicle_id - `item1` is a car, `item2` a
/// plane; anything else is a 404.
async fn read_vehicle(ValidPath(vehicle_id): ValidPath<String>) -> Result<Json<Vehicle>, ApiError> {
    let vehicle = match vehicle_id.as_str() {
        "item1" => Vehicle::Car {
            description: "All my friends drive a low rider".to_string(),
        },
        "item2" => Vehicle::Plane {
            description: "Music is my aeroplane, it's my aeroplane".to_string(),
            size: 5,
        },
        _ => return Err(ApiError::not_found("Vehicle not found")),
    };
    Ok(Json(vehicle))
}

#[derive(Debug, Serialize)]
struct Listing {
    name: String,
    description: String,
}

/// GET /extra-models/items - a list of models.
async fn list_items() -> Json<Vec<Listing>> {
    Json(vec![
        Listing {
            name: "Foo".to_string(),
            description: "There comes my hero".to_string(),
        },
        Listing {
            name: "Red".to_string(),
            description: "It's my aeroplane".to_string(),
        },
    ])
}

/// GET /extra-models/keyword-weights - a bare map response.
async fn read_keyword_weights() -> Json<Value> {
    Json(json!({"foo": 2.3, "bar": 3.4}))
}
