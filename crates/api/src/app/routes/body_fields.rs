//! Field-level rules inside a body model.
//!
//! The previous chapters validated whole parameters; here the rules live on
//! the model's individual fields (description bounded at 300 chars, price
//! strictly positive - see `tour_core::item`). The handler only forwards to
//! `Item::validate`; the rules travel with the model to every chapter that
//! accepts one.

use axum::{Json, Router, routing::put};
use serde::Deserialize;
use serde_json::{Value, json};

use tour_core::Item;

use crate::app::errors::ApiError;
use crate::extract::{ValidJson, ValidPath};

pub fn router() -> Router {
    Router::new().route("/items/:item_id", put(update_item))
}

#[derive(Debug, Deserialize)]
struct EmbeddedItem {
    item: Item,
}

/// PUT /body-fields/items/:item_id - an embedded item whose fields carry
/// their own constraints.
async fn update_item(
    ValidPath(item_id): ValidPath<u32>,
    ValidJson(payload): ValidJson<EmbeddedItem>,
) -> Result<Json<Value>, ApiError> {
    payload.item.validate()?;
    Ok(Json(json!({"item_id": item_id, "item": payload.item})))
}
