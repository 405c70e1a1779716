//! Request bodies.
//!
//! A JSON body deserializes into a model; the model's own field rules run
//! before the handler does anything with it. Path, query, and body can all be
//! declared by one handler - each value is pulled from its own source.

use axum::{Json, Router, routing::post, routing::put};
use serde::Deserialize;
use serde_json::{Value, json};

use tour_core::Item;

use crate::app::errors::ApiError;
use crate::extract::{ValidJson, ValidPath, ValidQuery};

pub fn router() -> Router {
    Router::new()
        .route("/items", post(create_item))
        .route("/items/:item_id", put(update_item))
}

/// POST /body/items - accept an item, echo it back with the computed total
/// when a tax amount was supplied.
async fn create_item(ValidJson(item): ValidJson<Item>) -> Result<Json<Value>, ApiError> {
    item.validate()?;

    let mut body = serde_json::to_value(&item).map_err(|e| {
        tracing::error!(error = %e, "failed to re-encode item");
        ApiError::internal()
    })?;
    if let Some(total) = item.price_with_tax() {
        body["price_with_tax"] = json!(total);
    }
    Ok(Json(body))
}

#[derive(Debug, Deserialize)]
struct UpdateQuery {
    #[serde(default)]
    q: Option<String>,
}

/// PUT /body/items/:item_id?q=... - body, path, and query in one handler.
async fn update_item(
    ValidPath(item_id): ValidPath<u32>,
    ValidQuery(query): ValidQuery<UpdateQuery>,
    ValidJson(item): ValidJson<Item>,
) -> Result<Json<Value>, ApiError> {
    item.validate()?;

    let mut result = serde_json::to_value(&item).map_err(|e| {
        tracing::error!(error = %e, "failed to re-encode item");
        ApiError::internal()
    })?;
    result["item_id"] = json!(item_id);
    if let Some(q) = query.q {
        result["q"] = json!(q);
    }
    Ok(Json(result))
}
