//! Nested body models.
//!
//! Models compose: an item holds a set of tags and a list of images, an offer
//! holds a list of items. Bodies don't have to be objects either - a
//! top-level list works, and so does a map, including one whose keys are
//! numbers encoded as JSON strings.

use std::collections::{BTreeMap, HashMap};

use axum::{Json, Router, routing::post, routing::put};
use serde_json::{Value, json};

use tour_core::{Image, Item, Offer};

use crate::app::errors::ApiError;
use crate::extract::{ValidJson, ValidPath};

pub fn router() -> Router {
    Router::new()
        .route("/items/:item_id", put(update_item))
        .route("/offers", post(create_offer))
        .route("/images/batch", post(create_images))
        .route("/index-weights", post(create_index_weights))
}

/// PUT /nested-models/items/:item_id - tags deduplicate (they're a set) and
/// each image validates its URL.
async fn update_item(
    ValidPath(item_id): ValidPath<u32>,
    ValidJson(item): ValidJson<Item>,
) -> Result<Json<Value>, ApiError> {
    item.validate()?;
    Ok(Json(json!({"item_id": item_id, "item": item})))
}

/// POST /nested-models/offers - an offer holds items, which hold images:
/// three levels of nesting validated in one pass.
async fn create_offer(ValidJson(offer): ValidJson<Offer>) -> Result<Json<Offer>, ApiError> {
    offer.validate()?;
    Ok(Json(offer))
}

/// POST /nested-models/images/batch - the body is a bare JSON list.
async fn create_images(
    ValidJson(images): ValidJson<Vec<Image>>,
) -> Result<Json<Vec<Image>>, ApiError> {
    for image in &images {
        image.validate()?;
    }
    Ok(Json(images))
}

/// POST /nested-models/index-weights - a map body with integer keys. JSON
/// keys are always strings on the wire, so `"3"` is accepted and coerced;
/// `"three"` is a 422 naming the offending key.
async fn create_index_weights(
    ValidJson(weights): ValidJson<HashMap<String, f64>>,
) -> Result<Json<BTreeMap<u32, f64>>, ApiError> {
    let mut converted = BTreeMap::new();
    for (key, weight) in weights {
        let index: u32 = key.parse().map_err(|_| {
            ApiError::validation(
                ["body", key.as_str()],
                "key is not a valid integer",
                "type_error.integer",
            )
        })?;
        converted.insert(index, weight);
    }
    Ok(Json(converted))
}
