//! Multiple body parameters.
//!
//! When one request carries several top-level values, the body becomes an
//! object with one key per value: the item model, a user reference, and a
//! bare integer all travel in the same JSON document. The single-model case
//! can opt into the same envelope shape (an `{"item": ...}` wrapper).

use axum::{Json, Router, routing::put};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use tour_core::Item;

use crate::app::errors::ApiError;
use crate::extract::{ValidJson, ValidPath, ValidQuery};

pub fn router() -> Router {
    Router::new()
        .route("/items/:item_id", put(update_item))
        .route("/items/:item_id/embedded", put(update_item_embedded))
}

#[derive(Debug, Serialize, Deserialize)]
struct UserRef {
    username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    full_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdatePayload {
    item: Item,
    user: UserRef,
    /// A singular value rides along in the body next to the two models.
    importance: i64,
}

#[derive(Debug, Deserialize)]
struct UpdateQuery {
    #[serde(default)]
    q: Option<String>,
}

/// PUT /body-multiple/items/:item_id - body keys `item`, `user`, and
/// `importance`, plus an optional query parameter on the side.
async fn update_item(
    ValidPath(item_id): ValidPath<u32>,
    ValidQuery(query): ValidQuery<UpdateQuery>,
    ValidJson(payload): ValidJson<UpdatePayload>,
) -> Result<Json<Value>, ApiError> {
    payload.item.validate()?;
    if payload.importance <= 0 {
        return Err(ApiError::validation(
            ["body", "importance"],
            "ensure this value is greater than 0",
            "range",
        ));
    }

    let mut results = json!({
        "item_id": item_id,
        "item": payload.item,
        "user": payload.user,
        "importance": payload.importance,
    });
    if let Some(q) = query.q {
        results["q"] = json!(q);
    }
    Ok(Json(results))
}

#[derive(Debug, Deserialize)]
struct EmbeddedItem {
    item: Item,
}

/// PUT /body-multiple/items/:item_id/embedded - a single model, but expected
/// under an `item` key instead of directly at the top level.
async fn update_item_embedded(
    ValidPath(item_id): ValidPath<u32>,
    ValidJson(payload): ValidJson<EmbeddedItem>,
) -> Result<Json<Value>, ApiError> {
    payload.item.validate()?;
    Ok(Json(json!({"item_id": item_id, "item": payload.item})))
}
