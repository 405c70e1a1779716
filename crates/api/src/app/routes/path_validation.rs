//! Numeric validation on path and query parameters.
//!
//! Type conversion gets a value of the right kind; range checks bound it.
//! Integer bounds are inclusive (`1 <= item_id <= 1000`), the float bounds
//! here are strict on both sides - `size` must be greater than 0 even though
//! it may be well below 1.

use axum::{Json, Router, routing::get};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::app::errors::ApiError;
use crate::extract::{ValidPath, ValidQuery};

const ITEM_ID_MIN: u64 = 1;
const ITEM_ID_MAX: u64 = 1000;
const SIZE_MAX: f64 = 10.5;

pub fn router() -> Router {
    Router::new().route("/items/:item_id", get(read_item))
}

#[derive(Debug, Deserialize)]
struct SizeQuery {
    q: String,
    size: f64,
}

/// GET /path-validation/items/:item_id?q=...&size=... - the id must lie in
/// `1..=1000`, `q` is required, `size` must satisfy `0 < size < 10.5`.
async fn read_item(
    ValidPath(item_id): ValidPath<u64>,
    ValidQuery(query): ValidQuery<SizeQuery>,
) -> Result<Json<Value>, ApiError> {
    if !(ITEM_ID_MIN..=ITEM_ID_MAX).contains(&item_id) {
        return Err(ApiError::validation(
            ["path", "item_id"],
            format!("ensure this value is between {ITEM_ID_MIN} and {ITEM_ID_MAX}"),
            "range",
        ));
    }
    if query.size <= 0.0 {
        return Err(ApiError::validation(
            ["query", "size"],
            "ensure this value is greater than 0",
            "range",
        ));
    }
    if query.size >= SIZE_MAX {
        return Err(ApiError::validation(
            ["query", "size"],
            format!("ensure this value is less than {SIZE_MAX}"),
            "range",
        ));
    }

    Ok(Json(json!({
        "item_id": item_id,
        "q": query.q,
        "size": query.size,
    })))
}
