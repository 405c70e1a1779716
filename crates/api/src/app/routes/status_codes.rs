//! Response status codes.
//!
//! Success isn't always 200: creation answers 201, deletion answers 204 with
//! a deliberately empty body. Returning a `(StatusCode, body)` pair (or a
//! bare `StatusCode` for the body-less codes) sets both at once.

use axum::http::StatusCode;
use axum::{Json, Router, routing::delete, routing::post};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::extract::{ValidPath, ValidQuery};

pub fn router() -> Router {
    Router::new()
        .route("/items", post(create_item))
        .route("/items/:item_id", delete(delete_item))
}

#[derive(Debug, Deserialize)]
struct CreateQuery {
    name: String,
}

/// POST /status-codes/items?name=... - 201 Created.
async fn create_item(ValidQuery(query): ValidQuery<CreateQuery>) -> (StatusCode, Json<Value>) {
    (StatusCode::CREATED, Json(json!({"name": query.name})))
}

/// DELETE /status-codes/items/:item_id - 204 No Content, empty body.
async fn delete_item(ValidPath(_item_id): ValidPath<String>) -> StatusCode {
    StatusCode::NO_CONTENT
}
