//! First steps: the smallest possible handlers.
//!
//! A handler is an async function bound to one path + method pair. Whatever it
//! returns is converted into a response: `Json` serializes, a bare
//! `StatusCode` produces an empty body.

use axum::Json;
use axum::http::StatusCode;
use serde_json::{Value, json};

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({"message": "Hello World"}))
}

/// GET /health
pub async fn health() -> StatusCode {
    StatusCode::OK
}
