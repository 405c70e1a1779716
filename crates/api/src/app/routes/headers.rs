//! Header parameters.
//!
//! Header names are case-insensitive and hyphenated on the wire
//! (`User-Agent`); handlers read them from the header map by their canonical
//! lowercase names. A header may legally appear more than once - `get_all`
//! yields every value in order.

use axum::http::{HeaderMap, header};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

pub fn router() -> Router {
    Router::new()
        .route("/items", get(read_items))
        .route("/tokens", get(read_tokens))
}

/// GET /headers/items - echo the optional `user-agent` header.
async fn read_items(headers: HeaderMap) -> Json<Value> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok());
    Json(json!({"user_agent": user_agent}))
}

/// GET /headers/tokens - collect every `x-token` value; duplicates are kept,
/// absence yields an empty list.
async fn read_tokens(headers: HeaderMap) -> Json<Value> {
    let tokens: Vec<&str> = headers
        .get_all("x-token")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();
    Json(json!({"x_token_values": tokens}))
}
