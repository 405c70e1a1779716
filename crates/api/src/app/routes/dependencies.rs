//! Precomputed handler inputs.
//!
//! Several handlers need the same derived values; instead of re-deriving them
//! inline, each value is a type that knows how to resolve itself from the
//! request (see `crate::extract`). A handler that names the type in its
//! signature gets the resolved value; handlers that share the type share the
//! resolution logic. Resolution nests - [`QueryOrCookie`] reads the query
//! string and falls back to a cookie - and a guard can run for a route
//! without the handler receiving anything at all (`require_tokens` below).

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::extract::{CommonParams, QueryOrCookie};
use crate::middleware;

pub fn router() -> Router {
    Router::new()
        .route("/items", get(read_items))
        .route("/users", get(read_users))
        .route("/query-or-cookie", get(read_query_or_cookie))
        .route(
            "/protected",
            get(read_protected).route_layer(axum::middleware::from_fn(middleware::require_tokens)),
        )
}

const FAKE_ITEMS_DB: [&str; 3] = ["Foo", "Bar", "Baz"];

/// GET /dependencies/items - consumes the shared `CommonParams` value.
async fn read_items(commons: CommonParams) -> Json<Value> {
    let items: Vec<Value> = FAKE_ITEMS_DB
        .iter()
        .skip(commons.skip)
        .take(commons.limit)
        .map(|name| json!({"item_name": name}))
        .collect();

    let mut response = json!({"skip": commons.skip, "limit": commons.limit, "items": items});
    if let Some(q) = commons.q {
        response["q"] = json!(q);
    }
    Json(response)
}

/// GET /dependencies/users - the same shared value, resolved the same way.
async fn read_users(commons: CommonParams) -> Json<Value> {
    Json(json!({
        "q": commons.q,
        "skip": commons.skip,
        "limit": commons.limit,
    }))
}

/// GET /dependencies/query-or-cookie - nested resolution: `?q=` wins,
/// otherwise the `last-query` cookie.
async fn read_query_or_cookie(QueryOrCookie(value): QueryOrCookie) -> Json<Value> {
    Json(json!({"q_or_cookie": value}))
}

/// GET /dependencies/protected - the guard runs first and alone; this
/// handler never sees the token headers.
async fn read_protected() -> Json<Value> {
    Json(json!([{"item": "Foo"}, {"item": "Bar"}]))
}
