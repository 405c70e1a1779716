//! Cookie parameters.
//!
//! Cookies arrive folded into a single `Cookie` request header
//! (`name=value; other=value`); `extract::cookie_value` pulls one out by
//! name. Going the other way, a `Set-Cookie` response header asks the client
//! to remember a value for next time.

use axum::http::{HeaderMap, header};
use axum::response::IntoResponse;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::extract::cookie_value;

pub fn router() -> Router {
    Router::new()
        .route("/items", get(read_items))
        .route("/visits", get(count_visits))
}

/// GET /cookies/items - an optional `ads_id` cookie, echoed back (or null).
async fn read_items(headers: HeaderMap) -> Json<Value> {
    let ads_id = cookie_value(&headers, "ads_id");
    Json(json!({"ads_id": ads_id}))
}

/// GET /cookies/visits - a counter kept entirely on the client: read the
/// `visits` cookie, bump it, send it back via `Set-Cookie`.
async fn count_visits(headers: HeaderMap) -> impl IntoResponse {
    let visits: u64 = cookie_value(&headers, "visits")
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0);
    let visits = visits + 1;

    (
        [(header::SET_COOKIE, format!("visits={visits}; Path=/"))],
        Json(json!({"visits": visits})),
    )
}
