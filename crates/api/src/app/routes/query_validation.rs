//! Query parameter string validation.
//!
//! Beyond type conversion, a query value can carry rules of its own: length
//! bounds, a pattern, an alias under which clients send it. The checks run in
//! the handler against a shared helper so every violation produces the same
//! 422 shape pointing at `["query", "q"]`.

use std::sync::LazyLock;

use axum::extract::RawQuery;
use axum::{Json, Router, routing::get};
use regex::Regex;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::app::errors::ApiError;
use crate::extract::ValidQuery;

const Q_MIN_LEN: usize = 3;
const Q_MAX_LEN: usize = 50;

static Q_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^fixedquery$").expect("q pattern is valid"));

pub fn router() -> Router {
    Router::new()
        .route("/items", get(read_items))
        .route("/items/batch", get(read_items_batch))
        .route("/items/legacy", get(read_items_legacy))
}

fn sample_items() -> Value {
    json!([{"item_id": "Foo"}, {"item_id": "Bar"}])
}

fn validate_q(q: &str) -> Result<(), ApiError> {
    let len = q.chars().count();
    if len < Q_MIN_LEN {
        return Err(ApiError::validation(
            ["query", "q"],
            format!("ensure this value has at least {Q_MIN_LEN} characters"),
            "min_length",
        ));
    }
    if len > Q_MAX_LEN {
        return Err(ApiError::validation(
            ["query", "q"],
            format!("ensure this value has at most {Q_MAX_LEN} characters"),
            "max_length",
        ));
    }
    if !Q_PATTERN.is_match(q) {
        return Err(ApiError::validation(
            ["query", "q"],
            format!("string does not match pattern {:?}", Q_PATTERN.as_str()),
            "pattern",
        ));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: Option<String>,
}

/// GET /query-validation/items?q=... - `q` stays optional, but when present
/// it must be 3..=50 chars and match the pattern.
async fn read_items(ValidQuery(query): ValidQuery<SearchQuery>) -> Result<Json<Value>, ApiError> {
    let mut results = json!({"items": sample_items()});
    if let Some(q) = query.q {
        validate_q(&q)?;
        results["q"] = json!(q);
    }
    Ok(Json(results))
}

/// GET /query-validation/items/batch?q=foo&q=bar - a repeated parameter
/// collected into a list. The raw query string is walked pair by pair; a
/// struct field can only hold one value.
async fn read_items_batch(RawQuery(raw): RawQuery) -> Json<Value> {
    let values: Vec<String> = raw
        .as_deref()
        .map(|raw| {
            url::form_urlencoded::parse(raw.as_bytes())
                .filter(|(key, _)| *key == "q")
                .map(|(_, value)| value.into_owned())
                .collect()
        })
        .unwrap_or_default();
    Json(json!({"q": values}))
}

#[derive(Debug, Deserialize)]
struct LegacySearchQuery {
    /// Clients send `item-query`; the handler sees it under a usable name.
    #[serde(default, rename = "item-query")]
    item_query: Option<String>,
}

/// GET /query-validation/items/legacy?item-query=... - an aliased parameter
/// kept for old clients. Uses are logged so the alias can one day be retired.
async fn read_items_legacy(
    ValidQuery(query): ValidQuery<LegacySearchQuery>,
) -> Result<Json<Value>, ApiError> {
    let mut results = json!({"items": sample_items()});
    if let Some(q) = query.item_query {
        tracing::warn!("deprecated parameter item-query used");
        validate_q(&q)?;
        results["q"] = json!(q);
    }
    Ok(Json(results))
}
