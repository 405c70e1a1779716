//! Query parameters.
//!
//! Anything after `?` is parsed into a plain struct: fields with a default
//! are optional, `Option` fields may be absent entirely, and a field with
//! neither is required - leaving it off fails the request with a 422 before
//! the handler runs.
//!
//! Query values arrive as strings; the struct's types drive the conversion.
//! Booleans are deliberately loose here (`1`, `true`, `on`, `yes` all count)
//! since that's what arrives from checkboxes and hand-typed URLs.

use axum::{Json, Router, routing::get};
use serde::{Deserialize, Deserializer};
use serde_json::{Value, json};

use crate::extract::{ValidPath, ValidQuery};

const FAKE_ITEMS_DB: [&str; 3] = ["Foo", "Bar", "Baz"];

const LONG_DESCRIPTION: &str = "This is an amazing item that has a long description";

pub fn router() -> Router {
    Router::new()
        .route("/items", get(list_items))
        .route("/items/:item_id", get(read_item))
        .route("/users/:user_id/items/:item_id", get(read_user_item))
        .route("/needy/:item_id", get(read_needy_item))
}

fn default_page_limit() -> usize {
    10
}

#[derive(Debug, Deserialize)]
struct Paging {
    #[serde(default)]
    skip: usize,
    #[serde(default = "default_page_limit")]
    limit: usize,
}

/// GET /items?skip=0&limit=10 - both optional, both defaulted.
async fn list_items(ValidQuery(page): ValidQuery<Paging>) -> Json<Value> {
    let items: Vec<Value> = FAKE_ITEMS_DB
        .iter()
        .skip(page.skip)
        .take(page.limit)
        .map(|name| json!({"item_name": name}))
        .collect();
    Json(Value::Array(items))
}

#[derive(Debug, Deserialize)]
struct DetailQuery {
    #[serde(default)]
    q: Option<String>,
    #[serde(default, deserialize_with = "loose_bool")]
    short: bool,
}

/// GET /items/:item_id?q=...&short=true - an optional free-text `q` and a
/// coerced boolean.
async fn read_item(
    ValidPath(item_id): ValidPath<String>,
    ValidQuery(query): ValidQuery<DetailQuery>,
) -> Json<Value> {
    let mut item = json!({"item_id": item_id});
    if let Some(q) = query.q {
        item["q"] = json!(q);
    }
    if !query.short {
        item["description"] = json!(LONG_DESCRIPTION);
    }
    Json(item)
}

/// GET /users/:user_id/items/:item_id - several path parameters and several
/// query parameters at once; each is matched by name.
async fn read_user_item(
    ValidPath((user_id, item_id)): ValidPath<(u64, String)>,
    ValidQuery(query): ValidQuery<DetailQuery>,
) -> Json<Value> {
    let mut item = json!({"item_id": item_id, "owner_id": user_id});
    if let Some(q) = query.q {
        item["q"] = json!(q);
    }
    if !query.short {
        item["description"] = json!(LONG_DESCRIPTION);
    }
    Json(item)
}

#[derive(Debug, Deserialize)]
struct NeedyQuery {
    /// No default, no Option: required.
    needy: String,
    #[serde(default)]
    skip: usize,
    #[serde(default)]
    limit: Option<usize>,
}

/// GET /needy/:item_id?needy=... - `needy` is required, `skip` defaults,
/// `limit` is entirely optional.
async fn read_needy_item(
    ValidPath(item_id): ValidPath<String>,
    ValidQuery(query): ValidQuery<NeedyQuery>,
) -> Json<Value> {
    Json(json!({
        "item_id": item_id,
        "needy": query.needy,
        "skip": query.skip,
        "limit": query.limit,
    }))
}

/// Accept the spellings that actually show up in URLs.
fn loose_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid boolean: {other:?}"
        ))),
    }
}
