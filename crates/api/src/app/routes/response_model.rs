//! Response shaping.
//!
//! What a handler computes and what it sends are different shapes. The user
//! endpoint accepts a payload containing a password and answers with a type
//! that cannot carry one - the filtering is done by the type system, not by
//! remembering to delete a key. The item endpoints shape output the other
//! way: the stored document is returned with only the keys that were actually
//! written, or projected down to an explicit subset.

use std::sync::Arc;

use axum::extract::Extension;
use axum::{Json, Router, routing::get, routing::post};
use serde_json::{Map, Value, json};

use tour_core::{Catalog, UserCreate, UserDirectory, UserPublic};

use crate::app::errors::ApiError;
use crate::extract::{ValidJson, ValidPath};

pub fn router() -> Router {
    Router::new()
        .route("/user", post(create_user))
        .route("/items/:item_id", get(read_item))
        .route("/items/:item_id/name", get(read_item_name))
        .route("/items/:item_id/public", get(read_item_public))
}

/// POST /response-model/user - in: username/password/email, out: a shape
/// with no password material. The stored record (with its hash) never leaves
/// the process either.
async fn create_user(
    Extension(users): Extension<Arc<UserDirectory>>,
    ValidJson(payload): ValidJson<UserCreate>,
) -> Result<Json<UserPublic>, ApiError> {
    let record = users.save(&payload)?;
    Ok(Json(UserPublic::from(&record)))
}

/// GET /response-model/items/:item_id - the stored document verbatim: keys
/// that were never written are absent, keys written as null stay null.
async fn read_item(
    Extension(catalog): Extension<Arc<Catalog>>,
    ValidPath(item_id): ValidPath<String>,
) -> Result<Json<Value>, ApiError> {
    let doc = catalog.get(&item_id).map_err(|e| match e {
        tour_core::DomainError::NotFound => ApiError::not_found("Item not found"),
        other => ApiError::from(other),
    })?;
    Ok(Json(doc))
}

/// GET /response-model/items/:item_id/name - only `name` and `description`.
async fn read_item_name(
    Extension(catalog): Extension<Arc<Catalog>>,
    ValidPath(item_id): ValidPath<String>,
) -> Result<Json<Value>, ApiError> {
    let doc = catalog.get(&item_id)?;
    Ok(Json(project_include(&doc, &["name", "description"])))
}

/// GET /response-model/items/:item_id/public - everything except `tax`.
async fn read_item_public(
    Extension(catalog): Extension<Arc<Catalog>>,
    ValidPath(item_id): ValidPath<String>,
) -> Result<Json<Value>, ApiError> {
    let doc = catalog.get(&item_id)?;
    Ok(Json(project_exclude(&doc, &["tax"])))
}

fn project_include(doc: &Value, keys: &[&str]) -> Value {
    let mut out = Map::new();
    if let Some(object) = doc.as_object() {
        for key in keys {
            if let Some(value) = object.get(*key) {
                out.insert((*key).to_string(), value.clone());
            }
        }
    }
    Value::Object(out)
}

fn project_exclude(doc: &Value, keys: &[&str]) -> Value {
    match doc.as_object() {
        Some(object) => {
            let out: Map<String, Value> = object
                .iter()
                .filter(|(key, _)| !keys.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            Value::Object(out)
        }
        None => json!({}),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn include_keeps_only_named_keys() {
        let doc = json!({"name": "Foo", "price": 50.2, "tax": 10.5});
        let projected = project_include(&doc, &["name", "description"]);
        assert_eq!(projected, json!({"name": "Foo"}));
    }

    #[test]
    fn exclude_drops_named_keys() {
        let doc = json!({"name": "Foo", "price": 50.2, "tax": 10.5});
        let projected = project_exclude(&doc, &["tax"]);
        assert_eq!(projected, json!({"name": "Foo", "price": 50.2}));
    }
}
