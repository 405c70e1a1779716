//! Replacing vs. merging stored data.
//!
//! PUT takes a complete document: whatever the client leaves out falls back
//! to the model's defaults and is stored that way - replacing `bar` without
//! its `tax` really does reset the tax. PATCH takes only the fields to
//! change and merges them over what's stored; everything unmentioned
//! survives. The read endpoint returns the full shape with defaults filled,
//! which is what both write paths operate on.

use std::sync::Arc;

use axum::extract::Extension;
use axum::{Json, Router, routing::get};
use serde_json::Value;

use tour_core::{Catalog, CatalogItem, DomainError, ItemPatch};

use crate::app::errors::ApiError;
use crate::extract::{ValidJson, ValidPath};

pub fn router() -> Router {
    Router::new().route(
        "/items/:item_id",
        get(read_item).put(replace_item).patch(patch_item),
    )
}

fn map_lookup_error(err: DomainError) -> ApiError {
    match err {
        DomainError::NotFound => ApiError::not_found("Item not found"),
        other => ApiError::from(other),
    }
}

/// GET /updates/items/:item_id - the stored item in its full shape, defaults
/// filled in for keys that were never written.
async fn read_item(
    Extension(catalog): Extension<Arc<Catalog>>,
    ValidPath(item_id): ValidPath<String>,
) -> Result<Json<CatalogItem>, ApiError> {
    let item = catalog.get_parsed(&item_id).map_err(map_lookup_error)?;
    Ok(Json(item))
}

/// PUT /updates/items/:item_id - wholesale replacement. Absent fields take
/// their defaults and are persisted that way.
async fn replace_item(
    Extension(catalog): Extension<Arc<Catalog>>,
    ValidPath(item_id): ValidPath<String>,
    ValidJson(item): ValidJson<CatalogItem>,
) -> Result<Json<Value>, ApiError> {
    let stored = catalog.replace(&item_id, &item)?;
    Ok(Json(stored))
}

/// PATCH /updates/items/:item_id - partial update. Only the fields present
/// in the body change; the stored values win everywhere else.
async fn patch_item(
    Extension(catalog): Extension<Arc<Catalog>>,
    ValidPath(item_id): ValidPath<String>,
    ValidJson(patch): ValidJson<ItemPatch>,
) -> Result<Json<CatalogItem>, ApiError> {
    let updated = catalog
        .merge_patch(&item_id, &patch)
        .map_err(map_lookup_error)?;
    Ok(Json(updated))
}
