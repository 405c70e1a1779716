//! Error handling.
//!
//! A handler deep in some helper can bail out of the whole request by
//! returning an [`ApiError`] - execution stops there and the error renders
//! itself. The variations below: a plain 404, a 404 carrying an extra
//! response header, a domain-specific error translated into a bespoke
//! response shape, and the one case where the caller is told nothing:
//! server-side data that fails to take its response shape is logged and
//! answered with an opaque 500, because the broken internals are a bug, not
//! information the client should see.

use axum::http::HeaderName;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use thiserror::Error;

use tour_core::Item;

use crate::app::errors::ApiError;
use crate::extract::ValidPath;

pub fn router() -> Router {
    Router::new()
        .route("/items/:item_id", get(read_item))
        .route("/items-header/:item_id", get(read_item_header))
        .route("/unicorns/:name", get(read_unicorn))
        .route("/numbers/:value", get(read_number))
        .route("/broken", get(read_broken))
}

fn lookup(item_id: &str) -> Option<&'static str> {
    (item_id == "foo").then_some("The Foo Wrestlers")
}

/// GET /errors/items/:item_id - 404 when the id isn't known.
async fn read_item(ValidPath(item_id): ValidPath<String>) -> Result<Json<Value>, ApiError> {
    let item = lookup(&item_id).ok_or_else(|| ApiError::not_found("Item not found"))?;
    Ok(Json(json!({"item": item})))
}

/// GET /errors/items-header/:item_id - same 404, plus an `x-error` response
/// header for callers that key off headers rather than bodies.
async fn read_item_header(ValidPath(item_id): ValidPath<String>) -> Result<Json<Value>, ApiError> {
    let item = lookup(&item_id).ok_or_else(|| {
        ApiError::not_found("Item not found").with_header(
            HeaderName::from_static("x-error"),
            "There goes my error",
        )
    })?;
    Ok(Json(json!({"item": item})))
}

/// An error owned by this module, with its own response shape - the point is
/// that translation to HTTP lives on the type, not in every handler that can
/// produce it.
#[derive(Debug, Error)]
#[error("unicorn {name} misbehaved")]
struct UnicornError {
    name: String,
}

impl IntoResponse for UnicornError {
    fn into_response(self) -> Response {
        (
            axum::http::StatusCode::IM_A_TEAPOT,
            Json(json!({
                "message": format!("Oops! {} did something. There goes a rainbow...", self.name),
            })),
        )
            .into_response()
    }
}

/// GET /errors/unicorns/:name - `yolo` trips the custom error; everyone else
/// is fine.
async fn read_unicorn(ValidPath(name): ValidPath<String>) -> Result<Json<Value>, UnicornError> {
    if name == "yolo" {
        return Err(UnicornError { name });
    }
    Ok(Json(json!({"unicorn_name": name})))
}

/// GET /errors/numbers/:value - an opinionated 418 for one particular input.
async fn read_number(ValidPath(value): ValidPath<i64>) -> Result<Json<Value>, ApiError> {
    if value == 3 {
        return Err(ApiError::teapot("Nope! I don't like 3."));
    }
    Ok(Json(json!({"value": value})))
}

// A fixture whose price is the wrong type. Standing in for any stored data
// that no longer matches the shape the code expects.
fn corrupt_fixture() -> Value {
    json!({"name": "Foo", "price": "not-a-number"})
}

/// GET /errors/broken - the response model cannot be built from the stored
/// data. The cause goes to the log; the caller gets a generic 500.
async fn read_broken() -> Result<Json<Item>, ApiError> {
    let item: Item = serde_json::from_value(corrupt_fixture()).map_err(|e| {
        tracing::error!(error = %e, "stored item does not match response shape");
        ApiError::internal()
    })?;
    Ok(Json(item))
}
