//! Path parameters.
//!
//! A `:name` segment in the route template is captured and parsed into
//! whatever type the handler declares. Parsing is validation: `/items/abc`
//! against a `u32` parameter never reaches the handler, it fails upstream
//! with a 422 naming the path as the source.
//!
//! Routing is by specificity, not registration order: `/users/me` wins over
//! `/users/:user_id` for a request to `/users/me` no matter which line comes
//! first below.

use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::extract::ValidPath;

pub fn router() -> Router {
    Router::new()
        .route("/items/:item_id", get(read_item))
        .route("/users/me", get(read_current_user))
        .route("/users/:user_id", get(read_user))
        .route("/models/:model_name", get(read_model))
        .route("/files/*file_path", get(read_file_path))
}

/// GET /items/:item_id - the segment must parse as an integer.
async fn read_item(ValidPath(item_id): ValidPath<u32>) -> Json<Value> {
    Json(json!({"item_id": item_id}))
}

/// GET /users/me - fixed path, shadowing the capture below.
async fn read_current_user() -> Json<Value> {
    Json(json!({"user_id": "the current user"}))
}

/// GET /users/:user_id
async fn read_user(ValidPath(user_id): ValidPath<String>) -> Json<Value> {
    Json(json!({"user_id": user_id}))
}

/// The set of values the `:model_name` segment accepts. Anything else is a
/// 422 before the handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ModelName {
    Alexnet,
    Resnet,
    Lenet,
}

/// GET /models/:model_name - predefined values via an enum segment.
async fn read_model(ValidPath(model_name): ValidPath<ModelName>) -> Json<Value> {
    let message = match model_name {
        ModelName::Alexnet => "Deep Learning FTW!",
        ModelName::Lenet => "LeCNN all the images",
        ModelName::Resnet => "Have some residuals",
    };
    Json(json!({"model_name": model_name, "message": message}))
}

/// GET /files/*file_path - a wildcard segment that may itself contain
/// slashes, e.g. `/files/home/johndoe/myfile.txt`.
async fn read_file_path(ValidPath(file_path): ValidPath<String>) -> Json<Value> {
    Json(json!({"file_path": file_path}))
}
