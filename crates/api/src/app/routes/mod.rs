use axum::Router;

pub mod body;
pub mod body_fields;
pub mod body_multiple;
pub mod cookies;
pub mod dependencies;
pub mod extra_models;
pub mod extra_types;
pub mod files;
pub mod forms;
pub mod handling_errors;
pub mod headers;
pub mod hello;
pub mod nested_models;
pub mod path_params;
pub mod path_validation;
pub mod query_params;
pub mod query_validation;
pub mod response_model;
pub mod status_codes;
pub mod updates;

/// Router for all chapters, one prefix each.
pub fn router() -> Router {
    Router::new()
        .nest("/path-params", path_params::router())
        .nest("/query-params", query_params::router())
        .nest("/body", body::router())
        .nest("/query-validation", query_validation::router())
        .nest("/path-validation", path_validation::router())
        .nest("/body-multiple", body_multiple::router())
        .nest("/body-fields", body_fields::router())
        .nest("/nested-models", nested_models::router())
        .nest("/extra-types", extra_types::router())
        .nest("/cookies", cookies::router())
        .nest("/headers", headers::router())
        .nest("/response-model", response_model::router())
        .nest("/extra-models", extra_models::router())
        .nest("/status-codes", status_codes::router())
        .nest("/forms", forms::router())
        .nest("/files", files::router())
        .nest("/errors", handling_errors::router())
        .nest("/updates", updates::router())
        .nest("/dependencies", dependencies::router())
}
