//! Consistent error responses.
//!
//! [`ApiError`] is how handlers short-circuit a request: build one, return it,
//! done. It converts to a JSON response of the form
//! `{"error": <code>, "message": <text>}`, optionally carrying a `detail`
//! array with one entry per failed field and extra response headers.
//!
//! Two classes of failure get different treatment on purpose:
//! - client-input failures (validation, bad ids, missing records) are spelled
//!   out in the response body so the caller can fix the request;
//! - server-side data-shape failures are logged and surfaced as an opaque 500.
//!   Whatever went wrong internally is not the caller's business.

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;

use tour_core::DomainError;

/// One field-level failure inside a validation error.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    /// Where the value came from, outermost first: `["query", "size"]`,
    /// `["body", "importance"]`, `["path", "item_id"]`.
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(
        loc: impl IntoIterator<Item = impl Into<String>>,
        msg: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            loc: loc.into_iter().map(Into::into).collect(),
            msg: msg.into(),
            kind: kind.into(),
        }
    }
}

/// A request-terminating error with an HTTP mapping.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
    detail: Vec<FieldError>,
    headers: Vec<(HeaderName, String)>,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            detail: Vec::new(),
            headers: Vec::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "not_found", message)
    }

    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn teapot(message: impl Into<String>) -> Self {
        Self::new(StatusCode::IM_A_TEAPOT, "teapot", message)
    }

    /// Opaque 500. Pair with a `tracing::error!` at the failure site.
    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            "internal server error",
        )
    }

    /// 422 with a single field-level detail entry.
    pub fn validation(
        loc: impl IntoIterator<Item = impl Into<String>>,
        msg: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        let field = FieldError::new(loc, msg, kind);
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "validation_error",
            field.msg.clone(),
        )
        .with_detail(field)
    }

    pub fn with_detail(mut self, field: FieldError) -> Self {
        self.detail.push(field);
        self
    }

    /// Attach an extra response header (e.g. `x-error`).
    pub fn with_header(mut self, name: HeaderName, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = if self.detail.is_empty() {
            json!({"error": self.code, "message": self.message})
        } else {
            json!({"error": self.code, "message": self.message, "detail": self.detail})
        };

        let mut response = (self.status, axum::Json(body)).into_response();
        for (name, value) in self.headers {
            match HeaderValue::from_str(&value) {
                Ok(value) => {
                    response.headers_mut().insert(name, value);
                }
                Err(_) => tracing::warn!(header = %name, "dropping unencodable error header"),
            }
        }
        response
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                msg,
            ),
            DomainError::InvalidId(msg) => Self::bad_request("invalid_id", msg),
            DomainError::NotFound => Self::not_found("not found"),
            DomainError::Internal(msg) => {
                tracing::error!(error = %msg, "internal failure while handling request");
                Self::internal()
            }
        }
    }
}
