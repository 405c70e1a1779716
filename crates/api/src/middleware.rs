//! Request/response middleware.
//!
//! Middleware sees every request before any handler and every response after.
//! `process_time` wraps the whole app; `require_tokens` is applied per-route
//! where a chapter wants a guard that runs without the handler ever knowing.

use std::time::Instant;

use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;

use crate::app::errors::ApiError;

pub const PROCESS_TIME_HEADER: &str = "x-process-time";

pub const TOKEN_HEADER: &str = "x-token";
pub const KEY_HEADER: &str = "x-key";
const EXPECTED_TOKEN: &str = "fake-super-secret-token";
const EXPECTED_KEY: &str = "fake-super-secret-key";

/// Stamp every response with the time spent producing it, in seconds.
pub async fn process_time(req: Request, next: Next) -> Response {
    let started = Instant::now();

    let mut response = next.run(req).await;

    let elapsed = started.elapsed().as_secs_f64();
    if let Ok(value) = HeaderValue::from_str(&format!("{elapsed:.6}")) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(PROCESS_TIME_HEADER), value);
    }
    response
}

/// Route guard: both `x-token` and `x-key` must carry the expected values.
///
/// Rejections happen here; the guarded handler is never invoked.
pub async fn require_tokens(req: Request, next: Next) -> Result<Response, ApiError> {
    let headers = req.headers();

    let token = headers
        .get(TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if token != EXPECTED_TOKEN {
        return Err(ApiError::bad_request(
            "invalid_token",
            format!("{TOKEN_HEADER} header invalid"),
        ));
    }

    let key = headers
        .get(KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if key != EXPECTED_KEY {
        return Err(ApiError::bad_request(
            "invalid_key",
            format!("{KEY_HEADER} header invalid"),
        ));
    }

    Ok(next.run(req).await)
}
