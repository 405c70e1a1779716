//! Request extraction helpers shared across chapters.
//!
//! The `Valid*` wrappers delegate to axum's own extractors and translate their
//! rejections into the structured 422 body from [`crate::app::errors`], so a
//! bad path segment, query string, or JSON body always fails the same way:
//! a `detail` array naming the source (`path` / `query` / `body`) and what
//! went wrong. Handlers never see half-parsed input.
//!
//! [`CommonParams`] and [`QueryOrCookie`] are the reusable "give my handler a
//! precomputed value" pieces: any handler that names them in its signature
//! gets them resolved before it runs, including nested resolution
//! ([`QueryOrCookie`] itself pulls from two request sources).

use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::http::{HeaderMap, header};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::app::errors::ApiError;

/// Typed path segments; rejections become 422 detail at `["path"]`.
pub struct ValidPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::validation(
                ["path"],
                rejection.body_text(),
                "type_error",
            )),
        }
    }
}

/// Typed query string; rejections become 422 detail at `["query"]`.
pub struct ValidQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::validation(
                ["query"],
                rejection.body_text(),
                "value_error",
            )),
        }
    }
}

/// Typed JSON body; rejections become 422 detail at `["body"]`.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejection_to_error(rejection)),
        }
    }
}

fn json_rejection_to_error(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(e) => {
            ApiError::validation(["body"], e.body_text(), "value_error")
        }
        JsonRejection::JsonSyntaxError(e) => {
            ApiError::validation(["body"], e.body_text(), "value_error.jsondecode")
        }
        JsonRejection::MissingJsonContentType(e) => {
            ApiError::bad_request("unsupported_media_type", e.body_text())
        }
        other => ApiError::validation(["body"], other.body_text(), "value_error"),
    }
}

fn default_limit() -> usize {
    100
}

/// The shared query parameters several listing endpoints declare.
///
/// This is a value any handler can request by naming it in its signature; the
/// resolution (parse + validate the query string) happens once, here.
#[derive(Debug, Clone, Deserialize)]
pub struct CommonParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

#[async_trait]
impl<S> FromRequestParts<S> for CommonParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ValidQuery(params) = ValidQuery::<CommonParams>::from_request_parts(parts, state).await?;
        Ok(params)
    }
}

#[derive(Debug, Deserialize)]
struct QueryOnly {
    #[serde(default)]
    q: Option<String>,
}

/// A query value with a cookie fallback: `?q=...` wins, otherwise the
/// `last-query` cookie, otherwise nothing.
pub struct QueryOrCookie(pub Option<String>);

impl QueryOrCookie {
    pub const COOKIE_NAME: &'static str = "last-query";
}

#[async_trait]
impl<S> FromRequestParts<S> for QueryOrCookie
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ValidQuery(QueryOnly { q }) =
            ValidQuery::<QueryOnly>::from_request_parts(parts, state).await?;
        let value = q.or_else(|| cookie_value(&parts.headers, Self::COOKIE_NAME));
        Ok(Self(value))
    }
}

/// Pull one cookie out of the `Cookie` request header, if present.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;

    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn cookie_value_picks_named_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("ads_id=abc123; last-query=fixedquery"),
        );
        assert_eq!(cookie_value(&headers, "ads_id").as_deref(), Some("abc123"));
        assert_eq!(
            cookie_value(&headers, "last-query").as_deref(),
            Some("fixedquery")
        );
        assert_eq!(cookie_value(&headers, "missing"), None);
    }

    #[test]
    fn cookie_value_without_header() {
        assert_eq!(cookie_value(&HeaderMap::new(), "ads_id"), None);
    }
}
