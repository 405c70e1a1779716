//! File uploads.
//!
//! Files travel as `multipart/form-data`: a sequence of named parts, each
//! with optional filename and content-type metadata. The handlers below walk
//! the parts with `Multipart`; small files are buffered whole, which is all
//! the tour needs. Text fields can ride in the same body next to the files.

use axum::extract::Multipart;
use axum::extract::multipart::Field;
use axum::{Json, Router, routing::post};
use serde_json::{Value, json};

use crate::app::errors::ApiError;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_file))
        .route("/uploads", post(create_upload))
        .route("/uploads/batch", post(create_uploads))
        .route("/meta", post(create_file_with_meta))
}

fn multipart_error(err: axum::extract::multipart::MultipartError) -> ApiError {
    ApiError::bad_request("invalid_multipart", err.body_text())
}

fn missing_part(name: &str) -> ApiError {
    ApiError::validation(["body", name], "field required", "missing")
}

async fn field_bytes(field: Field<'_>) -> Result<Vec<u8>, ApiError> {
    Ok(field.bytes().await.map_err(multipart_error)?.to_vec())
}

/// POST /files - read the first part as raw bytes and report its size.
async fn create_file(mut multipart: Multipart) -> Result<Json<Value>, ApiError> {
    let field = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
        .ok_or_else(|| missing_part("file"))?;
    let contents = field_bytes(field).await?;
    Ok(Json(json!({"file_size": contents.len()})))
}

/// POST /files/uploads - report the upload's metadata instead of its bytes.
async fn create_upload(mut multipart: Multipart) -> Result<Json<Value>, ApiError> {
    let field = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
        .ok_or_else(|| missing_part("file"))?;
    let filename = field.file_name().map(str::to_string);
    let content_type = field.content_type().map(str::to_string);
    Ok(Json(json!({"filename": filename, "content_type": content_type})))
}

/// POST /files/uploads/batch - several files in one body, one part each.
async fn create_uploads(mut multipart: Multipart) -> Result<Json<Value>, ApiError> {
    let mut filenames = Vec::new();
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        filenames.push(field.file_name().map(str::to_string));
    }
    if filenames.is_empty() {
        return Err(missing_part("files"));
    }
    Ok(Json(json!({"filenames": filenames})))
}

/// POST /files/meta - two files and a text field in the same multipart body:
/// `file` (sized), `fileb` (content type reported), `token` (plain text).
async fn create_file_with_meta(mut multipart: Multipart) -> Result<Json<Value>, ApiError> {
    let mut file_size = None;
    let mut fileb_content_type = None;
    let mut token = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => file_size = Some(field_bytes(field).await?.len()),
            Some("fileb") => {
                fileb_content_type = field.content_type().map(str::to_string);
                // Drain the part so the stream can continue.
                let _ = field_bytes(field).await?;
            }
            Some("token") => token = Some(field.text().await.map_err(multipart_error)?),
            _ => {}
        }
    }

    Ok(Json(json!({
        "file_size": file_size.ok_or_else(|| missing_part("file"))?,
        "token": token.ok_or_else(|| missing_part("token"))?,
        "fileb_content_type": fileb_content_type,
    })))
}
