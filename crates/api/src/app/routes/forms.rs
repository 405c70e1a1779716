//! Form data.
//!
//! HTML forms submit `application/x-www-form-urlencoded`, not JSON. The
//! `Form` extractor reads that encoding into the same kind of struct a JSON
//! body would use. The password-flow login below is the classic case: the
//! field names are fixed by convention and must arrive as form fields.

use axum::{Form, Json, Router, routing::post};
use serde::Deserialize;
use serde_json::{Value, json};

pub fn router() -> Router {
    Router::new().route("/login", post(login))
}

#[derive(Debug, Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

/// POST /forms/login - form-encoded credentials in, username only out.
async fn login(Form(form): Form<LoginForm>) -> Json<Value> {
    // The password is consumed here and goes no further.
    let _ = form.password;
    Json(json!({"username": form.username}))
}
