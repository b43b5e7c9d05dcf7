//! Demo upstream: the "next handler" behind the filter chain.

use axum::{http::{StatusCode, Uri}, response::IntoResponse};

/// Answers 200 with the path it received.
pub async fn echo_path(uri: Uri) -> impl IntoResponse {
    (StatusCode::OK, uri.path().to_string())
}
