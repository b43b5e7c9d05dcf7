//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness, never filtered

use axum::{http::StatusCode, response::IntoResponse};

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
