use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use pathgate_core::BLOCKED_BODY;

/// 403 response shared by blocklist and allowlist denials.
pub fn blocked_response() -> Response {
    (
        StatusCode::FORBIDDEN,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        ],
        BLOCKED_BODY,
    )
        .into_response()
}
