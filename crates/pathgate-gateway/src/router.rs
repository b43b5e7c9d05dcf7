//! Axum router wiring.
//!
//! `/healthz` is served directly; every other path goes through the filter
//! chain before reaching the upstream handler.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, upstream};

pub fn build_router(state: AppState) -> Router {
    let mut filtered = Router::new().fallback(upstream::echo_path);

    // Router::layer wraps outside-in, so the first configured filter goes on last.
    for layer in state.chain().iter().rev() {
        filtered = filtered.layer(layer.clone());
    }

    Router::new()
        .route("/healthz", get(ops::healthz))
        .fallback_service(filtered)
}
