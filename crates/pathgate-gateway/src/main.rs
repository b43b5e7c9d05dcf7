//! pathgate gateway
//!
//! - Loads `PATHGATE_CONFIG` (default `pathgate.yaml`)
//! - Compiles the filter chain once
//! - Serves `/healthz` plus the filtered upstream

use std::error::Error;

use tracing_subscriber::{fmt, EnvFilter};

use pathgate_gateway::{app_state, config, router};

const DEFAULT_CONFIG_PATH: &str = "pathgate.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::var("PATHGATE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.gateway.listen_addr()?;

    let state = app_state::AppState::new(cfg)?;
    let filters = state.chain().len();
    let app = router::build_router(state);

    tracing::info!(%listen, filters, "pathgate-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await?;

    axum::serve(listener, app).await?;
    Ok(())
}
