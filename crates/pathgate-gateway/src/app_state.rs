//! Shared application state for the pathgate gateway.
//!
//! Compiles every configured filter once at startup. Startup errors are
//! explicit (Result instead of panic).

use std::sync::Arc;

use pathgate_core::error::{PathFilterError, Result};

use crate::config::GatewayConfig;
use crate::filter::PathFilterLayer;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    chain: Vec<PathFilterLayer>,
}

impl AppState {
    /// Build application state, compiling the filter chain in config order.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let mut chain = Vec::with_capacity(cfg.filters.len());
        for f in &cfg.filters {
            let layer = PathFilterLayer::new(f.name.clone(), &f.filter_config()).map_err(|e| {
                PathFilterError::InvalidConfig(format!(
                    "filter compile failed (filter={}): {e}",
                    f.name
                ))
            })?;
            chain.push(layer);
        }

        Ok(Self {
            inner: Arc::new(AppStateInner { chain }),
        })
    }

    /// Compiled filters, outermost first.
    pub fn chain(&self) -> &[PathFilterLayer] {
        &self.inner.chain
    }
}
