use std::collections::HashSet;
use std::net::SocketAddr;

use pathgate_core::error::{PathFilterError, Result};
use pathgate_core::PathFilterConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    /// Filter chain, outermost first.
    #[serde(default)]
    pub filters: Vec<FilterEntry>,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PathFilterError::UnsupportedVersion);
        }
        if self.filters.is_empty() {
            return Err(PathFilterError::InvalidConfig("filters must not be empty".into()));
        }

        self.gateway.validate()?;

        let mut seen = HashSet::new();
        for f in &self.filters {
            if f.name.trim().is_empty() {
                return Err(PathFilterError::InvalidConfig(
                    "filters[].name must not be empty".into(),
                ));
            }
            if !seen.insert(f.name.as_str()) {
                return Err(PathFilterError::InvalidConfig(format!(
                    "duplicate filter name: {}",
                    f.name
                )));
            }
            f.filter_config()
                .validate()
                .map_err(|e| PathFilterError::InvalidConfig(format!("filter {}: {e}", f.name)))?;
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            PathFilterError::InvalidConfig(format!(
                "gateway.listen must be a valid SocketAddr: {}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

/// One named filter instance in the chain.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterEntry {
    pub name: String,
    #[serde(default)]
    pub allowlist: Vec<String>,
    #[serde(default)]
    pub blocklist: Vec<String>,
}

impl FilterEntry {
    pub fn filter_config(&self) -> PathFilterConfig {
        PathFilterConfig {
            allowlist: self.allowlist.clone(),
            blocklist: self.blocklist.clone(),
        }
    }
}
