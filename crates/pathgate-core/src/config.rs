//! Filter configuration as supplied by the host.

use serde::Deserialize;

use crate::error::{PathFilterError, Result};

/// Allowlist/blocklist patterns for a single filter instance.
///
/// Exactly one of the two lists must be populated; see [`validate`](Self::validate).
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PathFilterConfig {
    pub allowlist: Vec<String>,
    pub blocklist: Vec<String>,
}

impl PathFilterConfig {
    pub fn allowlist<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowlist: patterns.into_iter().map(Into::into).collect(),
            blocklist: Vec::new(),
        }
    }

    pub fn blocklist<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowlist: Vec::new(),
            blocklist: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Enforce allowlist/blocklist mutual exclusivity.
    pub fn validate(&self) -> Result<()> {
        match (self.allowlist.is_empty(), self.blocklist.is_empty()) {
            (true, true) => Err(PathFilterError::Configuration(
                "both allowlist and blocklist cannot be empty".into(),
            )),
            (false, false) => Err(PathFilterError::Configuration(
                "both allowlist and blocklist cannot be populated".into(),
            )),
            _ => Ok(()),
        }
    }
}
