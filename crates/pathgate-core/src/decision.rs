//! Request-time decision engine.
//!
//! Blocklist: deny if ANY pattern matches.
//! Allowlist: allow only if EVERY pattern matches.

use crate::config::PathFilterConfig;
use crate::error::Result;
use crate::pattern::{ListKind, PatternSet};

/// Outcome of evaluating one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

/// Which list drives a compiled filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Allowlist,
    Blocklist,
}

impl FilterMode {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::Allowlist => "allowlist",
            FilterMode::Blocklist => "blocklist",
        }
    }
}

/// Compiled allowlist + blocklist for one filter instance.
/// Construct once at startup, then share via Arc.
#[derive(Debug, Clone)]
pub struct CompiledFilter {
    allowlist: PatternSet,
    blocklist: PatternSet,
}

impl CompiledFilter {
    pub fn compile(config: &PathFilterConfig) -> Result<Self> {
        config.validate()?;

        let allowlist = PatternSet::compile(ListKind::Allowlist, &config.allowlist)?;
        let blocklist = PatternSet::compile(ListKind::Blocklist, &config.blocklist)?;

        Ok(Self { allowlist, blocklist })
    }

    pub fn mode(&self) -> FilterMode {
        if self.blocklist.is_empty() {
            FilterMode::Allowlist
        } else {
            FilterMode::Blocklist
        }
    }

    /// The populated list for this filter's mode.
    pub fn active(&self) -> &PatternSet {
        match self.mode() {
            FilterMode::Allowlist => &self.allowlist,
            FilterMode::Blocklist => &self.blocklist,
        }
    }

    pub fn allowlist(&self) -> &PatternSet {
        &self.allowlist
    }

    pub fn blocklist(&self) -> &PatternSet {
        &self.blocklist
    }

    /// Evaluate an escaped request path.
    pub fn decide(&self, path: &str) -> Decision {
        if !self.blocklist.is_empty() && self.blocklist.any_match(path) {
            return Decision::Deny;
        }

        if !self.allowlist.is_empty() && !self.allowlist.all_match(path) {
            return Decision::Deny;
        }

        Decision::Allow
    }
}
