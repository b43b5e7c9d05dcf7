//! Pattern set compilation.
//!
//! Patterns are regular expressions with unanchored search semantics: a
//! pattern matches if it matches anywhere in the path. Use `^`/`$` to pin it.

use std::fmt;

use regex::Regex;

use crate::error::{PathFilterError, Result};

/// Which configured list a pattern came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Allowlist,
    Blocklist,
}

impl ListKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ListKind::Allowlist => "allowlist",
            ListKind::Blocklist => "blocklist",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, immutable set of compiled matchers.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    matchers: Vec<Regex>,
}

impl PatternSet {
    /// Compile `raw` in order, stopping at the first invalid pattern.
    pub fn compile(list: ListKind, raw: &[String]) -> Result<Self> {
        let mut matchers = Vec::with_capacity(raw.len());
        for pattern in raw {
            let re = Regex::new(pattern).map_err(|source| {
                tracing::debug!(%list, %pattern, "pattern rejected");
                PathFilterError::PatternCompilation {
                    list,
                    pattern: pattern.clone(),
                    source,
                }
            })?;
            matchers.push(re);
        }
        Ok(Self { matchers })
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Source patterns, in configuration order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.matchers.iter().map(Regex::as_str)
    }

    /// True if any matcher matches `path`. Short-circuits on the first hit.
    pub fn any_match(&self, path: &str) -> bool {
        self.matchers.iter().any(|re| re.is_match(path))
    }

    /// True if every matcher matches `path`. Short-circuits on the first miss.
    pub fn all_match(&self, path: &str) -> bool {
        self.matchers.iter().all(|re| re.is_match(path))
    }
}
