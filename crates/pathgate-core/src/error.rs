//! Shared error type across pathgate crates.

use thiserror::Error;

use crate::pattern::ListKind;

/// Stable error codes, used by tests and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Allowlist/blocklist exclusivity violated.
    Configuration,
    /// A pattern failed to compile.
    PatternCompilation,
    /// Host configuration is malformed.
    InvalidConfig,
    /// Unsupported host configuration version.
    UnsupportedVersion,
    /// Internal failure (I/O and the like).
    Internal,
}

impl ErrorKind {
    /// String representation used in logs and assertions.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Configuration => "CONFIGURATION",
            ErrorKind::PatternCompilation => "PATTERN_COMPILATION",
            ErrorKind::InvalidConfig => "INVALID_CONFIG",
            ErrorKind::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PathFilterError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum PathFilterError {
    #[error("{0}")]
    Configuration(String),
    #[error("cannot compile regex in {list} {pattern:?}: {source}")]
    PatternCompilation {
        list: ListKind,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl PathFilterError {
    /// Map the error to its stable code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PathFilterError::Configuration(_) => ErrorKind::Configuration,
            PathFilterError::PatternCompilation { .. } => ErrorKind::PatternCompilation,
            PathFilterError::InvalidConfig(_) => ErrorKind::InvalidConfig,
            PathFilterError::UnsupportedVersion => ErrorKind::UnsupportedVersion,
            PathFilterError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Offending pattern, for compilation failures.
    pub fn pattern(&self) -> Option<&str> {
        match self {
            PathFilterError::PatternCompilation { pattern, .. } => Some(pattern),
            _ => None,
        }
    }
}
