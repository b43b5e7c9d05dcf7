//! pathgate core: transport-agnostic path filter primitives and error types.
//!
//! This crate owns the filter configuration, the pattern set compiler, and the
//! decision engine. It carries no HTTP or runtime dependencies so the same
//! compiled state can sit behind any handler chain.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every construction failure surfaces as `PathFilterError`; request-time
//! evaluation is infallible once a filter has been compiled.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod decision;
pub mod error;
pub mod path;
pub mod pattern;

pub use config::PathFilterConfig;
pub use decision::{CompiledFilter, Decision, FilterMode};
/// Shared result type.
pub use error::{PathFilterError, Result};
pub use path::escape_path;
pub use pattern::{ListKind, PatternSet};

/// Body text written with every deny response.
pub const BLOCKED_BODY: &str = "This path is blocked";
