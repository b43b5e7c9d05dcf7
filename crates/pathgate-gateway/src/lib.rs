//! pathgate gateway library entry.
//!
//! This crate wraps the core path filter in tower middleware, loads the
//! gateway's YAML config, and wires the filter chain into an axum router. It
//! is intended to be consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod app_state;
pub mod config;
pub mod filter;
pub mod ops;
pub mod router;
pub mod upstream;

pub use filter::{PathFilter, PathFilterLayer};
