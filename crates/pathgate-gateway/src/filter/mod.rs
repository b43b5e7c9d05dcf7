//! Path filter middleware.
//!
//! Wraps the core decision engine in a `tower::Layer`/`Service` pair so it can
//! sit anywhere in an axum (or plain tower) handler chain. Denied requests get a
//! 403 with a fixed body; allowed requests reach the next handler untouched.

pub mod layer;
pub mod response;

pub use layer::{PathFilter, PathFilterLayer};
pub use response::blocked_response;
