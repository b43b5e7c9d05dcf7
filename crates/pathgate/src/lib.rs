//! Top-level facade crate for pathgate.
//!
//! Re-exports the core filter types and the gateway middleware so users can
//! depend on a single crate.

pub mod core {
    pub use pathgate_core::*;
}

pub mod gateway {
    pub use pathgate_gateway::*;
}
