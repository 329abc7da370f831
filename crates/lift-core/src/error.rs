//! Configuration error type.
//!
//! Sub-crates define their own error enums (arrival-data errors in
//! `lift-arrivals`, invariant violations in `lift-entities`) and the engine
//! wraps them all via `From` impls.  Only configuration errors live here
//! because `SimConfig` does.

use thiserror::Error;

/// Rejected simulation parameters.  Raised at construction, before any
/// round executes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a building needs at least 2 floors, got {got}")]
    TooFewFloors { got: u32 },

    #[error("at least one elevator is required")]
    NoElevators,

    #[error("elevator capacity must be at least 1")]
    ZeroCapacity,
}
