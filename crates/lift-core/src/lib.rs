//! `lift-core` — foundational types for the `liftsim` elevator simulation.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `PersonId`, `ElevatorId`                              |
//! | [`floor`]    | `Floor` — 1-based building floor with distance math   |
//! | [`round`]    | `Round` — the discrete simulation time step           |
//! | [`config`]   | `SimConfig` — validated simulation parameters         |
//! | [`rng`]      | `SimRng` — deterministic seeded RNG                   |
//! | [`error`]    | `ConfigError`                                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod round;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::ConfigError;
pub use floor::Floor;
pub use ids::{ElevatorId, PersonId};
pub use rng::SimRng;
pub use round::Round;
