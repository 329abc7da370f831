//! `lift-arrivals` — pluggable arrival generation for `liftsim`.
//!
//! An [`ArrivalGenerator`] decides who shows up where, each round.  Three
//! implementations are provided:
//!
//! | Generator             | Behavior                                        |
//! |-----------------------|-------------------------------------------------|
//! | [`RoundRobinArrivals`]| One person per round at floor 1, cycling targets |
//! | [`FileArrivals`]      | Replays a CSV schedule indexed by round          |
//! | [`RandomArrivals`]    | Seeded uniform arrivals, reproducible per seed   |
//!
//! # CSV schedule format
//!
//! One row per round, any row order, no header:
//!
//! ```csv
//! 0,1,4,5,3
//! 3,2,6
//! ```
//!
//! Row `round, start_1, target_1, start_2, target_2, …` — a variable but
//! always even number of floor fields after the round number.  All floors
//! must lie in `[1, max_floor]` and each start must differ from its target;
//! violations are rejected at load time, before any round executes.

pub mod error;
pub mod file;
pub mod generator;
pub mod loader;
pub mod random;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ArrivalError, ArrivalResult};
pub use file::FileArrivals;
pub use generator::{Arrivals, ArrivalGenerator, RoundRobinArrivals};
pub use random::RandomArrivals;
