//! `lift-policy` — pluggable elevator movement decisions for `liftsim`.
//!
//! A [`MovingAlgorithm`] rewrites elevator *target* floors once per round.
//! It never performs the physical move — that stays in the engine, which
//! advances each elevator at most one floor per round.
//!
//! | Policy           | Behavior                                            |
//! |------------------|-----------------------------------------------------|
//! | [`EndToEndLoop`] | Bounce between floor 1 and the top, ignore people   |
//! | [`FurthestFloor`]| Chase the furthest passenger/waiter target          |
//! | [`Hold`]         | Never change any target (test placeholder)          |

pub mod algorithm;
pub mod end_to_end;
pub mod furthest;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use algorithm::{Hold, MovingAlgorithm};
pub use end_to_end::EndToEndLoop;
pub use furthest::FurthestFloor;
