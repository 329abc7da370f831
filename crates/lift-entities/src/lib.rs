//! `lift-entities` — passive simulation entities for `liftsim`.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`person`]   | `Person` — a rider with start, target, and wait time   |
//! | [`elevator`] | `Elevator` — capacity-bounded passenger carrier        |
//! | [`waiting`]  | `WaitingFloors` — per-floor FIFO queues                |
//! | [`error`]    | `EntityError` — invariant violations                   |
//!
//! # Ownership discipline
//!
//! A `Person` lives in exactly one container at a time: a floor queue inside
//! [`WaitingFloors`], then one elevator's passenger list, then whatever the
//! engine keeps completed riders in.  All transfers are by-value moves, so
//! the "never in two containers" invariant is enforced by the compiler, not
//! by runtime bookkeeping.

pub mod elevator;
pub mod error;
pub mod person;
pub mod waiting;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use elevator::Elevator;
pub use error::EntityError;
pub use person::Person;
pub use waiting::WaitingFloors;
