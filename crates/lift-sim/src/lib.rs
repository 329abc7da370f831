//! `lift-sim` — round loop orchestrator for the `liftsim` elevator simulation.
//!
//! # Five-stage round loop
//!
//! ```text
//! for round in 0..num_rounds:
//!   ① Disembark — passengers whose target is the current floor leave
//!                 (moved to the completed list, not back to a queue).
//!   ② Arrive    — ArrivalGenerator::generate(round); append to floor
//!                 queues in generator order, skipping duplicate IDs.
//!   ③ Board     — floors ascending × elevators in order × waiters FIFO;
//!                 board iff at the right floor, not full, and the
//!                 elevator's direction is compatible.
//!   ④ Move      — MovingAlgorithm::update_target_floors, then advance
//!                 every elevator at most one floor toward its target.
//!   ⑤ Tick      — wait_time += 1 for everyone still waiting or aboard.
//! ```
//!
//! Stages never interleave across rounds and each stage mutates only the
//! collections its name says it does.  Observer hooks fire in stage order
//! and their return values are ignored.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_arrivals::RoundRobinArrivals;
//! use lift_core::SimConfig;
//! use lift_policy::EndToEndLoop;
//! use lift_sim::{NoopObserver, Simulation};
//!
//! let config = SimConfig { num_floors: 6, num_elevators: 2, elevator_capacity: 2 };
//! let generator = RoundRobinArrivals::new(config.max_floor());
//! let mut sim = Simulation::new(config, generator, EndToEndLoop)?;
//! let stats = sim.run(15, &mut NoopObserver)?;
//! ```

pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Simulation;
pub use stats::RunStats;
