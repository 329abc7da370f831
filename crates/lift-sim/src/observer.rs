//! Simulation observer trait for rendering and progress reporting.

use lift_arrivals::Arrivals;
use lift_core::{ElevatorId, PersonId, Round};

use crate::RunStats;

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the round loop, always in stage order.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers are fire-and-forget: the
/// engine never reads anything back and simulation state reaches them
/// read-only, so a renderer cannot perturb a run.
///
/// # Example — boarding logger
///
/// ```rust,ignore
/// struct BoardingLog;
///
/// impl SimObserver for BoardingLog {
///     fn on_boarding(&mut self, person: PersonId, elevator: ElevatorId) {
///         println!("{person} boarded {elevator}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each round, before any stage runs.
    fn on_round_start(&mut self, _round: Round) {}

    /// Called after the Arrive stage with the round's new arrivals per floor.
    fn on_arrivals(&mut self, _round: Round, _arrivals: &Arrivals) {}

    /// Called once per successful boarding, after the Board stage, in
    /// boarding order.
    fn on_boarding(&mut self, _person: PersonId, _elevator: ElevatorId) {}

    /// Called at the end of each round, after wait times update.
    fn on_round_end(&mut self, _round: Round) {}

    /// Called once after the final round, with the run's statistics.  A
    /// visualizer would block here awaiting user dismissal.
    fn on_run_end(&mut self, _stats: &RunStats) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
