//! The `MovingAlgorithm` trait — the decision side of elevator control.

use lift_core::Floor;
use lift_entities::{Elevator, WaitingFloors};

/// Pluggable movement policy.
///
/// Called once per round, after boarding and before the physical move.  The
/// only state a policy may touch is each elevator's `target_floor`; current
/// floors, passenger lists, and waiting queues are read-only inputs.
///
/// Policies must also be idempotent for elevators they have no opinion
/// about: leave the target unchanged rather than resetting it, so an
/// elevator mid-journey keeps its destination.
pub trait MovingAlgorithm {
    /// Update target floors for all elevators.
    fn update_target_floors(
        &self,
        elevators: &mut [Elevator],
        waiting:   &WaitingFloors,
        max_floor: Floor,
    );
}

/// A [`MovingAlgorithm`] that never changes any target.
///
/// Elevators finish whatever journey they were on and then stay idle.
/// Useful as a placeholder in tests that only exercise arrivals, boarding,
/// or wait-time accounting.
pub struct Hold;

impl MovingAlgorithm for Hold {
    fn update_target_floors(
        &self,
        _elevators: &mut [Elevator],
        _waiting:   &WaitingFloors,
        _max_floor: Floor,
    ) {
    }
}
