//! A rider in the simulation.

use lift_core::{Floor, PersonId};

/// One person riding (or waiting for) an elevator.
///
/// Created by an arrival generator, moved into a floor queue, then into an
/// elevator, and finally into the engine's completed list once delivered.
/// `wait_time` counts every round spent waiting or aboard and stops moving
/// once the person reaches their target.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    /// Stable identity, assigned by the generator that created this person.
    pub id: PersonId,
    /// The floor this person appeared on.
    pub start: Floor,
    /// The floor this person wants to reach.  Never equals `start`.
    pub target: Floor,
    /// Rounds spent waiting on a floor or riding an elevator.
    pub wait_time: u32,
}

impl Person {
    /// Create a new person with zero accumulated wait time.
    pub fn new(id: PersonId, start: Floor, target: Floor) -> Self {
        debug_assert_ne!(start, target, "a person's target must differ from their start");
        Person { id, start, target, wait_time: 0 }
    }
}
