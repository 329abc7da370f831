//! Entity invariant violations.
//!
//! These are defensive errors: a correct engine and correct algorithms never
//! produce them.  When one does surface, the run must abort rather than
//! carry on and report wrong statistics.

use lift_core::{ElevatorId, Floor, PersonId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntityError {
    #[error("{elevator} is at capacity ({capacity}) and cannot board {person}")]
    OverCapacity {
        elevator: ElevatorId,
        capacity: usize,
        person:   PersonId,
    },

    #[error("{person} is already queued on {floor}")]
    DuplicatePerson { person: PersonId, floor: Floor },

    #[error("{floor} does not exist in a building with max {max_floor}")]
    FloorOutOfBounds { floor: Floor, max_floor: Floor },
}
