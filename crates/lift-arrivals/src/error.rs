//! Arrival-data errors.
//!
//! Everything here is raised at load time.  Once a generator is constructed
//! its data is known-good and `generate` cannot fail.

use lift_core::{Floor, Round};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrivalError {
    #[error("row {row}: empty record, expected a round number")]
    MissingRound { row: usize },

    #[error("row {row}: expected an even number of floor fields after the round, got {got}")]
    OddFloorFields { row: usize, got: usize },

    #[error("row {row}: {value:?} is not a number")]
    NotANumber { row: usize, value: String },

    #[error("row {row}: {floor} is outside the building (max {max_floor})")]
    FloorOutOfRange {
        row:       usize,
        floor:     Floor,
        max_floor: Floor,
    },

    #[error("row {row}: start and target are both {floor}")]
    StartEqualsTarget { row: usize, floor: Floor },

    #[error("row {row}: {round} was already defined by an earlier row")]
    DuplicateRound { row: usize, round: Round },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ArrivalResult<T> = Result<T, ArrivalError>;
