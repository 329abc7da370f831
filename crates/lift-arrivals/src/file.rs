//! The file-driven arrival generator.

use std::io::Read;
use std::path::Path;

use lift_core::{Floor, Round};

use crate::generator::{ArrivalGenerator, Arrivals};
use crate::loader::{ArrivalSchedule, load_schedule};
use crate::ArrivalResult;

/// Replays a pre-parsed, round-indexed arrival schedule.
///
/// The schedule is built once at construction and immutable thereafter.
/// Rounds absent from the schedule produce no arrivals.  Because person
/// identities are fixed at load time, generating the same round twice
/// reproduces the same people — the engine's duplicate guard turns an
/// accidental double-generate into a no-op instead of a population bug.
#[derive(Debug)]
pub struct FileArrivals {
    schedule: ArrivalSchedule,
}

impl FileArrivals {
    /// Load a schedule from a CSV file.
    pub fn from_path(path: &Path, max_floor: Floor) -> ArrivalResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, max_floor)
    }

    /// Like [`from_path`][Self::from_path] but accepts any `Read` source.
    ///
    /// Useful for testing (pass a `std::io::Cursor`) or embedded schedules.
    pub fn from_reader<R: Read>(reader: R, max_floor: Floor) -> ArrivalResult<Self> {
        Ok(FileArrivals {
            schedule: load_schedule(reader, max_floor)?,
        })
    }

    /// Number of rounds with at least one scheduled arrival row.
    pub fn scheduled_rounds(&self) -> usize {
        self.schedule.len()
    }
}

impl ArrivalGenerator for FileArrivals {
    fn generate(&mut self, round: Round) -> Arrivals {
        let mut arrivals = Arrivals::new();

        let Some(people) = self.schedule.get(&round) else {
            return arrivals;
        };

        // Group by start floor.  Iterating in stored (row) order makes the
        // original file position the intra-floor tie-break — a stable
        // grouping, not a sort by floor value.
        for person in people {
            arrivals
                .entry(person.start)
                .or_insert_with(Vec::new)
                .push(person.clone());
        }
        arrivals
    }
}
