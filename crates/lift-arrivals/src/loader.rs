//! CSV schedule loader.
//!
//! # CSV format
//!
//! One row per round, no header.  Rows may appear in any order; each round
//! number may appear at most once.
//!
//! ```csv
//! round,start_1,target_1,start_2,target_2,…
//! ```
//!
//! The number of floor fields after the round is variable but always even.
//! A row with only a round number is legal and means "no arrivals that
//! round" — equivalent to omitting the row.
//!
//! Every floor must lie in `[1, max_floor]` and each pair's start must
//! differ from its target.  Both are enforced here, at load time, so a bad
//! row can never surface mid-run as a corrupted simulation.

use std::io::Read;

use rustc_hash::FxHashMap;

use lift_core::{Floor, PersonId, Round};
use lift_entities::Person;

use crate::{ArrivalError, ArrivalResult};

/// A parsed, validated, round-indexed arrival schedule.
///
/// Values keep the file's row order: index order within a round's vec is the
/// intra-floor boarding tie-break.
pub type ArrivalSchedule = FxHashMap<Round, Vec<Person>>;

/// Parse a CSV schedule from any `Read` source.
///
/// `PersonId`s are assigned sequentially in row order across the whole file,
/// so re-parsing the same data reproduces the same identities.
pub fn load_schedule<R: Read>(reader: R, max_floor: Floor) -> ArrivalResult<ArrivalSchedule> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut schedule = ArrivalSchedule::default();
    let mut next_id: u32 = 0;

    for (row, result) in csv_reader.records().enumerate() {
        let record = result?;

        let mut fields = record.iter().map(str::trim).filter(|f| !f.is_empty());
        let round_field = fields.next().ok_or(ArrivalError::MissingRound { row })?;
        let round = Round(parse_number::<u64>(row, round_field)?);

        let floors: Vec<Floor> = fields
            .map(|f| parse_number::<u32>(row, f).map(Floor))
            .collect::<ArrivalResult<_>>()?;
        if floors.len() % 2 != 0 {
            return Err(ArrivalError::OddFloorFields { row, got: floors.len() });
        }

        let mut people = Vec::with_capacity(floors.len() / 2);
        for pair in floors.chunks_exact(2) {
            let (start, target) = (pair[0], pair[1]);
            for floor in [start, target] {
                if !floor.in_building(max_floor) {
                    return Err(ArrivalError::FloorOutOfRange { row, floor, max_floor });
                }
            }
            if start == target {
                return Err(ArrivalError::StartEqualsTarget { row, floor: start });
            }
            people.push(Person::new(PersonId(next_id), start, target));
            next_id += 1;
        }

        if schedule.insert(round, people).is_some() {
            return Err(ArrivalError::DuplicateRound { row, round });
        }
    }

    Ok(schedule)
}

fn parse_number<T: std::str::FromStr>(row: usize, field: &str) -> ArrivalResult<T> {
    field
        .parse::<T>()
        .map_err(|_| ArrivalError::NotANumber { row, value: field.to_string() })
}
