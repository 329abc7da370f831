//! Per-floor FIFO queues of people waiting for an elevator.

use std::collections::VecDeque;

use lift_core::{Floor, PersonId};

use crate::{EntityError, Person};

/// The waiting set: one queue per floor, every floor always present.
///
/// Queues hold people in arrival order; all else equal, the person who
/// arrived first boards first.  Floors iterate in ascending order because
/// the backing store is a dense `Vec` indexed by `floor - 1`.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitingFloors {
    queues: Vec<VecDeque<Person>>,
}

impl WaitingFloors {
    /// Create empty queues for floors `1..=num_floors`.
    pub fn new(num_floors: u32) -> Self {
        WaitingFloors {
            queues: (0..num_floors).map(|_| VecDeque::new()).collect(),
        }
    }

    /// The highest floor tracked.
    #[inline]
    pub fn max_floor(&self) -> Floor {
        Floor(self.queues.len() as u32)
    }

    /// The queue for `floor`, read-only.
    #[inline]
    pub fn queue(&self, floor: Floor) -> &VecDeque<Person> {
        &self.queues[floor.index()]
    }

    /// The queue for `floor`, mutable.  Engine use only.
    #[inline]
    pub fn queue_mut(&mut self, floor: Floor) -> &mut VecDeque<Person> {
        &mut self.queues[floor.index()]
    }

    /// Append `person` to their floor's queue.
    ///
    /// Rejects floors outside the building and duplicate IDs already queued
    /// on that floor (the engine's idempotence guard against generator bugs).
    pub fn push(&mut self, floor: Floor, person: Person) -> Result<(), EntityError> {
        if !floor.in_building(self.max_floor()) {
            return Err(EntityError::FloorOutOfBounds { floor, max_floor: self.max_floor() });
        }
        if self.queues[floor.index()].iter().any(|p| p.id == person.id) {
            return Err(EntityError::DuplicatePerson { person: person.id, floor });
        }
        self.queues[floor.index()].push_back(person);
        Ok(())
    }

    /// Whether `person` is queued on `floor`.
    pub fn contains(&self, floor: Floor, person: PersonId) -> bool {
        floor.in_building(self.max_floor())
            && self.queues[floor.index()].iter().any(|p| p.id == person)
    }

    /// Floors in ascending order with their queues (including empty ones).
    pub fn iter_floors(&self) -> impl Iterator<Item = (Floor, &VecDeque<Person>)> {
        self.queues
            .iter()
            .enumerate()
            .map(|(i, q)| (Floor(i as u32 + 1), q))
    }

    /// Floors (ascending) that currently have at least one person waiting.
    pub fn occupied_floors(&self) -> impl Iterator<Item = Floor> + '_ {
        self.iter_floors()
            .filter(|(_, q)| !q.is_empty())
            .map(|(f, _)| f)
    }

    /// Total number of people waiting across all floors.
    pub fn total_waiting(&self) -> usize {
        self.queues.iter().map(VecDeque::len).sum()
    }

    /// Increment every waiting person's wait time by one round.
    pub fn tick_wait_times(&mut self) {
        for queue in &mut self.queues {
            for person in queue {
                person.wait_time += 1;
            }
        }
    }
}
