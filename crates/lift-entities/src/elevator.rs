//! A capacity-bounded elevator car.

use lift_core::{ElevatorId, Floor};

use crate::{EntityError, Person};

/// One elevator car.
///
/// An elevator is *idle* when `current_floor == target_floor`.  Moving
/// algorithms only ever rewrite `target_floor`; the engine performs the
/// physical one-floor-per-round movement.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elevator {
    pub id: ElevatorId,
    /// Maximum passenger count.  At least 1.
    pub capacity: usize,
    pub current_floor: Floor,
    pub target_floor: Floor,
    /// Passengers in boarding order.  `len() <= capacity` always.
    pub passengers: Vec<Person>,
}

impl Elevator {
    /// Create an empty elevator parked (idle) at the ground floor.
    pub fn new(id: ElevatorId, capacity: usize) -> Self {
        debug_assert!(capacity >= 1);
        Elevator {
            id,
            capacity,
            current_floor: Floor::GROUND,
            target_floor:  Floor::GROUND,
            passengers:    Vec::with_capacity(capacity),
        }
    }

    /// Passenger load as a fraction of capacity, in `[0, 1]`.
    #[inline]
    pub fn fullness(&self) -> f64 {
        self.passengers.len() as f64 / self.capacity as f64
    }

    /// Whether this elevator has no pending motion.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.current_floor == self.target_floor
    }

    /// Take ownership of `person` as a passenger.
    ///
    /// Fails with [`EntityError::OverCapacity`] if the car is already full.
    /// Boarding logic checks [`fullness`][Self::fullness] before calling
    /// this, so the error is a fatal invariant violation, not flow control.
    pub fn board(&mut self, person: Person) -> Result<(), EntityError> {
        if self.passengers.len() >= self.capacity {
            return Err(EntityError::OverCapacity {
                elevator: self.id,
                capacity: self.capacity,
                person:   person.id,
            });
        }
        self.passengers.push(person);
        Ok(())
    }

    /// Remove and return every passenger whose target is the current floor.
    ///
    /// Snapshot-then-filter: the passenger list is taken out wholesale and
    /// rebuilt, so there is no mutation of a sequence mid-iteration.
    pub fn disembark_arrived(&mut self) -> Vec<Person> {
        let here = self.current_floor;
        let (arrived, staying): (Vec<Person>, Vec<Person>) = std::mem::take(&mut self.passengers)
            .into_iter()
            .partition(|p| p.target == here);
        self.passengers = staying;
        arrived
    }

    /// Move one floor toward the target floor (no-op when idle).
    #[inline]
    pub fn step(&mut self) {
        self.current_floor = self.current_floor.step_toward(self.target_floor);
    }
}
