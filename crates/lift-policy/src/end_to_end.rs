//! Stateless bottom-to-top oscillation.

use lift_core::Floor;
use lift_entities::{Elevator, WaitingFloors};

use crate::MovingAlgorithm;

/// Every elevator shuttles between floor 1 and the top floor forever.
///
/// At floor 1 the target becomes the top floor; at the top floor it becomes
/// floor 1; anywhere in between the elevator keeps going.  Passengers and
/// waiting people are ignored entirely — riders are picked up and dropped
/// off purely as a side effect of the sweep.
pub struct EndToEndLoop;

impl MovingAlgorithm for EndToEndLoop {
    fn update_target_floors(
        &self,
        elevators: &mut [Elevator],
        _waiting:  &WaitingFloors,
        max_floor: Floor,
    ) {
        for elevator in elevators {
            if elevator.current_floor == Floor::GROUND {
                elevator.target_floor = max_floor;
            } else if elevator.current_floor == max_floor {
                elevator.target_floor = Floor::GROUND;
            }
        }
    }
}
