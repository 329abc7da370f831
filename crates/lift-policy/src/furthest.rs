//! The furthest-floor policy.

use lift_core::Floor;
use lift_entities::{Elevator, WaitingFloors};

use crate::MovingAlgorithm;

/// Chase the furthest relevant floor.
///
/// Exactly one of three cases applies to each elevator:
///
/// 1. **Carrying passengers** — target the passenger target floor furthest
///    from the current floor.
/// 2. **Empty and idle** — target the furthest floor with someone waiting;
///    if nobody is waiting anywhere, stay idle (target := current floor).
/// 3. **Empty but mid-journey** — keep going; the target is unchanged.
///
/// Distance ties in cases 1 and 2 always resolve to the *lowest* floor.
pub struct FurthestFloor;

impl MovingAlgorithm for FurthestFloor {
    fn update_target_floors(
        &self,
        elevators: &mut [Elevator],
        waiting:   &WaitingFloors,
        _max_floor: Floor,
    ) {
        for elevator in elevators {
            if !elevator.passengers.is_empty() {
                // Case 1: chase the furthest passenger target.
                let candidates = elevator.passengers.iter().map(|p| p.target);
                if let Some(best) = furthest_lowest(elevator.current_floor, candidates) {
                    elevator.target_floor = best;
                }
            } else if elevator.is_idle() {
                // Case 2: chase the furthest occupied floor, or stay idle.
                let best = furthest_lowest(elevator.current_floor, waiting.occupied_floors());
                elevator.target_floor = best.unwrap_or(elevator.current_floor);
            }
            // Case 3: empty and moving — leave the target alone.
        }
    }
}

/// The floor furthest from `from`; ties go to the lowest floor.
fn furthest_lowest(from: Floor, candidates: impl Iterator<Item = Floor>) -> Option<Floor> {
    let mut best: Option<(u32, Floor)> = None;
    for floor in candidates {
        let distance = from.distance_to(floor);
        let better = match best {
            None => true,
            Some((d, f)) => distance > d || (distance == d && floor < f),
        };
        if better {
            best = Some((distance, floor));
        }
    }
    best.map(|(_, floor)| floor)
}
