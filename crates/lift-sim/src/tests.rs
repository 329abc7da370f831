//! Integration tests for lift-sim.

use std::collections::HashSet;
use std::io::Cursor;

use lift_arrivals::{ArrivalGenerator, Arrivals, FileArrivals, RoundRobinArrivals};
use lift_core::{ElevatorId, Floor, PersonId, Round, SimConfig};
use lift_entities::{Elevator, Person, WaitingFloors};
use lift_policy::{EndToEndLoop, FurthestFloor, Hold, MovingAlgorithm};

use crate::{NoopObserver, RunStats, SimError, SimObserver, Simulation};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(floors: u32, elevators: usize, capacity: usize) -> SimConfig {
    SimConfig {
        num_floors:        floors,
        num_elevators:     elevators,
        elevator_capacity: capacity,
    }
}

/// A generator with no arrivals at all.
fn no_arrivals(max_floor: Floor) -> FileArrivals {
    FileArrivals::from_reader(Cursor::new(""), max_floor).unwrap()
}

/// A generator replaying the given CSV rows.
fn scripted(csv: &str, max_floor: Floor) -> FileArrivals {
    FileArrivals::from_reader(Cursor::new(csv), max_floor).unwrap()
}

fn rider(id: u32, start: u32, target: u32) -> Person {
    Person::new(PersonId(id), Floor(start), Floor(target))
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn elevators_start_idle_at_ground() {
        let cfg = config(6, 3, 2);
        let sim = Simulation::new(cfg.clone(), no_arrivals(cfg.max_floor()), Hold).unwrap();
        assert_eq!(sim.elevators().len(), 3);
        for e in sim.elevators() {
            assert_eq!(e.current_floor, Floor(1));
            assert!(e.is_idle());
            assert!(e.passengers.is_empty());
        }
        assert_eq!(sim.waiting().total_waiting(), 0);
        assert_eq!(sim.round(), Round::ZERO);
    }

    #[test]
    fn bad_config_rejected_before_any_state_exists() {
        let cfg = config(1, 2, 2);
        let result = Simulation::new(cfg, no_arrivals(Floor(2)), Hold);
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn zero_rounds_rejected() {
        let cfg = config(6, 1, 1);
        let mut sim = Simulation::new(cfg.clone(), no_arrivals(cfg.max_floor()), Hold).unwrap();
        assert!(matches!(sim.run(0, &mut NoopObserver), Err(SimError::ZeroRounds)));
    }

    #[test]
    fn second_run_rejected() {
        let cfg = config(6, 1, 1);
        let mut sim = Simulation::new(cfg.clone(), no_arrivals(cfg.max_floor()), Hold).unwrap();
        sim.run(3, &mut NoopObserver).unwrap();
        assert!(matches!(sim.run(1, &mut NoopObserver), Err(SimError::AlreadyRan)));
    }
}

// ── Boarding rules ────────────────────────────────────────────────────────────

#[cfg(test)]
mod boarding {
    use super::*;

    #[test]
    fn full_elevator_refuses_boarding() {
        // Capacity-1 car already carrying someone; an eligible waiter at its
        // floor must stay on the floor (fullness == 1.0 blocks).
        let cfg = config(6, 1, 1);
        let mut sim = Simulation::new(cfg.clone(), no_arrivals(cfg.max_floor()), Hold).unwrap();
        sim.elevators[0].board(rider(0, 1, 5)).unwrap();
        sim.waiting.push(Floor(1), rider(1, 1, 3)).unwrap();

        sim.run(1, &mut NoopObserver).unwrap();

        assert_eq!(sim.elevators()[0].passengers.len(), 1);
        assert_eq!(sim.elevators()[0].passengers[0].id, PersonId(0));
        assert_eq!(sim.waiting().total_waiting(), 1);
    }

    #[test]
    fn full_elevator_skipped_but_next_one_boards() {
        let cfg = config(6, 2, 1);
        let mut sim = Simulation::new(cfg.clone(), no_arrivals(cfg.max_floor()), Hold).unwrap();
        sim.elevators[0].board(rider(0, 1, 5)).unwrap();
        sim.waiting.push(Floor(1), rider(1, 1, 3)).unwrap();

        sim.run(1, &mut NoopObserver).unwrap();

        assert_eq!(sim.elevators()[0].passengers.len(), 1);
        assert_eq!(sim.elevators()[1].passengers.len(), 1);
        assert_eq!(sim.elevators()[1].passengers[0].id, PersonId(1));
        assert_eq!(sim.waiting().total_waiting(), 0);
    }

    #[test]
    fn direction_incompatible_target_blocks_boarding() {
        // Car at floor 1 already committed to floor 4; a rider for floor 2
        // would be carried past their stop (4 ≤ 2 fails), so they wait.
        let cfg = config(6, 1, 2);
        let mut sim = Simulation::new(cfg.clone(), no_arrivals(cfg.max_floor()), Hold).unwrap();
        sim.elevators[0].target_floor = Floor(4);
        sim.waiting.push(Floor(1), rider(0, 1, 2)).unwrap();
        sim.waiting.push(Floor(1), rider(1, 1, 5)).unwrap();

        sim.run(1, &mut NoopObserver).unwrap();

        // Rider 1 (target 5 ≥ 4) boards; rider 0 stays behind.
        assert_eq!(sim.elevators()[0].passengers.len(), 1);
        assert_eq!(sim.elevators()[0].passengers[0].id, PersonId(1));
        assert!(sim.waiting().contains(Floor(1), PersonId(0)));
    }

    #[test]
    fn first_arrived_boards_first() {
        let cfg = config(6, 1, 1);
        let mut sim = Simulation::new(cfg.clone(), no_arrivals(cfg.max_floor()), Hold).unwrap();
        sim.waiting.push(Floor(1), rider(0, 1, 3)).unwrap();
        sim.waiting.push(Floor(1), rider(1, 1, 3)).unwrap();

        sim.run(1, &mut NoopObserver).unwrap();

        assert_eq!(sim.elevators()[0].passengers[0].id, PersonId(0));
        assert!(sim.waiting().contains(Floor(1), PersonId(1)));
    }
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod movement {
    use super::*;

    /// Policy that always targets one fixed floor.
    struct JumpTo(Floor);

    impl MovingAlgorithm for JumpTo {
        fn update_target_floors(
            &self,
            elevators: &mut [Elevator],
            _waiting:  &WaitingFloors,
            _max_floor: Floor,
        ) {
            for e in elevators {
                e.target_floor = self.0;
            }
        }
    }

    #[test]
    fn one_floor_per_round_regardless_of_gap() {
        let cfg = config(8, 1, 1);
        let mut sim = Simulation::new(cfg.clone(), no_arrivals(cfg.max_floor()), JumpTo(Floor(8))).unwrap();
        sim.run(3, &mut NoopObserver).unwrap();
        // Three rounds closed three floors of a seven-floor gap.
        assert_eq!(sim.elevators()[0].current_floor, Floor(4));
    }

    #[test]
    fn out_of_building_target_aborts_the_run() {
        let cfg = config(6, 1, 1);
        let mut sim = Simulation::new(cfg.clone(), no_arrivals(cfg.max_floor()), JumpTo(Floor(99))).unwrap();
        assert!(matches!(sim.run(1, &mut NoopObserver), Err(SimError::Invariant(_))));
    }
}

// ── Arrive stage ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod arrivals {
    use super::*;

    /// Buggy generator that re-emits the same person every round.
    struct RepeatPerson;

    impl ArrivalGenerator for RepeatPerson {
        fn generate(&mut self, _round: Round) -> Arrivals {
            let mut arrivals = Arrivals::new();
            arrivals.insert(Floor(2), vec![rider(7, 2, 4)]);
            arrivals
        }
    }

    #[test]
    fn duplicate_identity_appended_once() {
        let cfg = config(6, 1, 1);
        let mut sim = Simulation::new(cfg, RepeatPerson, Hold).unwrap();
        sim.run(3, &mut NoopObserver).unwrap();
        assert_eq!(sim.waiting().total_waiting(), 1);
        assert_eq!(sim.total_people(), 1);
    }

    /// Generator emitting a floor that does not exist.
    struct OffTheRoof;

    impl ArrivalGenerator for OffTheRoof {
        fn generate(&mut self, _round: Round) -> Arrivals {
            let mut arrivals = Arrivals::new();
            arrivals.insert(Floor(9), vec![rider(0, 9, 1)]);
            arrivals
        }
    }

    #[test]
    fn out_of_building_arrival_is_fatal() {
        let cfg = config(6, 1, 1);
        let mut sim = Simulation::new(cfg, OffTheRoof, Hold).unwrap();
        assert!(matches!(sim.run(1, &mut NoopObserver), Err(SimError::Invariant(_))));
    }

    #[test]
    fn round_robin_arrivals_reach_the_queues() {
        let cfg = config(4, 1, 1);
        let mut sim =
            Simulation::new(cfg.clone(), RoundRobinArrivals::new(cfg.max_floor()), Hold).unwrap();
        sim.run(3, &mut NoopObserver).unwrap();
        assert_eq!(sim.total_people(), 3);
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer {
    use super::*;

    #[derive(Default)]
    struct EventLog(Vec<String>);

    impl SimObserver for EventLog {
        fn on_round_start(&mut self, round: Round) {
            self.0.push(format!("start {round}"));
        }
        fn on_arrivals(&mut self, round: Round, arrivals: &Arrivals) {
            let count: usize = arrivals.values().map(Vec::len).sum();
            self.0.push(format!("arrivals {round} x{count}"));
        }
        fn on_boarding(&mut self, person: PersonId, elevator: ElevatorId) {
            self.0.push(format!("board {person} -> {elevator}"));
        }
        fn on_round_end(&mut self, round: Round) {
            self.0.push(format!("end {round}"));
        }
        fn on_run_end(&mut self, stats: &RunStats) {
            self.0.push(format!("done {}", stats.num_rounds));
        }
    }

    #[test]
    fn events_fire_in_stage_order() {
        let cfg = config(6, 1, 2);
        let mut sim =
            Simulation::new(cfg.clone(), scripted("0,1,4\n", cfg.max_floor()), EndToEndLoop).unwrap();
        let mut log = EventLog::default();
        sim.run(2, &mut log).unwrap();

        assert_eq!(
            log.0,
            vec![
                "start R0",
                "arrivals R0 x1",
                "board PersonId(0) -> ElevatorId(0)",
                "end R0",
                "start R1",
                "arrivals R1 x0",
                "end R1",
                "done 2",
            ]
        );
    }
}

// ── Full runs ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod full_runs {
    use super::*;

    #[test]
    fn single_delivery_with_furthest_floor() {
        // One rider, floor 1 → 3.  Boards at round 0, travels rounds 0–1,
        // disembarks at the start of round 2 with two rounds of wait.
        let cfg = config(6, 1, 2);
        let mut sim =
            Simulation::new(cfg.clone(), scripted("0,1,3\n", cfg.max_floor()), FurthestFloor).unwrap();
        let stats = sim.run(3, &mut NoopObserver).unwrap();

        assert_eq!(stats.total_people, 1);
        assert_eq!(stats.people_completed, 1);
        assert_eq!(stats.max_wait, 2);
        assert_eq!(stats.avg_wait, 2.0);
        assert_eq!(sim.completed()[0].id, PersonId(0));
        // Car went idle on the delivery floor afterwards.
        assert_eq!(sim.elevators()[0].current_floor, Floor(3));
        assert!(sim.elevators()[0].is_idle());
    }

    #[test]
    fn example_run_two_elevators_fifteen_rounds() {
        // The canonical example configuration: 6 floors, 2 elevators of
        // capacity 2, round-robin arrivals, end-to-end sweep, 15 rounds.
        let cfg = config(6, 2, 2);
        let mut sim = Simulation::new(
            cfg.clone(),
            RoundRobinArrivals::new(cfg.max_floor()),
            EndToEndLoop,
        )
        .unwrap();
        let stats = sim.run(15, &mut NoopObserver).unwrap();

        assert_eq!(stats.num_rounds, 15);
        assert_eq!(stats.total_people, 15);
        assert!(stats.people_completed <= stats.total_people);

        // Statistics reflect only completed people.
        assert_eq!(stats.people_completed, sim.completed().len());
        for p in sim.completed() {
            assert!(p.wait_time <= 15);
        }
    }

    #[test]
    fn person_partition_has_no_duplicates_or_overlaps() {
        let cfg = config(6, 2, 2);
        let mut sim = Simulation::new(
            cfg.clone(),
            RoundRobinArrivals::new(cfg.max_floor()),
            EndToEndLoop,
        )
        .unwrap();
        sim.run(15, &mut NoopObserver).unwrap();

        let mut seen = HashSet::new();
        let mut tracked = 0;
        for p in sim.completed() {
            assert!(seen.insert(p.id), "{} in two containers", p.id);
            tracked += 1;
        }
        for e in sim.elevators() {
            assert!(e.passengers.len() <= e.capacity);
            for p in &e.passengers {
                assert!(seen.insert(p.id), "{} in two containers", p.id);
                tracked += 1;
            }
        }
        for (_, queue) in sim.waiting().iter_floors() {
            for p in queue {
                assert!(seen.insert(p.id), "{} in two containers", p.id);
                tracked += 1;
            }
        }
        assert_eq!(tracked, sim.total_people());
    }

    #[test]
    fn identical_runs_produce_identical_statistics() {
        let run = || {
            let cfg = config(6, 2, 2);
            let mut sim = Simulation::new(
                cfg.clone(),
                scripted("0,1,4,5,3\n2,2,6\n5,6,1,6,2\n", cfg.max_floor()),
                FurthestFloor,
            )
            .unwrap();
            sim.run(20, &mut NoopObserver).unwrap()
        };
        assert_eq!(run(), run());
    }
}

// ── Statistics ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stats {
    use super::*;

    #[test]
    fn empty_run_yields_zeroed_waits() {
        let stats = RunStats::compute(5, 0, &[]);
        assert_eq!(stats.people_completed, 0);
        assert_eq!(stats.max_wait, 0);
        assert_eq!(stats.avg_wait, 0.0);
    }

    #[test]
    fn max_and_avg_over_completed_only() {
        let mut a = rider(0, 1, 3);
        a.wait_time = 4;
        let mut b = rider(1, 2, 5);
        b.wait_time = 7;
        let stats = RunStats::compute(10, 5, &[a, b]);
        assert_eq!(stats.total_people, 5);
        assert_eq!(stats.people_completed, 2);
        assert_eq!(stats.max_wait, 7);
        assert_eq!(stats.avg_wait, 5.5);
    }

    #[test]
    fn display_is_compact() {
        let stats = RunStats::compute(3, 1, &[]);
        assert_eq!(stats.to_string(), "3 rounds: 0/1 people delivered, max wait 0, avg wait 0.00");
    }
}
