//! basic — smallest example for the liftsim elevator simulation.
//!
//! Runs two configurations of the same six-floor, two-elevator building:
//! first with round-robin arrivals and the end-to-end sweep policy, then
//! with a small embedded CSV schedule and the furthest-floor policy.

use std::io::Cursor;

use anyhow::Result;

use lift_arrivals::{FileArrivals, RoundRobinArrivals};
use lift_core::{ElevatorId, PersonId, Round, SimConfig};
use lift_policy::{EndToEndLoop, FurthestFloor};
use lift_sim::{SimObserver, Simulation};

// ── Constants ─────────────────────────────────────────────────────────────────

const NUM_FLOORS:        u32   = 6;
const NUM_ELEVATORS:     usize = 2;
const ELEVATOR_CAPACITY: usize = 2;
const NUM_ROUNDS:        u64   = 15;

// ── Arrival CSV ───────────────────────────────────────────────────────────────

// round, start_1, target_1, start_2, target_2, …
const ARRIVALS_CSV: &str = "\
0,1,4,5,3\n\
2,2,6\n\
4,6,1,6,2\n\
8,3,5,1,6,4,1\n\
11,5,2\n\
";

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints each boarding as it happens — the console stand-in for a renderer.
struct BoardingPrinter;

impl SimObserver for BoardingPrinter {
    fn on_round_start(&mut self, round: Round) {
        println!("── {round} ──");
    }

    fn on_boarding(&mut self, person: PersonId, elevator: ElevatorId) {
        println!("  {person} boarded {elevator}");
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = SimConfig {
        num_floors:        NUM_FLOORS,
        num_elevators:     NUM_ELEVATORS,
        elevator_capacity: ELEVATOR_CAPACITY,
    };

    // Run 1: one arrival per round at the ground floor, elevators sweeping
    // bottom-to-top forever.
    let generator = RoundRobinArrivals::new(config.max_floor());
    let mut sim = Simulation::new(config.clone(), generator, EndToEndLoop)?;
    let stats = sim.run(NUM_ROUNDS, &mut BoardingPrinter)?;
    println!("round-robin + end-to-end: {stats}\n");

    // Run 2: the embedded schedule with demand-chasing elevators.
    let generator = FileArrivals::from_reader(Cursor::new(ARRIVALS_CSV), config.max_floor())?;
    let mut sim = Simulation::new(config, generator, FurthestFloor)?;
    let stats = sim.run(NUM_ROUNDS, &mut BoardingPrinter)?;
    println!("file schedule + furthest-floor: {stats}");

    Ok(())
}
