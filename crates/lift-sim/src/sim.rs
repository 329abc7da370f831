//! The `Simulation` struct and its round loop.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use lift_arrivals::ArrivalGenerator;
use lift_core::{ElevatorId, Floor, PersonId, Round, SimConfig};
use lift_entities::{Elevator, EntityError, Person, WaitingFloors};
use lift_policy::MovingAlgorithm;

use crate::{RunStats, SimError, SimObserver, SimResult};

/// The main simulation runner.
///
/// `Simulation<G, M>` owns every elevator and the waiting set and drives the
/// five-stage round loop (see the crate docs).  It is one-shot: a single
/// [`run`][Self::run] call per instance, no reset.
///
/// Ownership of each [`Person`] follows the stages: a floor queue owns them
/// from Arrive until Board, one elevator from Board until Disembark, and the
/// completed list afterwards.  Transfers are by-value moves, so a person can
/// never be observed in two containers at once.
pub struct Simulation<G: ArrivalGenerator, M: MovingAlgorithm> {
    /// Validated configuration for this run.
    pub(crate) config: SimConfig,

    /// The current round, advanced at the end of each loop iteration.
    pub(crate) round: Round,

    /// All elevator cars, in boarding-priority order.
    pub(crate) elevators: Vec<Elevator>,

    /// Per-floor queues of people awaiting pickup.
    pub(crate) waiting: WaitingFloors,

    /// People delivered to their target floor, in delivery order.
    pub(crate) completed: Vec<Person>,

    generator: G,
    policy:    M,

    /// People ever introduced (appended to a floor queue).
    total_people: usize,
    ran:          bool,
}

impl<G: ArrivalGenerator, M: MovingAlgorithm> Simulation<G, M> {
    // ── Construction ──────────────────────────────────────────────────────

    /// Validate `config` and build a ready-to-run simulation.
    ///
    /// Fail-fast: a rejected configuration constructs nothing.  Every
    /// elevator starts empty and idle at the ground floor.
    pub fn new(config: SimConfig, generator: G, policy: M) -> SimResult<Self> {
        config.validate()?;

        let elevators = (0..config.num_elevators)
            .map(|i| Elevator::new(ElevatorId(i as u32), config.elevator_capacity))
            .collect();
        let waiting = WaitingFloors::new(config.num_floors);

        Ok(Simulation {
            config,
            round: Round::ZERO,
            elevators,
            waiting,
            completed: Vec::new(),
            generator,
            policy,
            total_people: 0,
            ran: false,
        })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation for `num_rounds` rounds and return its statistics.
    ///
    /// Calls observer hooks in stage order every round.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    ///
    /// Errors on a second call (`AlreadyRan`), on `num_rounds == 0`, and on
    /// any invariant violation mid-run — a violated invariant aborts the run
    /// rather than producing wrong statistics.
    pub fn run<O: SimObserver>(&mut self, num_rounds: u64, observer: &mut O) -> SimResult<RunStats> {
        if num_rounds == 0 {
            return Err(SimError::ZeroRounds);
        }
        if self.ran {
            return Err(SimError::AlreadyRan);
        }
        self.ran = true;

        info!(
            num_rounds,
            floors = self.config.num_floors,
            elevators = self.elevators.len(),
            capacity = self.config.elevator_capacity,
            "starting run"
        );

        for _ in 0..num_rounds {
            let round = self.round;
            observer.on_round_start(round);

            // Stage 1: passengers at their target floor leave.
            let delivered = self.disembark();

            // Stage 2: new arrivals join the floor queues.
            let arrived = self.arrive(round, observer)?;

            // Stage 3: waiting people board compatible elevators.
            let boarded = self.board()?;
            for &(person, elevator) in &boarded {
                observer.on_boarding(person, elevator);
            }

            // Stage 4: policy decides targets, then cars move one floor.
            self.move_elevators()?;

            // Stage 5: everyone still in the system waits one more round.
            self.tick_wait_times();

            self.check_invariants()?;
            debug!(%round, delivered, arrived, boarded = boarded.len(), "round complete");

            observer.on_round_end(round);
            self.round.advance();
        }

        let stats = RunStats::compute(num_rounds, self.total_people, &self.completed);
        info!(
            completed = stats.people_completed,
            total = stats.total_people,
            max_wait = stats.max_wait,
            "run finished"
        );
        observer.on_run_end(&stats);
        Ok(stats)
    }

    /// People ever introduced into the simulation so far.
    pub fn total_people(&self) -> usize {
        self.total_people
    }

    // ── Read-only state access ────────────────────────────────────────────
    //
    // The engine exclusively owns its collections while running; external
    // callers get shared views only.

    /// The configuration this simulation was built with.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The current round.
    pub fn round(&self) -> Round {
        self.round
    }

    /// All elevator cars, in boarding-priority order.
    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    /// The per-floor waiting queues.
    pub fn waiting(&self) -> &WaitingFloors {
        &self.waiting
    }

    /// People delivered to their target floor, in delivery order.
    pub fn completed(&self) -> &[Person] {
        &self.completed
    }

    // ── Stages ────────────────────────────────────────────────────────────

    /// Move every passenger whose target is their car's current floor into
    /// the completed list.  Returns how many were delivered.
    fn disembark(&mut self) -> usize {
        let before = self.completed.len();
        for elevator in &mut self.elevators {
            self.completed.extend(elevator.disembark_arrived());
        }
        self.completed.len() - before
    }

    /// Generate this round's arrivals and append them to the floor queues,
    /// preserving generator order.  Duplicate identities are skipped (the
    /// idempotence guard); an out-of-building floor is fatal.
    fn arrive<O: SimObserver>(&mut self, round: Round, observer: &mut O) -> SimResult<usize> {
        let arrivals = self.generator.generate(round);
        observer.on_arrivals(round, &arrivals);

        let mut appended = 0;
        for (floor, people) in arrivals {
            for person in people {
                match self.waiting.push(floor, person) {
                    Ok(()) => appended += 1,
                    Err(EntityError::DuplicatePerson { person, floor }) => {
                        warn!(%person, %floor, "duplicate arrival skipped");
                    }
                    Err(fatal) => return Err(fatal.into()),
                }
            }
        }
        self.total_people += appended;
        Ok(appended)
    }

    /// Board eligible waiters: floors ascending, elevators in order, queue
    /// FIFO.  A person boards iff the elevator is on their floor, has room,
    /// and is not headed past their target the wrong way
    /// (`elevator.target_floor <= person.target`).
    ///
    /// Each queue is drained into either the elevator or a rebuilt queue, so
    /// no sequence is mutated while being iterated.  Returns boarding events
    /// in boarding order.
    fn board(&mut self) -> SimResult<Vec<(PersonId, ElevatorId)>> {
        let mut boarded = Vec::new();

        for floor_num in 1..=self.config.num_floors {
            let floor = Floor(floor_num);
            for i in 0..self.elevators.len() {
                let elevator = &mut self.elevators[i];
                if elevator.current_floor != floor {
                    continue;
                }

                let queue = self.waiting.queue_mut(floor);
                let mut remaining = VecDeque::with_capacity(queue.len());
                while let Some(person) = queue.pop_front() {
                    let eligible = elevator.fullness() < 1.0
                        && elevator.current_floor == person.start
                        && elevator.target_floor <= person.target;
                    if eligible {
                        boarded.push((person.id, elevator.id));
                        elevator.board(person)?;
                    } else {
                        remaining.push_back(person);
                    }
                }
                *queue = remaining;
            }
        }
        Ok(boarded)
    }

    /// Let the policy rewrite targets, then advance every car at most one
    /// floor.  A policy that targets a floor outside the building is a fatal
    /// invariant violation.
    fn move_elevators(&mut self) -> SimResult<()> {
        let max_floor = self.config.max_floor();
        self.policy
            .update_target_floors(&mut self.elevators, &self.waiting, max_floor);

        for elevator in &mut self.elevators {
            if !elevator.target_floor.in_building(max_floor) {
                return Err(EntityError::FloorOutOfBounds {
                    floor: elevator.target_floor,
                    max_floor,
                }
                .into());
            }
            elevator.step();
        }
        Ok(())
    }

    /// One more round of waiting for everyone not yet delivered.  People
    /// disembarked earlier this round are already out of both containers,
    /// so they are naturally excluded.
    fn tick_wait_times(&mut self) {
        self.waiting.tick_wait_times();
        for elevator in &mut self.elevators {
            for person in &mut elevator.passengers {
                person.wait_time += 1;
            }
        }
    }

    // ── Invariants ────────────────────────────────────────────────────────

    /// Defensive end-of-round check.  `Elevator::board` already refuses
    /// overloads, so a failure here means engine or policy corruption.
    fn check_invariants(&self) -> SimResult<()> {
        let max_floor = self.config.max_floor();
        for elevator in &self.elevators {
            if elevator.passengers.len() > elevator.capacity {
                return Err(EntityError::OverCapacity {
                    elevator: elevator.id,
                    capacity: elevator.capacity,
                    person:   elevator.passengers[elevator.capacity].id,
                }
                .into());
            }
            if !elevator.current_floor.in_building(max_floor) {
                return Err(EntityError::FloorOutOfBounds {
                    floor: elevator.current_floor,
                    max_floor,
                }
                .into());
            }
        }
        Ok(())
    }
}
