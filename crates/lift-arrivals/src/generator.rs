//! The `ArrivalGenerator` trait and the fixed-pattern generator.

use std::collections::BTreeMap;

use lift_core::{Floor, PersonId, Round};
use lift_entities::Person;

/// New arrivals for one round, keyed by start floor.
///
/// Only floors with at least one arrival appear — no empty vecs.  Order
/// within a floor is boarding priority: earlier entries board first on ties.
/// A `BTreeMap` keeps floor iteration ascending and deterministic.
pub type Arrivals = BTreeMap<Floor, Vec<Person>>;

/// Pluggable arrival policy.
///
/// Implementations must be deterministic given their construction inputs:
/// calling `generate` with the same round on two identically constructed
/// generators yields the same people with the same [`PersonId`]s.  The
/// engine relies on this for replayable runs and for its duplicate-identity
/// guard.
pub trait ArrivalGenerator {
    /// Return the new arrivals for `round`.
    fn generate(&mut self, round: Round) -> Arrivals;
}

// ── RoundRobinArrivals ────────────────────────────────────────────────────────

/// Deterministic generator: one person per round, starting at floor 1, with
/// the target cycling `2, 3, …, max_floor, 2, 3, …` across rounds.
///
/// The target is a pure function of the round: `2 + (round mod (max_floor − 1))`.
/// The person's ID is the round number, so identities are stable without any
/// internal counter.
pub struct RoundRobinArrivals {
    max_floor: Floor,
}

impl RoundRobinArrivals {
    /// `max_floor` must be at least 2 (a validated `SimConfig` guarantees it).
    pub fn new(max_floor: Floor) -> Self {
        debug_assert!(max_floor.0 >= 2);
        RoundRobinArrivals { max_floor }
    }
}

impl ArrivalGenerator for RoundRobinArrivals {
    fn generate(&mut self, round: Round) -> Arrivals {
        let target = Floor(2 + (round.0 % (self.max_floor.0 as u64 - 1)) as u32);
        // A truncating cast here would recycle IDs after 2^32 rounds and trip
        // the engine's duplicate guard; fail loudly instead.
        let id = u32::try_from(round.0).expect("round counter exceeds the PersonId space");
        let person = Person::new(PersonId(id), Floor::GROUND, target);

        let mut arrivals = Arrivals::new();
        arrivals.insert(Floor::GROUND, vec![person]);
        arrivals
    }
}
