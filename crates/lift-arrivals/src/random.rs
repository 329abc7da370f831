//! Seeded random arrival generator.

use lift_core::{Floor, PersonId, Round, SimRng};
use lift_entities::Person;

use crate::generator::{ArrivalGenerator, Arrivals};

/// Uniform random arrivals, reproducible per seed.
///
/// Each round draws `0..=max_per_round` people with uniform start and
/// target floors (start ≠ target).  All randomness comes from an owned
/// [`SimRng`], so the same seed and configuration replay the exact same
/// population — the determinism contract holds for random runs too.
pub struct RandomArrivals {
    max_floor:     Floor,
    max_per_round: u32,
    rng:           SimRng,
    next_id:       u32,
}

impl RandomArrivals {
    pub fn new(max_floor: Floor, max_per_round: u32, seed: u64) -> Self {
        debug_assert!(max_floor.0 >= 2);
        RandomArrivals {
            max_floor,
            max_per_round,
            rng: SimRng::new(seed),
            next_id: 0,
        }
    }
}

impl ArrivalGenerator for RandomArrivals {
    fn generate(&mut self, _round: Round) -> Arrivals {
        let mut arrivals = Arrivals::new();

        let count = self.rng.gen_range(0..=self.max_per_round);
        for _ in 0..count {
            let start = Floor(self.rng.gen_range(1..=self.max_floor.0));
            let target = loop {
                let t = Floor(self.rng.gen_range(1..=self.max_floor.0));
                if t != start {
                    break t;
                }
            };

            let person = Person::new(PersonId(self.next_id), start, target);
            self.next_id += 1;
            arrivals.entry(start).or_insert_with(Vec::new).push(person);
        }
        arrivals
    }
}
