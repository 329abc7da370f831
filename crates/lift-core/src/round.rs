//! Simulation time model.
//!
//! Time is a monotonically increasing `Round` counter.  One round is one
//! full pass through the engine's five stages; there is no mapping to wall
//! time because the simulation makes no real-time claims.  Using an integer
//! round as the canonical time unit keeps all schedule arithmetic exact and
//! comparisons O(1).

use std::fmt;

/// An absolute simulation round counter, starting at 0.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round(pub u64);

impl Round {
    pub const ZERO: Round = Round(0);

    /// Return the round `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Round {
        Round(self.0 + n)
    }

    /// Advance to the next round.
    #[inline]
    pub fn advance(&mut self) {
        self.0 += 1;
    }
}

impl std::ops::Add<u64> for Round {
    type Output = Round;
    #[inline]
    fn add(self, rhs: u64) -> Round {
        Round(self.0 + rhs)
    }
}

impl std::ops::Sub for Round {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Round) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}
