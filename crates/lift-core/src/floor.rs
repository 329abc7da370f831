//! The 1-based building floor.
//!
//! Floors are numbered `1..=num_floors`; there is no floor 0.  `Floor` is a
//! plain newtype rather than a dense index so that off-by-one conversion to
//! queue indices happens in exactly one place ([`Floor::index`]).

use std::fmt;

/// A building floor, numbered from 1 (ground) upward.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u32);

impl Floor {
    /// The ground floor, where every elevator starts.
    pub const GROUND: Floor = Floor(1);

    /// Zero-based index into per-floor storage (`floor 1 → 0`).
    ///
    /// # Panics
    /// Panics in debug mode if called on floor 0, which never exists.
    #[inline]
    pub fn index(self) -> usize {
        debug_assert!(self.0 >= 1, "floor numbering starts at 1");
        (self.0 - 1) as usize
    }

    /// Whether this floor exists in a building with `max_floor` floors.
    #[inline]
    pub fn in_building(self, max_floor: Floor) -> bool {
        self.0 >= 1 && self <= max_floor
    }

    /// Absolute distance in floors between `self` and `other`.
    #[inline]
    pub fn distance_to(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// The floor one step from `self` toward `target`.
    ///
    /// Returns `self` when already at `target`.  This is the only movement
    /// primitive in the simulation: elevators close multi-floor gaps one
    /// round at a time.
    #[inline]
    pub fn step_toward(self, target: Floor) -> Floor {
        match self.0.cmp(&target.0) {
            std::cmp::Ordering::Less    => Floor(self.0 + 1),
            std::cmp::Ordering::Greater => Floor(self.0 - 1),
            std::cmp::Ordering::Equal   => self,
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "floor {}", self.0)
    }
}
