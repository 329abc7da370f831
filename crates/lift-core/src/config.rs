//! Validated simulation parameters.

use crate::{ConfigError, Floor};

/// Static configuration for one simulation run.
///
/// Validation is fail-fast: [`SimConfig::validate`] is called by the engine
/// builder before any state is constructed, so a bad configuration never
/// produces a partially initialized simulation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of floors in the building.  Must be ≥ 2.
    pub num_floors: u32,
    /// Number of elevators.  Must be ≥ 1.
    pub num_elevators: usize,
    /// Passenger capacity of every elevator.  Must be ≥ 1.
    pub elevator_capacity: usize,
}

impl SimConfig {
    /// Check all configuration bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_floors < 2 {
            return Err(ConfigError::TooFewFloors { got: self.num_floors });
        }
        if self.num_elevators < 1 {
            return Err(ConfigError::NoElevators);
        }
        if self.elevator_capacity < 1 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }

    /// The highest floor in the building.
    #[inline]
    pub fn max_floor(&self) -> Floor {
        Floor(self.num_floors)
    }
}
