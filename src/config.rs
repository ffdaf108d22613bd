//! Capacity configuration for a workshop session.
//!
//! The binary fills this from command-line flags with environment fallbacks
//! (`WORKSHOP_MAX_VEHICLES`, `WORKSHOP_MAX_REPAIRS`); library callers and
//! tests use [`WorkshopConfig::default`].

use crate::registry::Registry;
use anyhow::{Result, bail};

/// Vehicles the workshop can hold at once.
pub const MAX_VEHICLES: usize = 5;
/// Repairs recorded per vehicle.
pub const MAX_REPAIRS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkshopConfig {
    pub max_vehicles: usize,
    pub max_repairs: usize,
}

impl Default for WorkshopConfig {
    fn default() -> Self {
        Self {
            max_vehicles: MAX_VEHICLES,
            max_repairs: MAX_REPAIRS,
        }
    }
}

impl WorkshopConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_vehicles == 0 {
            bail!("max_vehicles must be at least 1");
        }
        if self.max_repairs == 0 {
            bail!("max_repairs must be at least 1");
        }
        Ok(())
    }

    /// Validate the capacities and create an empty registry with them.
    pub fn build_registry(&self) -> Result<Registry> {
        self.validate()?;
        Ok(Registry::with_capacity(self.max_vehicles, self.max_repairs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_workshop_limits() {
        let registry = WorkshopConfig::default().build_registry().unwrap();
        assert_eq!(registry.capacity(), 5);
        assert_eq!(registry.max_repairs(), 3);
    }

    #[test]
    fn zero_capacities_are_rejected() {
        let err = WorkshopConfig {
            max_vehicles: 0,
            max_repairs: 3,
        }
        .build_registry()
        .expect_err("zero vehicles");
        assert!(err.to_string().contains("max_vehicles"));

        let err = WorkshopConfig {
            max_vehicles: 5,
            max_repairs: 0,
        }
        .validate()
        .expect_err("zero repairs");
        assert!(err.to_string().contains("max_repairs"));
    }
}
