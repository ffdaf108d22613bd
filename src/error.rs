//! Failure kinds reported by the registry core.
//!
//! Every variant is a recoverable, caller-visible condition. Operations that
//! return one of these leave the registry exactly as it was before the call.

use crate::plate::Plate;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkshopError {
    #[error("invalid plate '{0}': expected four digits followed by three consonants (e.g. 1234BCD)")]
    InvalidFormat(String),

    #[error("the workshop is full ({capacity} vehicles)")]
    RegistryFull { capacity: usize },

    #[error("vehicle {plate} already has the maximum of {capacity} repairs")]
    RepairListFull { plate: Plate, capacity: usize },

    #[error("vehicle {0} is not in the workshop")]
    NotFound(Plate),

    #[error("vehicle {0} is already in the workshop")]
    Duplicate(Plate),
}

pub type Result<T, E = WorkshopError> = std::result::Result<T, E>;
