//! In-memory registry of the vehicles checked into a repair shop.
//!
//! The crate is split into a pure core and a thin console layer. The core
//! (`plate`, `registry`, `error`) validates plates, allocates vehicle and
//! repair slots under fixed capacities, and keeps occupied slots packed after
//! every removal; it never reads input or logs. The console layer (`shell`)
//! drives the core from any line-oriented input and is what the `workshop`
//! binary runs.

pub mod config;
pub mod error;
pub mod plate;
pub mod registry;
pub mod shell;

pub use config::{MAX_REPAIRS, MAX_VEHICLES, WorkshopConfig};
pub use error::WorkshopError;
pub use plate::Plate;
pub use registry::{Registry, RegistrySnapshot, RepairList, VehicleRecord};
pub use shell::{InputClosed, MenuChoice, Prompter, Shell, run_session};
