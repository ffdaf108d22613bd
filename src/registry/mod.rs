//! Vehicle registry core.
//!
//! `slots` owns the fixed-capacity storage and its CRUD operations, `model`
//! holds the per-vehicle record and repair list, and `render` provides the
//! text listings shown by the console. Nothing in this module reads input,
//! prints, or logs; callers get every outcome back as a `Result`.

pub mod model;
pub mod render;
pub mod slots;

pub use model::{RepairList, VehicleRecord};
pub use slots::{Registry, RegistrySnapshot};
