//! Vehicle records and their bounded repair lists.
//!
//! A `RepairList` keeps a fixed number of entries and fills them from the
//! front, so the occupied entries always form a prefix. `VehicleRecord` pairs
//! the list with the plate and the descriptive attributes collected at
//! check-in.

use crate::error::{Result, WorkshopError};
use crate::plate::Plate;
use serde::{Serialize, Serializer};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Fixed-capacity, append-from-front list of repair descriptions.
pub struct RepairList {
    entries: Vec<Option<String>>,
}

impl RepairList {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Number of occupied entries, counted from the front up to the first gap.
    pub fn count(&self) -> usize {
        self.entries.iter().take_while(|entry| entry.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.count() == self.capacity()
    }

    /// True when the first entry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.first().is_none_or(Option::is_none)
    }

    /// Store `description` in the first empty entry and return its index.
    ///
    /// Returns `None` without touching the list when every entry is taken.
    pub fn push(&mut self, description: impl Into<String>) -> Option<usize> {
        let index = self.entries.iter().position(Option::is_none)?;
        self.entries[index] = Some(description.into());
        Some(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map_while(|entry| entry.as_deref())
    }
}

impl Serialize for RepairList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One vehicle checked into the workshop.
pub struct VehicleRecord {
    plate: Plate,
    make: String,
    model: String,
    color: String,
    repairs: RepairList,
}

impl VehicleRecord {
    pub fn new(
        plate: Plate,
        make: impl Into<String>,
        model: impl Into<String>,
        color: impl Into<String>,
        max_repairs: usize,
    ) -> Self {
        Self {
            plate,
            make: make.into(),
            model: model.into(),
            color: color.into(),
            repairs: RepairList::with_capacity(max_repairs),
        }
    }

    pub fn plate(&self) -> &Plate {
        &self.plate
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn repairs(&self) -> &RepairList {
        &self.repairs
    }

    pub fn repair_count(&self) -> usize {
        self.repairs.count()
    }

    /// Append a repair to this record.
    ///
    /// Only the record is changed; a copy taken out of the registry has to be
    /// written back with [`Registry::update`](crate::Registry::update).
    pub fn add_repair(&mut self, description: impl Into<String>) -> Result<usize> {
        self.repairs
            .push(description)
            .ok_or_else(|| WorkshopError::RepairListFull {
                plate: self.plate.clone(),
                capacity: self.repairs.capacity(),
            })
    }
}
