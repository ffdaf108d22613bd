//! Fixed-capacity slot storage for vehicle records.
//!
//! Slots are allocated once at construction and never grow. New records take
//! the first empty slot, and every removal is followed by a compaction sweep,
//! so occupied slots always form a prefix and slot order is check-in order.

use crate::config::{MAX_REPAIRS, MAX_VEHICLES};
use crate::error::{Result, WorkshopError};
use crate::plate::Plate;
use crate::registry::model::VehicleRecord;
use serde::Serialize;

#[derive(Clone, Debug)]
/// In-memory store of the vehicles currently in the workshop.
pub struct Registry {
    slots: Vec<Option<VehicleRecord>>,
    max_repairs: usize,
}

#[derive(Debug, Serialize)]
/// Serializable view of the registry in slot order.
pub struct RegistrySnapshot<'a> {
    pub max_vehicles: usize,
    pub max_repairs: usize,
    pub vehicle_count: usize,
    pub vehicles: Vec<&'a VehicleRecord>,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_capacity(MAX_VEHICLES, MAX_REPAIRS)
    }

    pub fn with_capacity(max_vehicles: usize, max_repairs: usize) -> Self {
        Self {
            slots: vec![None; max_vehicles],
            max_repairs,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Repair capacity given to every record created by [`Registry::insert`].
    pub fn max_repairs(&self) -> usize {
        self.max_repairs
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn vehicle_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn exists(&self, plate: &Plate) -> bool {
        self.position(plate).is_some()
    }

    /// Slot index holding `plate`, scanning in slot order.
    pub fn position(&self, plate: &Plate) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|record| record.plate() == plate))
    }

    pub fn find(&self, plate: &Plate) -> Option<&VehicleRecord> {
        self.vehicles().find(|record| record.plate() == plate)
    }

    /// Read a single slot; `None` for empty or out-of-range slots.
    pub fn slot(&self, index: usize) -> Option<&VehicleRecord> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Occupied records in slot order.
    pub fn vehicles(&self) -> impl Iterator<Item = &VehicleRecord> {
        self.slots.iter().flatten()
    }

    /// Check a vehicle in and return the slot it landed in.
    ///
    /// Rejects a plate that is already present with `Duplicate` and a full
    /// registry with `RegistryFull`; neither failure changes any slot.
    pub fn insert(
        &mut self,
        plate: Plate,
        make: impl Into<String>,
        model: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<usize> {
        if self.exists(&plate) {
            return Err(WorkshopError::Duplicate(plate));
        }
        let index = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(WorkshopError::RegistryFull {
                capacity: self.capacity(),
            })?;
        self.slots[index] = Some(VehicleRecord::new(
            plate,
            make,
            model,
            color,
            self.max_repairs,
        ));
        Ok(index)
    }

    /// Overwrite the stored record that carries the same plate as `record`.
    pub fn update(&mut self, record: VehicleRecord) -> Result<()> {
        let index = self
            .position(record.plate())
            .ok_or_else(|| WorkshopError::NotFound(record.plate().clone()))?;
        self.slots[index] = Some(record);
        Ok(())
    }

    /// Append a repair directly to the stored record for `plate`.
    pub fn add_repair(&mut self, plate: &Plate, description: impl Into<String>) -> Result<usize> {
        let record = self
            .slots
            .iter_mut()
            .flatten()
            .find(|record| record.plate() == plate)
            .ok_or_else(|| WorkshopError::NotFound(plate.clone()))?;
        record.add_repair(description)
    }

    /// Take the vehicle out of the workshop and close the gap it leaves.
    pub fn remove(&mut self, plate: &Plate) -> Result<VehicleRecord> {
        let removed = self
            .slots
            .iter_mut()
            .find(|slot| slot.as_ref().is_some_and(|record| record.plate() == plate))
            .and_then(Option::take)
            .ok_or_else(|| WorkshopError::NotFound(plate.clone()))?;
        self.compact();
        Ok(removed)
    }

    /// One left-to-right pass moving each occupied slot into an empty
    /// predecessor.
    ///
    /// A single pass closes a single gap, which is all a removal can open.
    pub fn compact(&mut self) {
        for i in 1..self.slots.len() {
            if self.slots[i - 1].is_none() && self.slots[i].is_some() {
                self.slots.swap(i - 1, i);
            }
        }
    }

    pub fn snapshot(&self) -> RegistrySnapshot<'_> {
        RegistrySnapshot {
            max_vehicles: self.capacity(),
            max_repairs: self.max_repairs,
            vehicle_count: self.vehicle_count(),
            vehicles: self.vehicles().collect(),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
