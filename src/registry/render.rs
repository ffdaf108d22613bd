//! Plain-text rendering of records and of the whole registry.

use crate::registry::model::VehicleRecord;
use crate::registry::slots::Registry;
use std::fmt;

impl fmt::Display for VehicleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Plate: {}", self.plate())?;
        writeln!(f, "Make: {}", self.make())?;
        writeln!(f, "Model: {}", self.model())?;
        writeln!(f, "Color: {}", self.color())?;
        if self.repairs().is_empty() {
            return writeln!(f, "This vehicle has no repairs");
        }
        writeln!(f, "Repairs:")?;
        for (idx, repair) in self.repairs().iter().enumerate() {
            writeln!(f, "  Repair {}: {}", idx + 1, repair)?;
        }
        Ok(())
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vehicle_count() == 0 {
            return writeln!(f, "There are no vehicles in the workshop");
        }
        for idx in 0..self.capacity() {
            if let Some(record) = self.slot(idx) {
                writeln!(f)?;
                writeln!(f, "Vehicle {} in the workshop:", idx + 1)?;
                write!(f, "{record}")?;
            }
        }
        Ok(())
    }
}
