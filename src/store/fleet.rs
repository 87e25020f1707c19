//! Fleet registry for owned vehicles

use crate::domain::model::{Vehicle, VehicleId};

/// Ordered registry of exclusively-owned vehicles.
///
/// The registry is the sole owner of every instance; callers register a
/// template and the registry keeps an independent clone. Identifier
/// collisions are not deduplicated — callers must supply unique ids.
#[derive(Debug, Default)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a clone of the given vehicle template
    pub fn add(&mut self, template: &Vehicle) {
        self.vehicles.push(template.clone());
    }

    /// Find a vehicle by id
    pub fn find(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Find a vehicle by id for mutation within one transaction
    pub fn find_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.iter_mut().find(|v| v.id == id)
    }

    /// Descriptions in insertion order, annotated with rental status
    pub fn list(&self) -> Vec<String> {
        self.vehicles
            .iter()
            .map(|v| {
                if v.rented {
                    format!("{} [RENTED]", v.describe())
                } else {
                    v.describe()
                }
            })
            .collect()
    }

    /// All vehicles in insertion order
    pub fn all(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
