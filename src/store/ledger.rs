//! Rental ledger: active rentals keyed by vehicle id

use std::collections::HashMap;

use crate::domain::model::{RentalRecord, VehicleId};

/// Mapping from vehicle id to active-rental metadata.
///
/// At most one record per id at any time: opening a rental for an id that
/// already has one replaces nothing — the transaction engine gates on the
/// vehicle's availability before inserting.
#[derive(Debug, Default)]
pub struct Ledger {
    rentals: HashMap<VehicleId, RentalRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new active rental
    pub fn open(&mut self, id: VehicleId, record: RentalRecord) {
        self.rentals.insert(id, record);
    }

    /// Remove and return the active rental for a vehicle
    pub fn close(&mut self, id: VehicleId) -> Option<RentalRecord> {
        self.rentals.remove(&id)
    }

    /// Active rental for a vehicle, if any
    pub fn get(&self, id: VehicleId) -> Option<&RentalRecord> {
        self.rentals.get(&id)
    }

    pub fn contains(&self, id: VehicleId) -> bool {
        self.rentals.contains_key(&id)
    }

    /// Number of active rentals
    pub fn count(&self) -> usize {
        self.rentals.len()
    }
}
