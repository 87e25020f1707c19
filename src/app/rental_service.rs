//! Rental/return transaction engine
//!
//! Validates each request against the fleet registry and rental ledger,
//! prices it, and only then mutates state. Failures are ordered hard gates:
//! the first one aborts the transaction with no partial mutation. The single
//! exception is the severe-damage return path, which releases the vehicle
//! while still reporting the return as failed.
//!
//! Every transaction outcome, success or failure, writes exactly one
//! activity-log line before returning to the caller.

use chrono::Duration;

use crate::constants::MINOR_DAMAGE_FEE;
use crate::domain::model::{RentalRecord, Vehicle, VehicleId};
use crate::domain::service::{damage, penalty, DamageSeverity};
use crate::error::RentalError;
use crate::infrastructure::{ActivityLog, Clock};
use crate::store::{Fleet, Ledger};

/// Per-vehicle rental state machine:
/// `Available → (rent ok) → Rented → (return ok | severe damage) → Available`.
pub struct RentalService<C: Clock> {
    fleet: Fleet,
    ledger: Ledger,
    log: ActivityLog,
    clock: C,
}

struct ReturnBreakdown {
    base: f64,
    penalty: f64,
}

impl<C: Clock> RentalService<C> {
    pub fn new(log: ActivityLog, clock: C) -> Self {
        Self {
            fleet: Fleet::new(),
            ledger: Ledger::new(),
            log,
            clock,
        }
    }

    /// Register a clone of the given vehicle template
    pub fn add_vehicle(&mut self, template: &Vehicle) {
        self.fleet.add(template);
    }

    /// Fleet descriptions in insertion order, annotated with rental status
    pub fn list_fleet(&self) -> Vec<String> {
        self.fleet.list()
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Rent a vehicle to `renter_id` for `days`.
    ///
    /// `load_kg` only matters for trucks: it is validated against the max
    /// load, priced into the cost, and committed to the ledger so the return
    /// can recompute the same formula. Returns the computed cost.
    pub fn rent(
        &mut self,
        renter_id: &str,
        vehicle_id: VehicleId,
        days: u32,
        load_kg: f64,
    ) -> Result<f64, RentalError> {
        let outcome = self.try_rent(renter_id, vehicle_id, days, load_kg);
        match &outcome {
            Ok(cost) => self.log.log(&format!(
                "Rented vehicle id={} to renter={} for {} days; cost={}",
                vehicle_id, renter_id, days, cost
            )),
            Err(err) => self
                .log
                .log(&format!("Rent failed for vehicle id={}: {}", vehicle_id, err)),
        }
        outcome
    }

    fn try_rent(
        &mut self,
        renter_id: &str,
        vehicle_id: VehicleId,
        days: u32,
        load_kg: f64,
    ) -> Result<f64, RentalError> {
        let now = self.clock.now();
        let vehicle = self
            .fleet
            .find_mut(vehicle_id)
            .ok_or(RentalError::VehicleNotFound(vehicle_id))?;

        if vehicle.rented {
            return Err(RentalError::VehicleUnavailable(vehicle_id));
        }

        let cost = match vehicle.max_load_kg() {
            Some(max_kg) => {
                if load_kg > max_kg {
                    return Err(RentalError::Overload {
                        requested_kg: load_kg,
                        max_kg,
                    });
                }
                vehicle.rental_cost_with_load(days, load_kg)
            }
            None => vehicle.rental_cost(days),
        };

        // Start precondition runs after costing but before any mutation, so
        // a BatteryLow abort leaves flag and ledger untouched.
        vehicle.check_start()?;

        vehicle.rented = true;
        let committed_load = vehicle.is_truck().then_some(load_kg);
        let due_at = now + Duration::days(i64::from(days));
        self.ledger
            .open(vehicle_id, RentalRecord::new(renter_id, due_at, committed_load));

        Ok(cost)
    }

    /// Return a rented vehicle.
    ///
    /// Base cost is recomputed from `actual_days` (and, for trucks, the load
    /// committed at rental time); late and damage penalties are added on
    /// top. Returns the grand total.
    pub fn return_vehicle(
        &mut self,
        renter_id: &str,
        vehicle_id: VehicleId,
        actual_days: u32,
        damaged: bool,
    ) -> Result<f64, RentalError> {
        let outcome = self.try_return(renter_id, vehicle_id, actual_days, damaged);
        match &outcome {
            Ok(breakdown) => self.log.log(&format!(
                "Vehicle id={} returned by {}. Base={} Penalty={} Total={}",
                vehicle_id,
                renter_id,
                breakdown.base,
                breakdown.penalty,
                breakdown.base + breakdown.penalty
            )),
            Err(err) => self.log.log(&format!(
                "Return failed for vehicle id={}: {}",
                vehicle_id, err
            )),
        }
        outcome.map(|b| b.base + b.penalty)
    }

    fn try_return(
        &mut self,
        renter_id: &str,
        vehicle_id: VehicleId,
        actual_days: u32,
        damaged: bool,
    ) -> Result<ReturnBreakdown, RentalError> {
        let now = self.clock.now();
        let vehicle = self
            .fleet
            .find_mut(vehicle_id)
            .ok_or(RentalError::VehicleNotFound(vehicle_id))?;
        let record = self
            .ledger
            .get(vehicle_id)
            .ok_or(RentalError::NotRented(vehicle_id))?;

        if record.renter_id != renter_id {
            return Err(RentalError::RenterMismatch {
                id: vehicle_id,
                expected: record.renter_id.clone(),
            });
        }

        let base = match record.load_kg {
            Some(load_kg) => vehicle.rental_cost_with_load(actual_days, load_kg),
            None => vehicle.rental_cost(actual_days),
        };

        let mut penalty = penalty::late_penalty(record, now);

        if damaged {
            match damage::assess(vehicle_id) {
                DamageSeverity::Severe => {
                    // Terminal failure that still completes the return: the
                    // vehicle goes back to Available while the caller sees
                    // the error.
                    vehicle.rented = false;
                    self.ledger.close(vehicle_id);
                    return Err(RentalError::SevereDamage(vehicle_id));
                }
                DamageSeverity::Minor => penalty += MINOR_DAMAGE_FEE,
            }
        }

        vehicle.rented = false;
        self.ledger.close(vehicle_id);

        Ok(ReturnBreakdown { base, penalty })
    }

    /// Add charge to an electric car's battery.
    ///
    /// Works whether or not the vehicle is currently rented. Returns the new
    /// charge level.
    pub fn charge(&mut self, vehicle_id: VehicleId, kwh: f64) -> Result<f64, RentalError> {
        let outcome = self.try_charge(vehicle_id, kwh);
        match &outcome {
            Ok(charge_kwh) => self.log.log(&format!(
                "Charged EV id={} +{} kWh (now {} kWh)",
                vehicle_id, kwh, charge_kwh
            )),
            Err(err) => self.log.log(&format!(
                "Charge failed for vehicle id={}: {}",
                vehicle_id, err
            )),
        }
        outcome
    }

    fn try_charge(&mut self, vehicle_id: VehicleId, kwh: f64) -> Result<f64, RentalError> {
        let vehicle = self
            .fleet
            .find_mut(vehicle_id)
            .ok_or(RentalError::VehicleNotFound(vehicle_id))?;
        vehicle.charge_battery(kwh)
    }
}
