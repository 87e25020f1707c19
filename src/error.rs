//! Error types for fleet-rental

use thiserror::Error;

use crate::domain::model::VehicleId;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Business failures of the rental desk.
///
/// Every variant is recoverable by the caller; the transaction engine never
/// mutates fleet or ledger state on a failure path, with the single exception
/// of `SevereDamage`, which releases the vehicle while still reporting the
/// return as failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RentalError {
    #[error("Vehicle not found: id={0}")]
    VehicleNotFound(VehicleId),

    #[error("Vehicle not available (already rented): id={0}")]
    VehicleUnavailable(VehicleId),

    #[error("Requested load {requested_kg} kg exceeds max load {max_kg} kg")]
    Overload { requested_kg: f64, max_kg: f64 },

    #[error("Battery too low to start: {charge_kwh} kWh, minimum {required_kwh} kWh")]
    BatteryLow { charge_kwh: f64, required_kwh: f64 },

    #[error("Vehicle not rented: id={0}")]
    NotRented(VehicleId),

    #[error("Renter mismatch for vehicle id={id}: rented by {expected}")]
    RenterMismatch { id: VehicleId, expected: String },

    #[error("Severe damage reported on return of vehicle id={0}")]
    SevereDamage(VehicleId),

    #[error("Vehicle id={0} is not electric")]
    NotElectric(VehicleId),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rental error: {0}")]
    Rental(#[from] RentalError),

    #[error("Fleet file error: {0}")]
    FleetFile(String),
}

pub type Result<T> = std::result::Result<T, Error>;
