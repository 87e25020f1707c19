//! Fee rates and battery thresholds used by the pricing rules

/// Load fee for trucks, per kg of committed load per rented day
pub const LOAD_FEE_PER_KG_DAY: f64 = 0.10;

/// Flat surcharge when an electric car is rented below the surcharge threshold
pub const LOW_BATTERY_SURCHARGE: f64 = 50.0;

/// Fraction of battery capacity below which the rental surcharge applies
pub const SURCHARGE_CHARGE_RATIO: f64 = 0.2;

/// Fraction of battery capacity required for an electric car to start
pub const START_CHARGE_RATIO: f64 = 0.1;

/// Penalty per charged late day on return
pub const LATE_FEE_PER_DAY: f64 = 20.0;

/// Flat fee added on return when minor damage is reported
pub const MINOR_DAMAGE_FEE: f64 = 100.0;
