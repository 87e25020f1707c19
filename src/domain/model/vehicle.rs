//! Vehicle model: closed variant set with per-variant cost rules

use serde::{Deserialize, Serialize};

use crate::constants::{
    LOAD_FEE_PER_KG_DAY, LOW_BATTERY_SURCHARGE, START_CHARGE_RATIO, SURCHARGE_CHARGE_RATIO,
};
use crate::error::RentalError;

/// Fleet-wide unique vehicle identifier, assigned by the caller
pub type VehicleId = u32;

/// Variant payload of a vehicle.
///
/// The set is closed: the transaction engine pattern-matches over it and
/// there is no open extension point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VehicleKind {
    /// Passenger car. Capacity is informational only and does not feed
    /// cost or precondition logic.
    Car { passenger_capacity: u32 },
    /// Truck with a maximum load capacity in kg
    Truck { max_load_kg: f64 },
    /// Electric car with battery capacity and current charge in kWh
    ElectricCar {
        battery_capacity_kwh: f64,
        charge_kwh: f64,
    },
}

impl VehicleKind {
    /// Display label for listings
    pub fn label(&self) -> &'static str {
        match self {
            VehicleKind::Car { .. } => "Car",
            VehicleKind::Truck { .. } => "Truck",
            VehicleKind::ElectricCar { .. } => "Electric",
        }
    }
}

/// A vehicle in the fleet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier, immutable after creation
    pub id: VehicleId,
    /// Display name (e.g., "Hino Dutro")
    pub name: String,
    /// Daily rental rate, non-negative
    pub daily_rate: f64,
    /// Availability flag: true iff a ledger entry exists for this id
    #[serde(default)]
    pub rented: bool,
    /// Variant payload
    #[serde(flatten)]
    pub kind: VehicleKind,
}

impl Vehicle {
    pub fn car(id: VehicleId, name: &str, daily_rate: f64, passenger_capacity: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            daily_rate,
            rented: false,
            kind: VehicleKind::Car { passenger_capacity },
        }
    }

    pub fn truck(id: VehicleId, name: &str, daily_rate: f64, max_load_kg: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            daily_rate,
            rented: false,
            kind: VehicleKind::Truck { max_load_kg },
        }
    }

    pub fn electric(
        id: VehicleId,
        name: &str,
        daily_rate: f64,
        battery_capacity_kwh: f64,
        charge_kwh: f64,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            daily_rate,
            rented: false,
            kind: VehicleKind::ElectricCar {
                battery_capacity_kwh,
                charge_kwh,
            },
        }
    }

    /// Rental cost for `days` without load context.
    ///
    /// For trucks this is the fallback formula only; the transaction engine
    /// always supplies the committed load via [`Vehicle::rental_cost_with_load`].
    pub fn rental_cost(&self, days: u32) -> f64 {
        let base = self.daily_rate * f64::from(days);
        match self.kind {
            VehicleKind::Car { .. } | VehicleKind::Truck { .. } => base,
            VehicleKind::ElectricCar {
                battery_capacity_kwh,
                charge_kwh,
            } => {
                let surcharge = if charge_kwh < SURCHARGE_CHARGE_RATIO * battery_capacity_kwh {
                    LOW_BATTERY_SURCHARGE
                } else {
                    0.0
                };
                base + surcharge
            }
        }
    }

    /// Rental cost for `days` with a committed truck load.
    ///
    /// Non-truck variants ignore the load and use the load-less formula.
    pub fn rental_cost_with_load(&self, days: u32, load_kg: f64) -> f64 {
        match self.kind {
            VehicleKind::Truck { .. } => {
                self.daily_rate * f64::from(days) + load_kg * LOAD_FEE_PER_KG_DAY * f64::from(days)
            }
            _ => self.rental_cost(days),
        }
    }

    /// Start precondition check.
    ///
    /// Only electric cars enforce one: the charge must be at least 10% of
    /// battery capacity. All other variants always start.
    pub fn check_start(&self) -> Result<(), RentalError> {
        match self.kind {
            VehicleKind::ElectricCar {
                battery_capacity_kwh,
                charge_kwh,
            } => {
                let required_kwh = START_CHARGE_RATIO * battery_capacity_kwh;
                if charge_kwh < required_kwh {
                    return Err(RentalError::BatteryLow {
                        charge_kwh,
                        required_kwh,
                    });
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Add `kwh` to an electric car's battery, clamped to capacity.
    ///
    /// Returns the new charge level, or `NotElectric` for other variants.
    pub fn charge_battery(&mut self, kwh: f64) -> Result<f64, RentalError> {
        match &mut self.kind {
            VehicleKind::ElectricCar {
                battery_capacity_kwh,
                charge_kwh,
            } => {
                *charge_kwh = (*charge_kwh + kwh).min(*battery_capacity_kwh);
                Ok(*charge_kwh)
            }
            _ => Err(RentalError::NotElectric(self.id)),
        }
    }

    /// One-line summary: id, name, rate, and variant-specific fields
    pub fn describe(&self) -> String {
        let head = format!("[{}] {} (rate {})", self.id, self.name, self.daily_rate);
        match self.kind {
            VehicleKind::Car { passenger_capacity } => {
                format!("{} Car cap={}", head, passenger_capacity)
            }
            VehicleKind::Truck { max_load_kg } => {
                format!("{} Truck maxLoadKg={}", head, max_load_kg)
            }
            VehicleKind::ElectricCar {
                battery_capacity_kwh,
                charge_kwh,
            } => format!(
                "{} Electric battery={}/{}",
                head, charge_kwh, battery_capacity_kwh
            ),
        }
    }

    pub fn is_truck(&self) -> bool {
        matches!(self.kind, VehicleKind::Truck { .. })
    }

    /// Maximum load capacity, trucks only
    pub fn max_load_kg(&self) -> Option<f64> {
        match self.kind {
            VehicleKind::Truck { max_load_kg } => Some(max_load_kg),
            _ => None,
        }
    }

    /// Current battery charge, electric cars only
    pub fn current_charge(&self) -> Option<f64> {
        match self.kind {
            VehicleKind::ElectricCar { charge_kwh, .. } => Some(charge_kwh),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_cost() {
        let car = Vehicle::car(1, "Toyota Avanza", 200.0, 7);
        assert_eq!(car.rental_cost(1), 200.0);
        assert_eq!(car.rental_cost(3), 600.0);
    }

    #[test]
    fn test_truck_cost_without_load() {
        let truck = Vehicle::truck(2, "Hino Dutro", 400.0, 1000.0);
        assert_eq!(truck.rental_cost(3), 1200.0);
    }

    #[test]
    fn test_truck_cost_with_load() {
        let truck = Vehicle::truck(2, "Hino Dutro", 400.0, 1000.0);
        // 400*2 + 500*0.10*2
        assert_eq!(truck.rental_cost_with_load(2, 500.0), 900.0);
    }

    #[test]
    fn test_load_ignored_for_non_truck() {
        let car = Vehicle::car(1, "Toyota Avanza", 200.0, 7);
        assert_eq!(car.rental_cost_with_load(2, 500.0), car.rental_cost(2));
    }

    #[test]
    fn test_electric_surcharge_below_threshold() {
        // 5 kWh of 75 is below the 20% threshold (15)
        let ev = Vehicle::electric(3, "Tesla Model 3", 350.0, 75.0, 5.0);
        assert_eq!(ev.rental_cost(2), 750.0);
    }

    #[test]
    fn test_electric_no_surcharge_at_threshold() {
        let ev = Vehicle::electric(3, "Tesla Model 3", 350.0, 75.0, 15.0);
        assert_eq!(ev.rental_cost(2), 700.0);
    }

    #[test]
    fn test_check_start_battery_low() {
        let ev = Vehicle::electric(3, "Tesla Model 3", 350.0, 75.0, 5.0);
        assert_eq!(
            ev.check_start(),
            Err(RentalError::BatteryLow {
                charge_kwh: 5.0,
                required_kwh: 7.5,
            })
        );
    }

    #[test]
    fn test_check_start_ok_at_threshold() {
        let ev = Vehicle::electric(3, "Tesla Model 3", 350.0, 75.0, 7.5);
        assert!(ev.check_start().is_ok());

        let car = Vehicle::car(1, "Toyota Avanza", 200.0, 7);
        assert!(car.check_start().is_ok());
    }

    #[test]
    fn test_charge_clamps_to_capacity() {
        let mut ev = Vehicle::electric(3, "Tesla Model 3", 350.0, 75.0, 70.0);
        assert_eq!(ev.charge_battery(10.0), Ok(75.0));
        // Charging a full battery stays at capacity
        assert_eq!(ev.charge_battery(10.0), Ok(75.0));
    }

    #[test]
    fn test_charge_non_electric_fails() {
        let mut truck = Vehicle::truck(2, "Hino Dutro", 400.0, 1000.0);
        assert_eq!(truck.charge_battery(10.0), Err(RentalError::NotElectric(2)));
    }

    #[test]
    fn test_describe_per_variant() {
        assert_eq!(
            Vehicle::car(1, "Toyota Avanza", 200.0, 7).describe(),
            "[1] Toyota Avanza (rate 200) Car cap=7"
        );
        assert_eq!(
            Vehicle::truck(2, "Hino Dutro", 400.0, 1000.0).describe(),
            "[2] Hino Dutro (rate 400) Truck maxLoadKg=1000"
        );
        assert_eq!(
            Vehicle::electric(3, "Tesla Model 3", 350.0, 75.0, 5.0).describe(),
            "[3] Tesla Model 3 (rate 350) Electric battery=5/75"
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let ev = Vehicle::electric(3, "Tesla Model 3", 350.0, 75.0, 5.0);
        let mut copy = ev.clone();
        copy.charge_battery(30.0).unwrap();
        assert_eq!(ev.current_charge(), Some(5.0));
        assert_eq!(copy.current_charge(), Some(35.0));
    }

    #[test]
    fn test_fleet_file_round_trip() {
        let truck = Vehicle::truck(2, "Hino Dutro", 400.0, 1000.0);
        let json = serde_json::to_string(&truck).unwrap();
        let parsed: Vehicle = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, truck);
    }
}
