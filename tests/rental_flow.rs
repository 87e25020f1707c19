//! Integration tests for the rental desk transaction flow

use chrono::{Duration, TimeZone, Utc};
use tempfile::{tempdir, TempDir};

use fleet_rental::app::RentalService;
use fleet_rental::domain::model::{Vehicle, VehicleKind};
use fleet_rental::error::RentalError;
use fleet_rental::infrastructure::{ActivityLog, ManualClock};

fn desk() -> (RentalService<ManualClock>, ManualClock, std::path::PathBuf, TempDir) {
    let dir = tempdir().expect("Failed to create temp dir");
    let log_path = dir.path().join("rental_log.txt");
    let log = ActivityLog::open(&log_path).expect("Failed to open activity log");
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap());

    let mut desk = RentalService::new(log, clock.clone());
    desk.add_vehicle(&Vehicle::car(1, "Toyota Avanza", 200.0, 7));
    desk.add_vehicle(&Vehicle::truck(2, "Hino Dutro", 400.0, 1000.0));
    desk.add_vehicle(&Vehicle::electric(3, "Tesla Model 3", 350.0, 75.0, 5.0));
    (desk, clock, log_path, dir)
}

/// Availability flags must agree with the ledger at every step
fn assert_consistent(desk: &RentalService<ManualClock>) {
    for vehicle in desk.fleet().all() {
        assert_eq!(vehicle.rented, desk.ledger().contains(vehicle.id));
    }
}

/// Car id=1, rate=200: rent 1 day succeeds with cost 200; returning on day 3
/// is 48h past due, so 3 charged late days on top of the recomputed base.
#[test]
fn test_car_late_return_scenario() {
    let (mut desk, clock, _log, _dir) = desk();

    let cost = desk.rent("memberC", 1, 1, 0.0).expect("rent should succeed");
    assert_eq!(cost, 200.0);
    assert_consistent(&desk);

    clock.advance(Duration::days(3));
    let total = desk
        .return_vehicle("memberC", 1, 3, false)
        .expect("return should succeed");
    // base 200*3, late_days = floor(48/24)+1 = 3, penalty 60
    assert_eq!(total, 660.0);
    assert_consistent(&desk);
}

/// Truck id=2, rate=400, max_load=1000: a 1200 kg request is rejected with
/// the exact requested/max values and no state change.
#[test]
fn test_truck_overload_scenario() {
    let (mut desk, _clock, _log, _dir) = desk();

    let err = desk.rent("memberA", 2, 3, 1200.0).unwrap_err();
    assert_eq!(
        err,
        RentalError::Overload {
            requested_kg: 1200.0,
            max_kg: 1000.0,
        }
    );
    assert_eq!(desk.ledger().count(), 0);
    assert_consistent(&desk);
}

/// ElectricCar id=3, capacity=75, charge=5: rent fails on the start
/// precondition; after charging 30 kWh (-> 35) a 2-day rent succeeds at 700
/// with no surcharge, since 35 is not below 20% of 75.
#[test]
fn test_electric_car_scenario() {
    let (mut desk, _clock, _log, _dir) = desk();

    let err = desk.rent("memberB", 3, 2, 0.0).unwrap_err();
    assert!(matches!(err, RentalError::BatteryLow { .. }));
    assert_consistent(&desk);

    assert_eq!(desk.charge(3, 30.0), Ok(35.0));
    let cost = desk.rent("memberB", 3, 2, 0.0).expect("rent should succeed");
    assert_eq!(cost, 700.0);
    assert_consistent(&desk);
}

/// Damage on an even id is severe: the return call fails but the vehicle is
/// released. Damage on an odd id is minor: flat 100 on top of the base.
#[test]
fn test_damage_severity_follows_id_parity() {
    let (mut desk, _clock, _log, _dir) = desk();

    desk.rent("memberD", 2, 2, 500.0).unwrap();
    let err = desk.return_vehicle("memberD", 2, 2, true).unwrap_err();
    assert_eq!(err, RentalError::SevereDamage(2));
    assert!(!desk.fleet().find(2).unwrap().rented);
    assert_consistent(&desk);

    desk.rent("memberC", 1, 2, 0.0).unwrap();
    let total = desk.return_vehicle("memberC", 1, 2, true).unwrap();
    assert_eq!(total, 400.0 + 100.0);
    assert_consistent(&desk);
}

/// A rented vehicle cannot be rented again until returned
#[test]
fn test_rent_return_rent_cycle() {
    let (mut desk, _clock, _log, _dir) = desk();

    desk.rent("memberC", 1, 1, 0.0).unwrap();
    assert_eq!(
        desk.rent("memberD", 1, 1, 0.0),
        Err(RentalError::VehicleUnavailable(1))
    );

    desk.return_vehicle("memberC", 1, 1, false).unwrap();
    assert!(desk.rent("memberD", 1, 1, 0.0).is_ok());
    assert_consistent(&desk);
}

/// Every transaction outcome writes exactly one log line, in call order
#[test]
fn test_activity_log_records_outcomes_in_order() {
    let (mut desk, _clock, log_path, _dir) = desk();

    desk.rent("memberA", 2, 3, 1200.0).unwrap_err();
    desk.rent("memberB", 3, 2, 0.0).unwrap_err();
    desk.charge(3, 30.0).unwrap();
    desk.rent("memberB", 3, 2, 0.0).unwrap();
    desk.return_vehicle("memberB", 3, 2, false).unwrap();

    let content = std::fs::read_to_string(&log_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].contains("Rent failed for vehicle id=2"));
    assert!(lines[0].contains("exceeds max load"));
    assert!(lines[1].contains("Rent failed for vehicle id=3"));
    assert!(lines[1].contains("Battery too low"));
    assert!(lines[2].contains("Charged EV id=3"));
    assert!(lines[3].contains("Rented vehicle id=3 to renter=memberB"));
    assert!(lines[4].contains("Vehicle id=3 returned by memberB"));
}

/// Fleet files use the same JSON shape as the in-code constructors
#[test]
fn test_fleet_file_shape() {
    let json = r#"[
        {"id": 1, "name": "Toyota Avanza", "daily_rate": 200.0,
         "kind": "car", "passenger_capacity": 7},
        {"id": 2, "name": "Hino Dutro", "daily_rate": 400.0,
         "kind": "truck", "max_load_kg": 1000.0},
        {"id": 3, "name": "Tesla Model 3", "daily_rate": 350.0,
         "kind": "electric_car", "battery_capacity_kwh": 75.0, "charge_kwh": 5.0}
    ]"#;

    let vehicles: Vec<Vehicle> = serde_json::from_str(json).unwrap();
    assert_eq!(vehicles.len(), 3);
    assert!(!vehicles[0].rented);
    assert!(matches!(vehicles[1].kind, VehicleKind::Truck { max_load_kg } if max_load_kg == 1000.0));
    assert_eq!(vehicles[2].current_charge(), Some(5.0));
}
