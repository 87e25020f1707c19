//! Command handlers

use crate::app::RentalService;
use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::domain::model::Vehicle;
use crate::error::{Error, Result};
use crate::infrastructure::{ActivityLog, ManualClock};
use crate::output::output_fleet;
use chrono::Duration;
use std::path::PathBuf;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if cli.log_file.is_some() {
        config.log_file = cli.log_file.clone();
    }

    match cli.command {
        Commands::Demo => cmd_demo(&config),

        Commands::List { fleet } => {
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_list(fleet, output_format)
        }

        Commands::Config {
            show,
            set_log_file,
            set_output,
            reset,
        } => cmd_config(config, show, set_log_file, set_output, reset),
    }
}

/// The built-in demo fleet, one vehicle per variant
pub fn demo_fleet() -> Vec<Vehicle> {
    vec![
        Vehicle::car(1, "Toyota Avanza", 200.0, 7),
        Vehicle::truck(2, "Hino Dutro", 400.0, 1000.0),
        Vehicle::electric(3, "Tesla Model 3", 350.0, 75.0, 5.0),
    ]
}

/// Load vehicles from a JSON fleet file, or fall back to the demo fleet
fn load_fleet(path: Option<PathBuf>) -> Result<Vec<Vehicle>> {
    let Some(path) = path else {
        return Ok(demo_fleet());
    };

    let content = std::fs::read_to_string(&path)
        .map_err(|e| Error::FleetFile(format!("{}: {}", path.display(), e)))?;
    let vehicles: Vec<Vehicle> = serde_json::from_str(&content)
        .map_err(|e| Error::FleetFile(format!("{}: {}", path.display(), e)))?;

    if vehicles.is_empty() {
        return Err(Error::FleetFile(format!(
            "{}: fleet file contains no vehicles",
            path.display()
        )));
    }

    Ok(vehicles)
}

fn cmd_list(fleet_file: Option<PathBuf>, output_format: OutputFormat) -> Result<()> {
    let vehicles = load_fleet(fleet_file)?;
    output_fleet(output_format, &vehicles)
}

/// Fixed demonstration sequence exercising every business rule once.
///
/// Runs on a manual clock so the late-return step advances time instead of
/// sleeping.
fn cmd_demo(config: &Config) -> Result<()> {
    let log = ActivityLog::open(&config.log_path())?;
    let clock = ManualClock::from_system();
    let mut desk = RentalService::new(log, clock.clone());

    for vehicle in demo_fleet() {
        desk.add_vehicle(&vehicle);
    }

    println!("Fleet:");
    for line in desk.list_fleet() {
        println!("  {}", line);
    }

    println!("\n--- Rent truck with overload: expect rejection ---");
    report(desk.rent("memberA", 2, 3, 1200.0), "cost");

    println!("\n--- Rent electric car with low charge: expect rejection ---");
    report(desk.rent("memberB", 3, 2, 0.0), "cost");

    println!("\n--- Charge the electric car, then rent ---");
    report(desk.charge(3, 30.0), "charge now");
    report(desk.rent("memberB", 3, 2, 0.0), "cost");

    println!("\n--- Rent car for 1 day, return late on day 3 ---");
    report(desk.rent("memberC", 1, 1, 0.0), "cost");
    clock.advance(Duration::days(3));
    report(desk.return_vehicle("memberC", 1, 3, false), "total");

    println!("\n--- Return truck with damage: even id is assessed severe ---");
    report(desk.rent("memberD", 2, 2, 500.0), "cost");
    clock.advance(Duration::days(2));
    report(desk.return_vehicle("memberD", 2, 2, true), "total");

    println!("\nFinal fleet status:");
    for line in desk.list_fleet() {
        println!("  {}", line);
    }

    println!("\nActivity log: {}", config.log_path().display());
    Ok(())
}

/// Print a transaction outcome without aborting the demo on business errors
fn report(outcome: std::result::Result<f64, crate::error::RentalError>, label: &str) {
    match outcome {
        Ok(amount) => println!("OK: {}={}", label, amount),
        Err(e) => println!("Rejected: {}", e),
    }
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_log_file: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut changed = false;
    if let Some(path) = set_log_file {
        config.log_file = Some(path);
        changed = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !changed {
        print!("{}", config);
    }

    Ok(())
}
