//! Fleet Rental - vehicle rental desk CLI
//!
//! Rents and returns a fleet of heterogeneous vehicles under the desk's
//! business rules, writing every transaction outcome to the activity log.

use clap::Parser;
use fleet_rental::cli::Cli;
use fleet_rental::commands;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
