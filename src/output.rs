//! Output formatting module

use crate::cli::OutputFormat;
use crate::domain::model::Vehicle;
use crate::error::Result;

/// Print a fleet listing in the selected format
pub fn output_fleet(output_format: OutputFormat, fleet: &[Vehicle]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(fleet)?;
        println!("{}", content);
    } else {
        println!("Fleet:");
        for vehicle in fleet {
            let status = if vehicle.rented { " [RENTED]" } else { "" };
            println!("  {}{}", vehicle.describe(), status);
        }
    }

    Ok(())
}
