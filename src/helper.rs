//! Privileged writer entry point
//!
//! `omen-rgb-helper <zone|all> <RRGGBB>` runs as root under pkexec. Arguments
//! are validated before any file is touched; each zone failure is reported on
//! stderr and the remaining zones are still attempted.

use crate::backlight::{ApplyReport, ColorCommand, ZoneWriter};
use crate::error::{OmenRgbError, Result};
use tracing::{error, info};

/// Usage line shown on bad arguments
pub const USAGE: &str = "omen-rgb-helper <zone|all> <RRGGBB>  (zone: 0-3 or all)";

/// Exit code when every targeted zone was written
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code for any validation or write failure
pub const EXIT_FAILURE: u8 = 1;

/// Validate the helper's arguments (program name already stripped)
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<ColorCommand> {
    match args {
        [zone, color] => ColorCommand::parse(zone.as_ref(), color.as_ref()),
        _ => Err(OmenRgbError::Usage(format!(
            "expected 2 arguments, got {}",
            args.len()
        ))),
    }
}

/// Run the helper against `writer` and return the process exit code
pub fn run<S: AsRef<str>>(args: &[S], writer: &ZoneWriter) -> u8 {
    let command = match parse_args(args) {
        Ok(command) => command,
        Err(e) => {
            error!("{}", e);
            error!("Usage: {}", USAGE);
            return EXIT_FAILURE;
        }
    };

    info!("Applying {}", command);
    exit_code(&writer.apply(&command))
}

/// Map a report to the helper's exit code
pub fn exit_code(report: &ApplyReport) -> u8 {
    if report.is_success() {
        EXIT_SUCCESS
    } else {
        error!(
            "{} of {} zone(s) failed",
            report.failed_zones().len(),
            report.results.len()
        );
        EXIT_FAILURE
    }
}
