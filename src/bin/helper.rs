//! `omen-rgb-helper` - privileged zone writer
//!
//! Runs as root through pkexec:
//!
//! ```text
//! omen-rgb-helper <zone|all> <RRGGBB>
//! ```
//!
//! Exits 0 iff every targeted zone was written, 1 otherwise.

use omen_rgb::backlight::ZoneWriter;
use omen_rgb::helper::{self, EXIT_FAILURE};
use omen_rgb::utils;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = utils::init_helper_logging() {
        // Reports would be lost; refuse to write anything
        eprintln!("omen-rgb-helper: failed to initialize logging: {e}");
        return ExitCode::from(EXIT_FAILURE);
    }

    // Non-UTF-8 arguments turn into replacement characters and fail validation
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    ExitCode::from(helper::run(&args, &ZoneWriter::default()))
}
