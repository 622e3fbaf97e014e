//! `omen-rgb` - Keyboard backlight colors for HP Omen laptops
//!
//! Frontend: picks a zone and a color, then runs the privileged helper
//! through pkexec to apply them.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use omen_rgb::{
    backlight::{Color, ColorCommand, Zone, ZoneTarget, ZoneWriter},
    config::{ConfigManager, LastApplied},
    error::{OmenRgbError, get_user_friendly_error},
    policy::{self, HELPER_PATH, POLKIT_ACTION},
    utils,
};
use std::process::ExitCode;
use tracing::{error, info, warn};

/// Set HP Omen keyboard backlight zone colors
#[derive(Parser, Debug)]
#[command(name = "omen-rgb", version)]
#[command(about = "Set HP Omen keyboard backlight zone colors")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply a color to one zone or all zones (asks for authorization)
    Apply {
        /// Target zone: 0, 1, 2, 3 or all [default: last applied]
        #[arg(short, long)]
        zone: Option<ZoneTarget>,

        /// Color as RRGGBB or #RRGGBB [default: last applied]
        #[arg(short, long, value_parser = Color::from_user_input)]
        color: Option<Color>,
    },

    /// Show the current color of every zone
    Status,

    /// Print the polkit policy that authorizes the helper
    Policy {
        /// Absolute path of the installed helper
        #[arg(long, default_value = HELPER_PATH)]
        helper_path: String,

        /// Polkit action id
        #[arg(long, default_value = POLKIT_ACTION)]
        action: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            let message = if let Some(omen_error) = e.downcast_ref::<OmenRgbError>() {
                get_user_friendly_error(omen_error)
            } else {
                format!("{e:#}")
            };
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Policy {
            helper_path,
            action,
        } => {
            print!("{}", policy::render_policy(&action, &helper_path));
            Ok(())
        }
        Command::Status => {
            utils::init_logging().context("Failed to initialize logging system")?;
            show_status()
        }
        Command::Apply { zone, color } => {
            utils::init_logging().context("Failed to initialize logging system")?;
            apply(zone, color)
        }
    }
}

/// Launch the helper for the selected zone and color, then remember them
fn apply(zone: Option<ZoneTarget>, color: Option<Color>) -> Result<()> {
    let mut config = ConfigManager::load().context("Failed to load application configuration")?;

    let command = ColorCommand::new(
        zone.unwrap_or(config.last_applied.zone),
        color.unwrap_or(config.last_applied.color),
    );
    println!("Applying {} to zone {}...", command.color, command.target);

    let launcher = config.launcher.to_launcher();
    let output = launcher.apply(&command)?;
    if !output.stderr.trim().is_empty() {
        info!("Helper reported: {}", output.stderr.trim());
    }

    println!(
        "Successfully applied {} to zone {}.",
        command.color, command.target
    );

    config.last_applied = LastApplied {
        zone: command.target,
        color: command.color,
    };
    if let Err(e) = ConfigManager::save(&config) {
        // The color is on the keyboard already; only the default is lost
        warn!("Failed to save configuration: {}", e);
    }

    Ok(())
}

/// Print every zone's current color; fails if any zone is unreadable
fn show_status() -> Result<()> {
    let writer = ZoneWriter::default();
    let mut failed = 0;

    for zone in Zone::ALL {
        match writer.read_zone(zone) {
            Ok(color) => println!("zone {zone}: {color}"),
            Err(e) => {
                warn!("{}", e);
                println!("zone {zone}: unavailable ({e})");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!(
            "{failed} zone(s) unreadable under {}; is the hp-wmi module loaded?",
            writer.base_dir().display()
        );
    }
    Ok(())
}
