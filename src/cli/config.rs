//! Config CLI commands
//!
//! Shows paths and settings, and changes the persisted preferences.

use clap::{Subcommand, ValueEnum};

use crate::config::settings::Settings;
use crate::error::{BudgeterError, BudgeterResult};
use crate::storage::Storage;

/// On/off switch for boolean settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration and paths
    Show,

    /// Remember the profile between runs; turning it off deletes the saved profile
    Remember {
        #[arg(value_enum)]
        state: Toggle,
    },

    /// Set the currency symbol used in output
    Currency { symbol: String },
}

/// Handle config commands
pub fn handle_config_command(
    storage: &Storage,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> BudgeterResult<()> {
    let paths = storage.paths();

    match cmd {
        ConfigCommands::Show => {
            println!("Budgeter Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!(
                "Initialized:      {}",
                if storage.is_initialized() { "yes" } else { "no (run 'budgeter init')" }
            );
            println!();
            println!("Settings:");
            println!(
                "  Remember profile: {}",
                if settings.remember_profile { "on" } else { "off" }
            );
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Export basename:  {}", settings.export_basename);
            println!("  Default location: {}", settings.default_location);
            println!("  Default cadence:  {}", settings.default_income_cadence);
        }

        ConfigCommands::Remember { state } => {
            settings.remember_profile = state == Toggle::On;
            settings.save(paths)?;

            if settings.remember_profile {
                println!("Profile will be remembered between runs.");
            } else {
                let cleared = storage.profile.clear()?;
                println!("Profile will no longer be remembered.");
                if cleared {
                    println!("Saved profile deleted.");
                }
            }
        }

        ConfigCommands::Currency { symbol } => {
            let symbol = symbol.trim();
            if symbol.is_empty() {
                return Err(BudgeterError::Validation(
                    "Currency symbol cannot be empty".into(),
                ));
            }
            settings.currency_symbol = symbol.to_string();
            settings.save(paths)?;
            println!("Currency symbol set to {}", settings.currency_symbol);
        }
    }

    Ok(())
}
