//! Reference data CLI commands
//!
//! Lists the values accepted by the profile and bill commands.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::data::{
    format_cadences, format_categories, format_known_bills, format_state_list,
};
use crate::error::BudgeterResult;
use crate::storage::Storage;

/// Data subcommands
#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// List locations with reference data
    States,
    /// List known bill names and their benchmark keys
    Bills,
    /// List payment cadences
    Cadences,
    /// List categories
    Categories,
}

/// Handle data commands
pub fn handle_data_command(
    storage: &Storage,
    settings: &Settings,
    cmd: DataCommands,
) -> BudgeterResult<()> {
    match cmd {
        DataCommands::States => {
            let reference = storage.reference_data()?;
            println!("{}", format_state_list(&reference, &settings.currency_symbol));
        }
        DataCommands::Bills => println!("{}", format_known_bills()),
        DataCommands::Cadences => println!("{}", format_cadences()),
        DataCommands::Categories => println!("{}", format_categories()),
    }

    Ok(())
}
