//! Bill CLI commands
//!
//! Implements commands for managing the profile's recurring bills.

use clap::Subcommand;

use super::{parse_cadence_arg, parse_key};
use crate::config::settings::Settings;
use crate::display::{format_bill_details, format_bill_list};
use crate::error::BudgeterResult;
use crate::models::{parse_amount, Category};
use crate::services::{resolve_geo_stats, BillUpdate, ProfileService};
use crate::storage::Storage;

/// Bill subcommands
#[derive(Subcommand, Debug)]
pub enum BillCommands {
    /// Add a bill
    Add {
        /// Bill name; known names (see 'budgeter data bills') are categorized automatically
        name: String,

        /// Amount (e.g., "70" or "$1,200.00")
        amount: String,

        /// Payment cadence
        #[arg(short, long, default_value = "monthly")]
        cadence: String,

        /// Category key (see 'budgeter data categories')
        #[arg(long)]
        category: Option<String>,

        /// Benchmark key to compare against local averages
        #[arg(short, long)]
        key: Option<String>,
    },

    /// List all bills
    List,

    /// Show a single bill
    Show {
        /// Bill ID or name
        bill: String,
    },

    /// Update a bill
    Update {
        /// Bill ID or name
        bill: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New amount
        #[arg(short, long)]
        amount: Option<String>,

        /// New cadence
        #[arg(short, long)]
        cadence: Option<String>,

        /// New category key
        #[arg(long)]
        category: Option<String>,

        /// New benchmark key
        #[arg(short, long, conflicts_with = "no_key")]
        key: Option<String>,

        /// Stop benchmarking this bill
        #[arg(long)]
        no_key: bool,
    },

    /// Remove a bill
    #[command(alias = "rm")]
    Remove {
        /// Bill ID or name
        bill: String,
    },
}

/// Handle bill commands
pub fn handle_bill_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BillCommands,
) -> BudgeterResult<()> {
    let service = ProfileService::new(storage, settings);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BillCommands::Add {
            name,
            amount,
            cadence,
            category,
            key,
        } => {
            let key = key.as_deref().map(parse_key).transpose()?;
            let bill = service.add_bill(
                &name,
                parse_amount(&amount),
                parse_cadence_arg(&cadence),
                category.as_deref().map(Category::parse_input),
                key,
            )?;

            println!("Added bill: {}", bill.name);
            print!("{}", format_bill_details(&bill, symbol));
        }

        BillCommands::List => {
            let profile = service.current()?;
            let reference = storage.reference_data()?;
            let stats = resolve_geo_stats(&profile.location, &reference.geo);
            println!("{}", format_bill_list(&profile.bills, stats, symbol));
        }

        BillCommands::Show { bill } => {
            let profile = service.current()?;
            let found = profile
                .find_bill(&bill)
                .ok_or_else(|| crate::error::BudgeterError::bill_not_found(&bill))?;
            print!("{}", format_bill_details(found, symbol));
        }

        BillCommands::Update {
            bill,
            name,
            amount,
            cadence,
            category,
            key,
            no_key,
        } => {
            let update = BillUpdate {
                name,
                amount: amount.as_deref().map(parse_amount),
                cadence: cadence.as_deref().map(parse_cadence_arg),
                category: category.as_deref().map(Category::parse_input),
                key: key.as_deref().map(parse_key).transpose()?,
                clear_key: no_key,
            };

            let updated = service.update_bill(&bill, &update)?;
            println!("Updated bill: {}", updated.name);
            print!("{}", format_bill_details(&updated, symbol));
        }

        BillCommands::Remove { bill } => {
            let removed = service.remove_bill(&bill)?;
            println!("Removed bill: {}", removed.name);
        }
    }

    Ok(())
}
