//! Profile CLI commands
//!
//! Implements commands for viewing and editing the remembered profile.

use clap::Subcommand;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{location_name, parse_cadence_arg, parse_filing_arg, parse_housing_arg};
use crate::config::settings::Settings;
use crate::display::format_profile;
use crate::error::BudgeterResult;
use crate::models::parse_amount;
use crate::services::{resolve_geo_stats, ProfileService, ProfileUpdate};
use crate::storage::Storage;

/// Profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show the current profile
    Show,

    /// Update profile fields
    Set {
        /// Gross income amount (e.g., "60000" or "$5,000")
        #[arg(long)]
        income: Option<String>,

        /// Income cadence (weekly, biweekly, semimonthly, monthly, quarterly, biannual, annual)
        #[arg(long)]
        income_cadence: Option<String>,

        /// Filing status (single or married)
        #[arg(long)]
        filing: Option<String>,

        /// Location: "US" or a two-letter state code
        #[arg(long)]
        location: Option<String>,

        /// Housing type (rent or own)
        #[arg(long)]
        housing_type: Option<String>,

        /// Rent or mortgage amount
        #[arg(long)]
        housing: Option<String>,

        /// Housing cadence
        #[arg(long)]
        housing_cadence: Option<String>,

        /// Health insurance premium
        #[arg(long)]
        premium: Option<String>,

        /// Premium cadence
        #[arg(long)]
        premium_cadence: Option<String>,

        /// Annual out-of-pocket maximum
        #[arg(long)]
        oop_max: Option<String>,
    },

    /// Forget the remembered profile
    Reset,

    /// Replace the profile with sample data from a random state
    Seed {
        /// Seed for the random generator, for repeatable samples
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Handle profile commands
pub fn handle_profile_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ProfileCommands,
) -> BudgeterResult<()> {
    let service = ProfileService::new(storage, settings);

    match cmd {
        ProfileCommands::Show => {
            let reference = storage.reference_data()?;
            let profile = service.current()?;
            let name = location_name(&profile.location, &reference);
            let stats = resolve_geo_stats(&profile.location, &reference.geo);
            print!("{}", format_profile(&profile, &name, stats, &settings.currency_symbol));
            if !settings.remember_profile {
                println!();
                println!("Remembering is off; summaries use sample data.");
            }
        }

        ProfileCommands::Set {
            income,
            income_cadence,
            filing,
            location,
            housing_type,
            housing,
            housing_cadence,
            premium,
            premium_cadence,
            oop_max,
        } => {
            let update = ProfileUpdate {
                income: income.as_deref().map(parse_amount),
                income_cadence: income_cadence.as_deref().map(parse_cadence_arg),
                filing_status: filing.as_deref().map(parse_filing_arg),
                location: location.clone(),
                housing_type: housing_type.as_deref().map(parse_housing_arg),
                housing_cost: housing.as_deref().map(parse_amount),
                housing_cadence: housing_cadence.as_deref().map(parse_cadence_arg),
                medical_premium: premium.as_deref().map(parse_amount),
                premium_cadence: premium_cadence.as_deref().map(parse_cadence_arg),
                medical_oop_max: oop_max.as_deref().map(parse_amount),
            };

            let profile = service.update(&update)?;
            println!("Profile updated.");

            let reference = storage.reference_data()?;
            if location.is_some() && !reference.is_known_location(&profile.location) {
                println!(
                    "Note: no data for location '{}'; national averages and no state tax apply.",
                    profile.location
                );
            }

            let name = location_name(&profile.location, &reference);
            let stats = resolve_geo_stats(&profile.location, &reference.geo);
            print!("{}", format_profile(&profile, &name, stats, &settings.currency_symbol));
        }

        ProfileCommands::Reset => {
            if service.reset()? {
                println!("Profile cleared.");
            } else {
                println!("No remembered profile to clear.");
            }
        }

        ProfileCommands::Seed { seed } => {
            let reference = storage.reference_data()?;
            let state = match seed {
                Some(seed) => service.seed(&reference.geo, &mut StdRng::seed_from_u64(seed))?,
                None => service.seed(&reference.geo, &mut rand::thread_rng())?,
            };
            println!("Loaded {} averages into the profile.", state);
            println!("Run 'budgeter summary' to see the budget.");
        }
    }

    Ok(())
}
