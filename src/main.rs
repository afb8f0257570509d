use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use budgeter::cli::{
    handle_bill_command, handle_config_command, handle_data_command, handle_export_command,
    handle_profile_command, handle_summary_command, BillCommands, ConfigCommands, DataCommands,
    ExportArgs, ProfileCommands, SummaryArgs,
};
use budgeter::config::{paths::BudgeterPaths, settings::Settings};
use budgeter::storage::{initialize_storage, needs_initialization, Storage};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "budgeter",
    version,
    about = "Terminal personal budgeting calculator",
    long_about = "Budgeter turns your income, housing, health coverage and recurring bills \
                  into a monthly budget: estimated federal and state taxes, fixed costs, \
                  what is left to spend, and how each cost compares to local averages."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory, settings and reference data
    Init,

    /// Compute and show the budget (default)
    Summary(SummaryArgs),

    /// View and edit the profile
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Manage recurring bills
    #[command(subcommand)]
    Bill(BillCommands),

    /// Export the budget to CSV, JSON or YAML
    Export(ExportArgs),

    /// List reference data
    #[command(subcommand)]
    Data(DataCommands),

    /// Show or change configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn init_logging(verbose: bool) {
    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = BudgeterPaths::new()?;

    if let Some(Commands::Init) = cli.command {
        println!("Initializing Budgeter at: {}", paths.base_dir().display());
        let report = initialize_storage(&paths)?;
        if report.created_anything() {
            if report.settings_created {
                println!("  Created {}", paths.settings_file().display());
            }
            if report.tax_tables_created {
                println!("  Created {}", paths.tax_tables_file().display());
            }
            if report.geo_stats_created {
                println!("  Created {}", paths.geo_stats_file().display());
            }
        } else {
            println!("  Already initialized, nothing to do.");
        }
        println!();
        println!("Next: 'budgeter profile set --income <amount>' then 'budgeter summary'.");
        return Ok(());
    }

    if needs_initialization(&paths) {
        info!("not initialized; using defaults and bundled reference data");
    }

    let mut settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {}
        Some(Commands::Summary(args)) => handle_summary_command(&storage, &settings, args)?,
        None => handle_summary_command(&storage, &settings, SummaryArgs::default())?,
        Some(Commands::Profile(cmd)) => handle_profile_command(&storage, &settings, cmd)?,
        Some(Commands::Bill(cmd)) => handle_bill_command(&storage, &settings, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, &settings, args)?,
        Some(Commands::Data(cmd)) => handle_data_command(&storage, &settings, cmd)?,
        Some(Commands::Config(cmd)) => handle_config_command(&storage, &mut settings, cmd)?,
    }

    Ok(())
}
