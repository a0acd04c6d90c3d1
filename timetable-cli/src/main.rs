mod commands;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use timetable_core::ScheduleStore;
use timetable_core::config::TimetableConfig;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "timetable")]
#[command(about = "Browse your group's class schedule by day or by week")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show lessons for a day or a whole week
    Show {
        #[command(flatten)]
        args: commands::SelectionArgs,
    },
    /// List the weeks in the schedule
    Weeks {
        /// Count lessons for this group (id or name)
        #[arg(short, long)]
        group: Option<String>,
    },
    /// List known study groups
    Groups,
    /// Page through the schedule interactively
    Browse {
        #[command(flatten)]
        args: commands::SelectionArgs,
    },
    /// Check a dataset file for structural problems
    Validate { path: PathBuf },
    /// Show configuration paths and values
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Show { args } => {
            let (config, store) = load_schedule()?;
            commands::show::run(&store, &config, &args)
        }
        Commands::Weeks { group } => {
            let (config, store) = load_schedule()?;
            commands::weeks::run(&store, &config, group.as_deref())
        }
        Commands::Groups => {
            let (config, store) = load_schedule()?;
            commands::groups::run(&store, &config)
        }
        Commands::Browse { args } => {
            let (config, store) = load_schedule()?;
            commands::browse::run(&store, &config, &args)
        }
        Commands::Validate { path } => commands::validate::run(&path),
        Commands::Config => commands::config::run(),
    }
}

fn load_schedule() -> Result<(TimetableConfig, ScheduleStore)> {
    let config = TimetableConfig::load()?;
    let store = config
        .load_store()
        .context("Failed to load schedule dataset")?;
    Ok((config, store))
}

/// Logs go to stderr so they never interleave with the rendered schedule.
fn init_logging(verbose: bool) -> Result<()> {
    let default_filter = if verbose { "debug" } else { "warn" };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Failed to set up logging")?;

    Ok(())
}
