use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use chartmoments_core::model::chart::{BILLBOARD_HOT_100, TOP40_WEEKLY};
use chartmoments_etl::Config;
use chartmoments_search::DEFAULT_TOP_LIMIT;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "chartmoments", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Primary bulk chart document (overrides CHARTS_PRIMARY_PATH and the config file)
    #[arg(long, global = true)]
    primary: Option<PathBuf>,

    /// Directory of supplemental per-year chart files
    #[arg(long, global = true)]
    supplemental_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Show corpus statistics and ingestion counters
    ///
    /// Builds the corpus from the configured sources and reports:
    ///
    /// - Total records, year range and the distinct chart names
    /// - Which primary source was used and how many rows it rejected
    /// - Supplemental files read or skipped, rows dropped and rows repaired
    Stats,
    /// Show the top entries of a chart for a year
    Top {
        /// Chart year
        year: i32,

        /// Chart name or alias (default: every chart for the year)
        #[arg(long)]
        chart: Option<String>,

        /// Maximum number of entries
        #[arg(long, default_value_t = DEFAULT_TOP_LIMIT)]
        limit: usize,
    },
    /// Show the number-one entry of a chart for a year
    NumberOne {
        /// Chart year
        year: i32,

        /// Chart name or alias
        #[arg(long, default_value = BILLBOARD_HOT_100)]
        chart: String,
    },
    /// Pick a random entry for a year, falling back to other charts
    ///
    /// Tries the requested chart, then its configured fallback chart, then
    /// the backup chart, then any chart with data for the year. The tier
    /// used and the size of its pool are printed with the pick.
    Random {
        /// Chart year
        year: i32,

        /// Chart name or alias
        #[arg(long, default_value = TOP40_WEEKLY)]
        chart: String,
    },
    /// Run the repair pipeline on one raw row and show each pass that fired
    Repair {
        #[arg(long)]
        artist: String,

        #[arg(long, default_value = "")]
        title: String,

        #[arg(long)]
        year: i32,

        #[arg(long)]
        rank: Option<u32>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration (default)
    Show,
    /// Show the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file from the example if it does not exist
    Init,
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load().context("Failed to load configuration")?;

    if let Some(primary) = &cli.primary {
        config = config.with_primary_path(primary.clone());
    }
    if let Some(dir) = &cli.supplemental_dir {
        config = config.with_supplemental_dir(dir.clone());
    }

    log::debug!("Effective configuration: {config:?}");
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;

    match &cli.command {
        Commands::Stats => {
            let engine = chartmoments_search::init(&load_config(&cli)?);
            commands::show_stats(engine, json)?;
        }
        Commands::Top { year, chart, limit } => {
            let engine = chartmoments_search::init(&load_config(&cli)?);
            commands::show_top(engine, *year, chart.as_deref(), *limit, json)?;
        }
        Commands::NumberOne { year, chart } => {
            let engine = chartmoments_search::init(&load_config(&cli)?);
            commands::show_number_one(engine, *year, chart, json)?;
        }
        Commands::Random { year, chart } => {
            let engine = chartmoments_search::init(&load_config(&cli)?);
            commands::show_random(engine, *year, chart, json)?;
        }
        Commands::Repair {
            artist,
            title,
            year,
            rank,
        } => {
            commands::run_repair(artist, title, *year, *rank, json)?;
        }
        Commands::Config { action } => match action {
            None | Some(ConfigAction::Show) => {
                commands::config::show_config(&load_config(&cli)?, json)?;
            }
            Some(ConfigAction::Path) => commands::config::show_path(),
            Some(ConfigAction::Example) => commands::config::show_example(),
            Some(ConfigAction::Init) => commands::config::init_config()?,
        },
    }

    Ok(())
}
