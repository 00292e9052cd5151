//! Archive link tracker CLI
//!
//! Running without a subcommand performs an incremental update.

use std::path::PathBuf;

use archive_links::{
    error::{AppError, Result},
    models::Config,
    pipeline,
    storage::LocalStorage,
    utils::http,
};
use clap::{Parser, Subcommand};

/// Madrid open-data archive link tracker
#[derive(Parser, Debug)]
#[command(
    name = "archive-links",
    version,
    about = "Tracks ZIP download links on the Madrid open-data archive listing"
)]
struct Cli {
    /// Directory holding config.toml and the record file
    #[arg(short, long, default_value = "storage")]
    storage_dir: PathBuf,

    /// Path to the config file (default: {storage_dir}/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk the listing from the stored checkpoint and save new links
    Update,

    /// Show what an update would record, without saving
    Preview {
        /// Ignore the stored checkpoint and list every link
        #[arg(long)]
        full: bool,
    },

    /// Show the record file location, size and checkpoint
    Info,

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // An explicitly requested config must load; the default one may be absent.
    let config = match &cli.config {
        Some(path) => Config::load(path).map_err(|e| {
            AppError::config(format!("failed to load {}: {e}", path.display()))
        })?,
        None => Config::load_or_default(cli.storage_dir.join("config.toml")),
    };
    let storage = LocalStorage::from_config(&cli.storage_dir, &config);

    match cli.command.unwrap_or(Command::Update) {
        Command::Update => {
            config.validate()?;
            let client = http::create_client(&config.http)?;
            let summary = pipeline::run_update(&config, &storage, &client)?;

            log::info!(
                "Update complete: {} new link(s), {} total",
                summary.added,
                summary.total
            );
        }

        Command::Preview { full } => {
            config.validate()?;
            let client = http::create_client(&config.http)?;
            let records = pipeline::run_preview(&config, &storage, &client, full)?;

            for record in &records {
                println!("{record}");
            }
        }

        Command::Info => {
            pipeline::run_info(&storage);
        }

        Command::Validate => {
            pipeline::run_validate(&config)?;
            log::info!("All validations passed!");
        }
    }

    Ok(())
}
