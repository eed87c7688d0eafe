//! Local cache CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use pokedex_core::error::AppError;

/// Arguments for cache commands
#[derive(Debug, Args)]
pub struct CacheArgs {
    /// Cache subcommand
    #[command(subcommand)]
    pub command: CacheCommand,
}

/// Cache subcommands
#[derive(Debug, Subcommand)]
pub enum CacheCommand {
    /// Show entry count and highest cached position
    Stats,
    /// List cached entries in position order
    List {
        /// Maximum number of entries
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
        /// First position to list
        #[arg(short, long, default_value_t = 0)]
        offset: i64,
    },
    /// Remove every cached entry
    Clear,
}

/// Execute cache commands
pub async fn execute(args: &CacheArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let store = super::open_store(&config).await?;
    let catalog = super::build_catalog(&config, store)?;

    match &args.command {
        CacheCommand::Stats => {
            let stats = catalog.cache_stats().await?;
            match format {
                OutputFormat::Json => output::print_item(&stats, format),
                OutputFormat::Table => {
                    output::print_kv("Database", &config.database.url);
                    output::print_kv("Entries", &stats.count.to_string());
                    output::print_kv(
                        "Highest position",
                        &stats
                            .max_position
                            .map_or_else(|| "-".to_string(), |p| p.to_string()),
                    );
                }
            }
        }
        CacheCommand::List { limit, offset } => {
            if *limit < 0 || *offset < 0 {
                return Err(AppError::validation("limit and offset must not be negative"));
            }
            let items = catalog.cached_page(*limit, *offset).await?;
            output::print_summaries(&items, format);
        }
        CacheCommand::Clear => {
            let removed = catalog.reset().await?;
            output::print_success(&format!("Removed {removed} cached entries"));
        }
    }

    Ok(())
}
