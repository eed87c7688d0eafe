//! Catalog paging CLI command.

use clap::Args;

use crate::output::{self, OutputFormat};
use pokedex_core::error::AppError;

/// Arguments for the page command
#[derive(Debug, Args)]
pub struct PageArgs {
    /// Number of pages to fetch, starting from the first
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,
}

/// Fetch pages from the remote catalog into the cache and print them
pub async fn execute(args: &PageArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let store = super::open_store(&config).await?;
    let catalog = super::build_catalog(&config, store)?;

    let mut items = Vec::new();
    for _ in 0..args.pages {
        if catalog.cursor().await.is_exhausted() {
            break;
        }
        items.extend(catalog.fetch_next_page().await?);
    }

    output::print_summaries(&items, format);

    if format == OutputFormat::Table {
        let cursor = catalog.cursor().await;
        if cursor.is_exhausted() {
            output::print_warning("Reached the end of the catalog");
        } else {
            output::print_kv("Next page", &cursor.to_string());
        }
    }
    Ok(())
}
