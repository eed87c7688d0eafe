//! Pokemon detail CLI command.

use clap::Args;

use crate::output::{self, OutputFormat};
use pokedex_core::error::AppError;
use pokedex_database::PokemonRepository;

/// Arguments for the detail command
#[derive(Debug, Args)]
pub struct DetailArgs {
    /// Pokemon name, dex number, or detail URL
    pub target: String,
}

/// Fetch and print the detail of one Pokemon
pub async fn execute(args: &DetailArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let store = super::open_store(&config).await?;
    let url = resolve_url(&args.target, &config.api.base_url, &store).await?;

    let catalog = super::build_catalog(&config, store)?;
    let detail = catalog.fetch_detail(&url).await?;

    output::print_detail(&detail, format);
    Ok(())
}

/// Turn the user's argument into a detail URL.
///
/// URLs are used as given. A name already in the cache uses the cached URL;
/// anything else is addressed directly, since the server accepts names and
/// numbers alike.
async fn resolve_url(
    target: &str,
    base_url: &str,
    store: &PokemonRepository,
) -> Result<String, AppError> {
    if target.contains('/') {
        return Ok(target.to_string());
    }

    let name = target.to_lowercase();
    if let Some(cached) = store.find_by_name(&name).await? {
        return Ok(cached.url);
    }

    Ok(format!("{}/pokemon/{name}/", base_url.trim_end_matches('/')))
}
