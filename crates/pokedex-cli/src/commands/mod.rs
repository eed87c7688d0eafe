//! CLI command definitions and dispatch.

pub mod cache;
pub mod config;
pub mod detail;
pub mod page;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use pokedex_client::PokeApiClient;
use pokedex_core::config::{AppConfig, DEFAULT_CONFIG_PATH};
use pokedex_core::error::AppError;
use pokedex_database::migration::run_migrations;
use pokedex_database::{DatabasePool, PokemonRepository};
use pokedex_service::CatalogService;

/// Pokedex: browse the PokeAPI catalog through a local cache
#[derive(Debug, Parser)]
#[command(name = "pokedex-cli", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "POKEDEX_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch catalog pages and store them in the cache
    Page(page::PageArgs),
    /// Show the detail of one Pokemon
    Detail(detail::DetailArgs),
    /// Inspect or clear the local cache
    Cache(cache::CacheArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Page(args) => page::execute(args, &self.config, self.format).await,
            Commands::Detail(args) => detail::execute(args, &self.config, self.format).await,
            Commands::Cache(args) => cache::execute(args, &self.config, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: open the cache database and apply migrations
pub async fn open_store(config: &AppConfig) -> Result<PokemonRepository, AppError> {
    let db = DatabasePool::connect(&config.database).await?;
    run_migrations(db.pool()).await?;
    Ok(PokemonRepository::new(db.into_pool()))
}

/// Helper: wire the catalog service over an opened store
pub fn build_catalog(config: &AppConfig, store: PokemonRepository) -> Result<CatalogService, AppError> {
    let client = PokeApiClient::new(&config.api)?;
    Ok(CatalogService::new(
        Arc::new(client),
        Arc::new(store),
        config.catalog.page_size,
    ))
}
