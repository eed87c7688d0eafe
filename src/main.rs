//! Pokedex: interactive catalog browser
//!
//! Main entry point that wires all crates together and runs a line-oriented
//! browsing session on stdin.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, fmt};

use pokedex_client::PokeApiClient;
use pokedex_core::config::{AppConfig, DEFAULT_CONFIG_PATH};
use pokedex_core::error::AppError;
use pokedex_database::migration::run_migrations;
use pokedex_database::{DatabasePool, PokemonRepository};
use pokedex_service::{BrowserState, CatalogBrowser, CatalogService};

const HELP: &str = "commands: more | show <#> | close | list | quit";

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Browser error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("POKEDEX_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    AppConfig::load(&config_path)
}

/// Initialize tracing/logging
///
/// Logs go to stderr so they never interleave with the browser output.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Main browser run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Pokedex v{}", env!("CARGO_PKG_VERSION"));

    let db = DatabasePool::connect(&config.database).await?;
    if !db.health_check().await? {
        return Err(AppError::storage("Catalog cache did not answer the health check"));
    }
    run_migrations(db.pool()).await?;
    let store = PokemonRepository::new(db.pool().clone());

    let client = PokeApiClient::new(&config.api)?;
    tracing::info!(base_url = %client.base_url(), "API client ready");

    let catalog = CatalogService::new(Arc::new(client), Arc::new(store), config.catalog.page_size);
    let browser = CatalogBrowser::new(Arc::new(catalog));

    println!("{HELP}");
    browser.load_more().await;
    let mut shown = render_new_items(&browser.snapshot(), 0);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut words = line.split_whitespace();
        match (words.next(), words.next()) {
            (None, _) => continue,
            (Some("more" | "m"), _) => {
                browser.load_more().await;
                shown = render_new_items(&browser.snapshot(), shown);
            }
            (Some("show" | "s"), Some(index)) => {
                let state = browser.snapshot();
                match index.parse::<usize>().ok().and_then(|i| state.list.items.get(i)) {
                    Some(item) => {
                        browser.select_item(item).await;
                        render_detail(&browser.snapshot());
                    }
                    None => println!("no entry #{index}, {} loaded", state.list.items.len()),
                }
            }
            (Some("close" | "c"), _) => browser.dismiss_detail(),
            (Some("list" | "l"), _) => {
                shown = render_new_items(&browser.snapshot(), 0);
            }
            (Some("quit" | "q" | "exit"), _) => break,
            _ => println!("{HELP}"),
        }
    }

    db.close().await;
    tracing::info!("Pokedex stopped");
    Ok(())
}

/// Print list entries from `from` on, plus the list error if any. Returns the
/// number of entries printed so far.
fn render_new_items(state: &BrowserState, from: usize) -> usize {
    for (index, item) in state.list.items.iter().enumerate().skip(from) {
        println!("{index:>5}  {}", item.name);
    }
    if let Some(error) = &state.list.error {
        println!("load failed: {error}");
    } else if state.list.items.len() == from {
        println!("no more entries");
    }
    state.list.items.len()
}

fn render_detail(state: &BrowserState) {
    let detail_state = &state.detail;
    if let Some(error) = &detail_state.error {
        println!("detail failed: {error}");
        return;
    }
    let Some(detail) = &detail_state.detail else {
        return;
    };

    println!("#{} {}", detail.id, detail.name);
    println!(
        "  {:.1} m, {:.1} kg, {}",
        detail.height_metres(),
        detail.weight_kilograms(),
        detail.types.join("/")
    );
    println!("  abilities: {}", detail.abilities.join(", "));
    for (name, value) in &detail.stats {
        println!("  {name:<16} {value:>4}");
    }
    println!("  image: {}", detail.image_url);
}
