//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use pokedex_entity::{PokemonDetail, PokemonSummary};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Catalog entry display row
#[derive(Debug, Serialize, Tabled)]
pub struct SummaryRow {
    /// Position in the catalog
    #[tabled(rename = "#")]
    pub position: i64,
    /// Resource id
    pub id: String,
    /// Species name
    pub name: String,
    /// Detail URL
    pub url: String,
}

impl From<&PokemonSummary> for SummaryRow {
    fn from(item: &PokemonSummary) -> Self {
        Self {
            position: item.position,
            id: item.id().unwrap_or("?").to_string(),
            name: item.name.clone(),
            url: item.url.clone(),
        }
    }
}

/// Print catalog entries in the selected format
pub fn print_summaries(items: &[PokemonSummary], format: OutputFormat) {
    let rows: Vec<SummaryRow> = items.iter().map(SummaryRow::from).collect();
    print_list(&rows, format);
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }
}

/// Print a single item as JSON, or as its debug form for tables
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{item:#?}"),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{json}");
        }
    }
}

/// Print a Pokemon detail card
pub fn print_detail(detail: &PokemonDetail, format: OutputFormat) {
    if format == OutputFormat::Json {
        print_item(detail, format);
        return;
    }

    println!("#{} {}", detail.id, detail.name);
    print_kv("Height", &format!("{:.1} m", detail.height_metres()));
    print_kv("Weight", &format!("{:.1} kg", detail.weight_kilograms()));
    print_kv("Types", &detail.types.join(", "));
    print_kv("Abilities", &detail.abilities.join(", "));
    print_kv("Image", &detail.image_url);
    println!("  Stats:");
    for (name, value) in &detail.stats {
        println!("    {name:<22} {value:>4}");
    }
    println!("    {:<22} {:>4}", "total", detail.base_stat_total());
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{key}:"), value);
}
