//! Pokemon detail model.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Detail view of a single Pokemon. Fetched on demand and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PokemonDetail {
    /// National dex number.
    pub id: i64,
    /// Species name.
    pub name: String,
    /// Height in decimetres.
    pub height: i64,
    /// Weight in hectograms.
    pub weight: i64,
    /// Type names in slot order.
    pub types: Vec<String>,
    /// Base stats keyed by stat name, in the order the server listed them.
    pub stats: IndexMap<String, i64>,
    /// Ability names in slot order.
    pub abilities: Vec<String>,
    /// Best available artwork URL.
    pub image_url: String,
}

impl PokemonDetail {
    /// Height converted to metres.
    pub fn height_metres(&self) -> f64 {
        self.height as f64 / 10.0
    }

    /// Weight converted to kilograms.
    pub fn weight_kilograms(&self) -> f64 {
        self.weight as f64 / 10.0
    }

    /// Sum of all base stats.
    pub fn base_stat_total(&self) -> i64 {
        self.stats.values().sum()
    }
}
