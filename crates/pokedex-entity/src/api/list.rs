//! Paged list endpoint payload (`GET pokemon?limit=&offset=`).

use serde::{Deserialize, Serialize};

/// One page of the catalog list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonListResponse {
    /// Total number of entries the server knows about.
    pub count: i64,
    /// Link to the following page, `None` on the last page.
    pub next: Option<String>,
    /// Link to the preceding page, `None` on the first page.
    pub previous: Option<String>,
    /// Entries on this page, in server order.
    pub results: Vec<PokemonListItem>,
}

/// A name/URL pair on a list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonListItem {
    /// Species name.
    pub name: String,
    /// Detail resource URL.
    pub url: String,
}
