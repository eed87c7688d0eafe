//! Catalog list entry model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use pokedex_core::error::AppError;
use pokedex_core::result::AppResult;

/// One entry of the paginated catalog, as persisted in the `pokemon` table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, FromRow)]
pub struct PokemonSummary {
    /// Unique name, the primary key of the local store.
    pub name: String,
    /// Resource URL of the detail endpoint; encodes the numeric id.
    pub url: String,
    /// Zero-based rank in the server's total ordering.
    pub position: i64,
}

impl PokemonSummary {
    /// Create a new summary.
    pub fn new(name: impl Into<String>, url: impl Into<String>, position: i64) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            position,
        }
    }

    /// The resource id encoded in [`Self::url`].
    pub fn id(&self) -> AppResult<&str> {
        resource_id(&self.url)
    }
}

/// Extract the resource id from a catalog URL.
///
/// The URL is split on `/`, the last segment (empty for the canonical
/// trailing-slash form) is dropped, and the segment before it is the id:
/// `https://pokeapi.co/api/v2/pokemon/25/` yields `25`.
pub fn resource_id(url: &str) -> AppResult<&str> {
    let mut segments = url.rsplit('/');
    segments.next();
    match segments.next() {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(AppError::malformed_url(format!(
            "cannot extract a resource id from '{url}'"
        ))),
    }
}
