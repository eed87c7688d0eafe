//! Catalog repository: owns the cursor and merges pages into the store.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use pokedex_core::result::AppResult;
use pokedex_entity::pokemon::resource_id;
use pokedex_entity::{PokemonDetail, PokemonSummary};

use super::cursor::Cursor;
use super::detail::map_detail;
use super::source::{CatalogSource, CatalogStore};

/// Size and extent of the local cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of cached entries.
    pub count: i64,
    /// Highest cached position, `None` when empty.
    pub max_position: Option<i64>,
}

/// Coordinates the remote catalog, the local store, and pagination state.
///
/// The cursor is private and guarded by an async mutex that is held for the
/// whole fetch, so concurrent callers are served one page after another and
/// never request the same page twice.
pub struct CatalogService {
    /// Remote catalog.
    source: Arc<dyn CatalogSource>,
    /// Local cache.
    store: Arc<dyn CatalogStore>,
    /// Cursor the service starts from and returns to on reset.
    initial: Cursor,
    /// Next page to request.
    cursor: Mutex<Cursor>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("initial", &self.initial)
            .finish_non_exhaustive()
    }
}

impl CatalogService {
    /// Creates a new catalog service starting at offset 0.
    pub fn new(
        source: Arc<dyn CatalogSource>,
        store: Arc<dyn CatalogStore>,
        page_size: u32,
    ) -> Self {
        let initial = Cursor::first(page_size);
        Self {
            source,
            store,
            initial,
            cursor: Mutex::new(initial),
        }
    }

    /// Snapshot of the cursor.
    pub async fn cursor(&self) -> Cursor {
        *self.cursor.lock().await
    }

    /// Fetch the next page, persist it, and return only its entries.
    ///
    /// Once the server reports no further pages this returns an empty list
    /// without touching the network. On failure the cursor is left as it
    /// was, so calling again repeats the same request.
    pub async fn fetch_next_page(&self) -> AppResult<Vec<PokemonSummary>> {
        let mut cursor = self.cursor.lock().await;

        let (offset, limit) = match *cursor {
            Cursor::Exhausted => {
                debug!("Catalog exhausted, skipping fetch");
                return Ok(Vec::new());
            }
            Cursor::Page { offset, limit } => (offset, limit),
        };

        let page = self
            .source
            .fetch_page(limit, offset)
            .await
            .inspect_err(|e| warn!(offset, limit, error = %e, "Failed to fetch catalog page"))?;

        let next = cursor.advance(page.next.as_deref());

        let items: Vec<PokemonSummary> = page
            .results
            .into_iter()
            .zip(i64::from(offset)..)
            .map(|(entry, position)| PokemonSummary::new(entry.name, entry.url, position))
            .collect();

        self.store
            .upsert_all(&items)
            .await
            .inspect_err(|e| warn!(offset, limit, error = %e, "Failed to persist catalog page"))?;

        *cursor = next;

        info!(
            offset,
            limit,
            fetched = items.len(),
            total = page.count,
            next = %next,
            "Fetched catalog page"
        );
        Ok(items)
    }

    /// Fetch and map the detail of the entry at `url`.
    pub async fn fetch_detail(&self, url: &str) -> AppResult<PokemonDetail> {
        let id = resource_id(url)?;

        let response = self
            .source
            .fetch_detail(id)
            .await
            .inspect_err(|e| warn!(id, error = %e, "Failed to fetch pokemon detail"))?;

        debug!(id, name = %response.name, "Fetched pokemon detail");
        Ok(map_detail(response, id))
    }

    /// Entries already in the local cache, without any network access.
    pub async fn cached_page(&self, limit: i64, offset: i64) -> AppResult<Vec<PokemonSummary>> {
        self.store.read_range(limit, offset).await
    }

    /// Size and extent of the local cache.
    pub async fn cache_stats(&self) -> AppResult<CacheStats> {
        Ok(CacheStats {
            count: self.store.count().await?,
            max_position: self.store.max_position().await?,
        })
    }

    /// Clear the local cache and rewind pagination to the first page.
    pub async fn reset(&self) -> AppResult<u64> {
        let mut cursor = self.cursor.lock().await;
        let removed = self.store.clear().await?;
        *cursor = self.initial;

        info!(removed, "Catalog cache reset");
        Ok(removed)
    }
}
