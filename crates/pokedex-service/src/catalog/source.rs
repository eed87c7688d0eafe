//! Collaborator traits of the catalog repository.
//!
//! The repository only talks to the remote catalog and the local store
//! through these traits. The production implementations are the HTTP client
//! and the SQLite repository; tests substitute in-memory fakes.

use async_trait::async_trait;

use pokedex_client::PokeApiClient;
use pokedex_core::result::AppResult;
use pokedex_database::PokemonRepository;
use pokedex_entity::PokemonSummary;
use pokedex_entity::api::{PokemonDetailResponse, PokemonListResponse};

/// Remote source of catalog pages and details.
#[async_trait]
pub trait CatalogSource: Send + Sync + 'static {
    /// Fetch one list page.
    async fn fetch_page(&self, limit: u32, offset: u32) -> AppResult<PokemonListResponse>;

    /// Fetch the detail payload for `id`.
    async fn fetch_detail(&self, id: &str) -> AppResult<PokemonDetailResponse>;
}

/// Persisted, position-ordered cache of list entries.
#[async_trait]
pub trait CatalogStore: Send + Sync + 'static {
    /// Insert or replace every item, keyed on name.
    async fn upsert_all(&self, items: &[PokemonSummary]) -> AppResult<()>;

    /// Entries with `position >= offset`, ascending, at most `limit`.
    async fn read_range(&self, limit: i64, offset: i64) -> AppResult<Vec<PokemonSummary>>;

    /// Number of cached entries.
    async fn count(&self) -> AppResult<i64>;

    /// Highest cached position.
    async fn max_position(&self) -> AppResult<Option<i64>>;

    /// Remove every entry, returning how many were removed.
    async fn clear(&self) -> AppResult<u64>;
}

#[async_trait]
impl CatalogSource for PokeApiClient {
    async fn fetch_page(&self, limit: u32, offset: u32) -> AppResult<PokemonListResponse> {
        PokeApiClient::fetch_page(self, limit, offset).await
    }

    async fn fetch_detail(&self, id: &str) -> AppResult<PokemonDetailResponse> {
        PokeApiClient::fetch_detail(self, id).await
    }
}

#[async_trait]
impl CatalogStore for PokemonRepository {
    async fn upsert_all(&self, items: &[PokemonSummary]) -> AppResult<()> {
        PokemonRepository::upsert_all(self, items).await
    }

    async fn read_range(&self, limit: i64, offset: i64) -> AppResult<Vec<PokemonSummary>> {
        PokemonRepository::read_range(self, limit, offset).await
    }

    async fn count(&self) -> AppResult<i64> {
        PokemonRepository::count(self).await
    }

    async fn max_position(&self) -> AppResult<Option<i64>> {
        PokemonRepository::max_position(self).await
    }

    async fn clear(&self) -> AppResult<u64> {
        PokemonRepository::clear(self).await
    }
}
