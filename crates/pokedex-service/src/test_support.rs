//! Scripted collaborators shared by the unit tests of this crate.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use pokedex_core::AppError;
use pokedex_core::result::AppResult;
use pokedex_database::migration::run_migrations;
use pokedex_database::{DatabasePool, PokemonRepository};
use pokedex_entity::PokemonSummary;
use pokedex_entity::api::{
    NamedResource, PokemonDetailResponse, PokemonListItem, PokemonListResponse, Sprites, StatSlot,
    TypeSlot,
};

use crate::catalog::{CatalogSource, CatalogStore};

/// In-memory [`CatalogSource`] answering from scripted responses and
/// recording every request it receives.
#[derive(Default)]
pub struct FakeSource {
    pages: Mutex<VecDeque<AppResult<PokemonListResponse>>>,
    page_requests: Mutex<Vec<(u32, u32)>>,
    details: Mutex<HashMap<String, AppResult<PokemonDetailResponse>>>,
    detail_requests: Mutex<Vec<String>>,
    page_gate: Mutex<Option<Arc<Notify>>>,
    detail_gates: Mutex<HashMap<String, Arc<Notify>>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer to the next page request.
    pub fn push_page(&self, page: AppResult<PokemonListResponse>) {
        self.pages.lock().unwrap().push_back(page);
    }

    /// Answer for detail requests of `id`.
    pub fn set_detail(&self, id: &str, detail: AppResult<PokemonDetailResponse>) {
        self.details.lock().unwrap().insert(id.to_string(), detail);
    }

    /// Hold every page request until the returned handle is notified.
    pub fn gate_pages(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.page_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    /// Hold detail requests for `id` until the returned handle is notified.
    pub fn gate_detail(&self, id: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.detail_gates
            .lock()
            .unwrap()
            .insert(id.to_string(), gate.clone());
        gate
    }

    pub fn page_requests(&self) -> Vec<(u32, u32)> {
        self.page_requests.lock().unwrap().clone()
    }

    pub fn detail_requests(&self) -> Vec<String> {
        self.detail_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogSource for FakeSource {
    async fn fetch_page(&self, limit: u32, offset: u32) -> AppResult<PokemonListResponse> {
        self.page_requests.lock().unwrap().push((limit, offset));

        let gate = self.page_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::internal("no scripted page left")))
    }

    async fn fetch_detail(&self, id: &str) -> AppResult<PokemonDetailResponse> {
        self.detail_requests.lock().unwrap().push(id.to_string());

        let gate = self.detail_gates.lock().unwrap().get(id).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        match self.details.lock().unwrap().get(id) {
            Some(Ok(detail)) => Ok(detail.clone()),
            Some(Err(e)) => Err(e.clone()),
            None => Err(AppError::not_found(format!("Pokemon '{id}' does not exist"))),
        }
    }
}

/// A store whose every operation fails.
pub struct FailingStore;

#[async_trait]
impl CatalogStore for FailingStore {
    async fn upsert_all(&self, _items: &[PokemonSummary]) -> AppResult<()> {
        Err(AppError::storage("disk I/O error"))
    }

    async fn read_range(&self, _limit: i64, _offset: i64) -> AppResult<Vec<PokemonSummary>> {
        Err(AppError::storage("disk I/O error"))
    }

    async fn count(&self) -> AppResult<i64> {
        Err(AppError::storage("disk I/O error"))
    }

    async fn max_position(&self) -> AppResult<Option<i64>> {
        Err(AppError::storage("disk I/O error"))
    }

    async fn clear(&self) -> AppResult<u64> {
        Err(AppError::storage("disk I/O error"))
    }
}

/// Migrated in-memory SQLite store.
pub async fn memory_store() -> Arc<PokemonRepository> {
    let db = DatabasePool::in_memory().await.unwrap();
    run_migrations(db.pool()).await.unwrap();
    Arc::new(PokemonRepository::new(db.into_pool()))
}

/// List page made of `(name, id)` entries.
pub fn page(next: Option<&str>, entries: &[(&str, u32)]) -> PokemonListResponse {
    PokemonListResponse {
        count: 1302,
        next: next.map(str::to_owned),
        previous: None,
        results: entries
            .iter()
            .map(|(name, id)| PokemonListItem {
                name: name.to_string(),
                url: format!("https://pokeapi.co/api/v2/pokemon/{id}/"),
            })
            .collect(),
    }
}

/// Minimal detail payload.
pub fn detail_response(id: i64, name: &str) -> PokemonDetailResponse {
    let named = |n: &str| NamedResource {
        name: n.to_string(),
        url: String::new(),
    };
    PokemonDetailResponse {
        id,
        name: name.to_string(),
        height: 4,
        weight: 60,
        types: vec![TypeSlot {
            slot: 1,
            kind: named("electric"),
        }],
        stats: vec![StatSlot {
            base_stat: 35,
            effort: 0,
            stat: named("hp"),
        }],
        abilities: Vec::new(),
        sprites: Sprites::default(),
    }
}
