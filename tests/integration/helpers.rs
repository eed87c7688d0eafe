//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::{Value, json};

use pokedex_client::PokeApiClient;
use pokedex_database::migration::run_migrations;
use pokedex_database::{DatabasePool, PokemonRepository};
use pokedex_service::{CatalogBrowser, CatalogService};

/// Test application context
pub struct TestApp {
    /// Mock PokeAPI server
    pub server: ServerGuard,
    /// Repository over the in-memory cache, for direct assertions
    pub store: PokemonRepository,
    /// Catalog wired to the mock server and the in-memory cache
    pub catalog: Arc<CatalogService>,
    /// Browser driving `catalog`
    pub browser: CatalogBrowser,
}

impl TestApp {
    /// Create a new test application with the given page size
    pub async fn new(page_size: u32) -> Self {
        let server = Server::new_async().await;

        let db = DatabasePool::in_memory()
            .await
            .expect("Failed to open in-memory database");
        run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");
        let store = PokemonRepository::new(db.into_pool());

        let client = PokeApiClient::with_base_url(&server.url()).expect("Failed to build client");
        let catalog = Arc::new(CatalogService::new(
            Arc::new(client),
            Arc::new(store.clone()),
            page_size,
        ));
        let browser = CatalogBrowser::new(Arc::clone(&catalog));

        Self {
            server,
            store,
            catalog,
            browser,
        }
    }

    /// Detail URL of `id` on the mock server
    pub fn detail_url(&self, id: u32) -> String {
        format!("{}/pokemon/{id}/", self.server.url())
    }

    /// Link to the page at `offset` on the mock server
    pub fn page_link(&self, offset: u32, limit: u32) -> String {
        format!("{}/pokemon?offset={offset}&limit={limit}", self.server.url())
    }

    /// Serve one list page for the given query, expected to be hit once
    pub async fn mock_page(
        &mut self,
        limit: u32,
        offset: u32,
        next: Option<String>,
        entries: &[(&str, u32)],
    ) -> Mock {
        self.mock_page_hits(limit, offset, next, entries, 1).await
    }

    /// Serve one list page for the given query, expected to be hit `hits` times
    pub async fn mock_page_hits(
        &mut self,
        limit: u32,
        offset: u32,
        next: Option<String>,
        entries: &[(&str, u32)],
        hits: usize,
    ) -> Mock {
        let results: Vec<Value> = entries
            .iter()
            .map(|(name, id)| json!({ "name": name, "url": self.detail_url(*id) }))
            .collect();
        let body = json!({
            "count": 1302,
            "next": next,
            "previous": null,
            "results": results,
        });

        self.server
            .mock("GET", "/pokemon")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), limit.to_string()),
                Matcher::UrlEncoded("offset".into(), offset.to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(hits)
            .create_async()
            .await
    }

    /// Serve a failing list page for any query
    pub async fn mock_page_failure(&mut self, status: usize) -> Mock {
        self.server
            .mock("GET", "/pokemon")
            .match_query(Matcher::Any)
            .with_status(status)
            .with_body("upstream unavailable")
            .create_async()
            .await
    }

    /// Serve a detail payload
    pub async fn mock_detail(&mut self, id: u32, body: Value) -> Mock {
        self.server
            .mock("GET", format!("/pokemon/{id}").as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await
    }
}

/// Bulbasaur detail payload with every image variant present
pub fn bulbasaur() -> Value {
    json!({
        "id": 1,
        "name": "bulbasaur",
        "height": 7,
        "weight": 69,
        "types": [
            {"slot": 1, "type": {"name": "grass", "url": ""}},
            {"slot": 2, "type": {"name": "poison", "url": ""}}
        ],
        "stats": [
            {"base_stat": 45, "effort": 0, "stat": {"name": "hp", "url": ""}},
            {"base_stat": 49, "effort": 0, "stat": {"name": "attack", "url": ""}},
            {"base_stat": 49, "effort": 1, "stat": {"name": "defense", "url": ""}}
        ],
        "abilities": [
            {"ability": {"name": "overgrow", "url": ""}, "is_hidden": false, "slot": 1},
            {"ability": {"name": "chlorophyll", "url": ""}, "is_hidden": true, "slot": 3}
        ],
        "sprites": {
            "front_default": "https://img.example/front/1.png",
            "other": {
                "official-artwork": {"front_default": "https://img.example/artwork/1.png"}
            }
        }
    })
}

/// Ditto detail payload without any sprite
pub fn ditto() -> Value {
    json!({
        "id": 132,
        "name": "ditto",
        "height": 3,
        "weight": 40,
        "types": [{"slot": 1, "type": {"name": "normal", "url": ""}}],
        "stats": [{"base_stat": 48, "effort": 1, "stat": {"name": "hp", "url": ""}}],
        "abilities": [{"ability": {"name": "limber", "url": ""}, "is_hidden": false, "slot": 1}],
        "sprites": {"front_default": null, "other": {"official-artwork": {"front_default": null}}}
    })
}
