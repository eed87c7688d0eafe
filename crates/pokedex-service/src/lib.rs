//! # pokedex-service
//!
//! Application layer of the Pokedex client.
//!
//! - [`catalog`] is the catalog repository: it owns the pagination cursor,
//!   merges fetched pages into the local store, and maps detail payloads.
//! - [`browser`] is the headless presentation state holder that drives the
//!   repository in response to user intent and publishes observable state.
//!
//! Services follow constructor injection; collaborators are provided at
//! construction time via `Arc` references.

pub mod browser;
pub mod catalog;

#[cfg(test)]
pub(crate) mod test_support;

pub use browser::{BrowserState, CatalogBrowser, DetailState, ListState};
pub use catalog::{CacheStats, CatalogService, CatalogSource, CatalogStore, Cursor};
