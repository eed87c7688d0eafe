//! State holder driving the catalog in response to user intent.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::{debug, info, warn};

use pokedex_entity::PokemonSummary;

use super::state::BrowserState;
use crate::catalog::CatalogService;

/// Holds the observable [`BrowserState`] and turns user intent into catalog
/// calls.
///
/// Every state change is an atomic read-modify-write on a `watch` channel,
/// so completions racing each other never lose updates. Observers call
/// [`CatalogBrowser::subscribe`] to be woken on change.
#[derive(Debug)]
pub struct CatalogBrowser {
    catalog: Arc<CatalogService>,
    state: watch::Sender<BrowserState>,
    /// Ticket of the most recent selection.
    selection: AtomicU64,
}

impl CatalogBrowser {
    pub fn new(catalog: Arc<CatalogService>) -> Self {
        Self {
            catalog,
            state: watch::Sender::new(BrowserState::default()),
            selection: AtomicU64::new(0),
        }
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<BrowserState> {
        self.state.subscribe()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> BrowserState {
        self.state.borrow().clone()
    }

    /// Load the next page and append it to the list.
    ///
    /// Returns `false` without doing anything when a load is already in
    /// flight. Used both for the initial load and for scroll-triggered
    /// loads.
    pub async fn load_more(&self) -> bool {
        let started = self.state.send_if_modified(|state| {
            if state.list.is_loading {
                return false;
            }
            state.list.is_loading = true;
            true
        });
        if !started {
            debug!("Page load already in flight, ignoring");
            return false;
        }

        let result = self.catalog.fetch_next_page().await;

        self.state.send_modify(|state| {
            state.list.is_loading = false;
            match result {
                Ok(page) => {
                    state.list.append(page);
                    state.list.error = None;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load catalog page");
                    state.list.error = Some(e.to_string());
                }
            }
        });
        true
    }

    /// Show the detail panel and load the detail of `item`.
    ///
    /// Returns whether the loaded result was applied. A result is dropped
    /// when another selection started while it was in flight. A previous
    /// error stays visible until a detail loads successfully.
    pub async fn select_item(&self, item: &PokemonSummary) -> bool {
        let ticket = self.selection.fetch_add(1, Ordering::SeqCst) + 1;

        self.state.send_modify(|state| {
            state.is_detail_visible = true;
            state.detail.selected = Some(item.clone());
            state.detail.is_loading = true;
        });

        let result = self.catalog.fetch_detail(&item.url).await;

        let applied = self.state.send_if_modified(|state| {
            if self.selection.load(Ordering::SeqCst) != ticket {
                return false;
            }
            state.detail.is_loading = false;
            match &result {
                Ok(detail) => {
                    state.detail.detail = Some(detail.clone());
                    state.detail.error = None;
                }
                Err(e) => {
                    warn!(name = %item.name, error = %e, "Failed to load pokemon detail");
                    state.detail.error = Some(e.to_string());
                }
            }
            true
        });

        if applied {
            info!(name = %item.name, ok = result.is_ok(), "Detail loaded");
        } else {
            debug!(name = %item.name, "Discarding superseded detail result");
        }
        applied
    }

    /// Hide the detail panel. Detail state is kept.
    pub fn dismiss_detail(&self) {
        self.state.send_modify(|state| state.is_detail_visible = false);
    }
}
