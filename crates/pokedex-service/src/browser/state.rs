//! Observable state published by [`super::CatalogBrowser`].

use std::sync::Arc;

use serde::Serialize;

use pokedex_entity::{PokemonDetail, PokemonSummary};

/// The accumulated catalog list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListState {
    /// Every entry loaded so far, in position order.
    ///
    /// Append-only; each successful load publishes a new slice so earlier
    /// snapshots stay valid.
    pub items: Arc<[PokemonSummary]>,
    /// A page load is in flight.
    pub is_loading: bool,
    /// Message of the last failed load, cleared by the next success.
    pub error: Option<String>,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            items: Arc::from(Vec::new()),
            is_loading: false,
            error: None,
        }
    }
}

impl ListState {
    /// Append a freshly loaded page.
    pub(crate) fn append(&mut self, page: Vec<PokemonSummary>) {
        if page.is_empty() {
            return;
        }
        let mut items = Vec::with_capacity(self.items.len() + page.len());
        items.extend_from_slice(&self.items);
        items.extend(page);
        self.items = items.into();
    }
}

/// State of the detail panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetailState {
    /// Entry most recently selected.
    pub selected: Option<PokemonSummary>,
    /// Last successfully loaded detail.
    pub detail: Option<PokemonDetail>,
    /// A detail load is in flight.
    pub is_loading: bool,
    /// Message of the last failed detail load.
    pub error: Option<String>,
}

/// Everything an observer needs to render the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BrowserState {
    pub list: ListState,
    pub detail: DetailState,
    pub is_detail_visible: bool,
}
