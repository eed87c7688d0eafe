//! Headless presentation state for a catalog browsing screen.

pub mod holder;
pub mod state;

pub use holder::CatalogBrowser;
pub use state::{BrowserState, DetailState, ListState};
