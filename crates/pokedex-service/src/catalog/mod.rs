//! Catalog repository: pagination, cache merging, and detail lookup.

pub mod cursor;
pub mod detail;
pub mod service;
pub mod source;

pub use cursor::Cursor;
pub use detail::{fallback_image_url, map_detail};
pub use service::{CacheStats, CatalogService};
pub use source::{CatalogSource, CatalogStore};
