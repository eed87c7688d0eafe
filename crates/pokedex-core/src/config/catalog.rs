//! Catalog pagination configuration.

use serde::{Deserialize, Serialize};

/// Settings for the catalog repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Number of entries requested for the first page. Later pages use the
    /// limit advertised by the server's `next` link.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> u32 {
    10
}
