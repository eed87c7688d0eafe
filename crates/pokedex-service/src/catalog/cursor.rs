//! Pagination cursor derived from the server's `next` links.

use std::fmt;

use serde::Serialize;
use tracing::debug;
use url::form_urlencoded;

/// Position of the next page to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Cursor {
    /// Another page can be requested with these parameters.
    Page {
        /// Zero-based index of the first entry of the page.
        offset: u32,
        /// Maximum number of entries on the page.
        limit: u32,
    },
    /// The server reported no further pages.
    Exhausted,
}

impl Cursor {
    /// Cursor for the first page.
    pub fn first(limit: u32) -> Self {
        Self::Page { offset: 0, limit }
    }

    /// Whether no further pages exist.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }

    /// Cursor following a successful fetch whose response carried `next`.
    ///
    /// A missing link ends pagination. Otherwise `offset` and `limit` are
    /// read from the link's query string, which may be absolute or relative;
    /// a parameter that is absent or not a non-negative integer keeps its
    /// current value.
    pub fn advance(self, next: Option<&str>) -> Self {
        let Some(link) = next else {
            return Self::Exhausted;
        };
        let Self::Page { offset, limit } = self else {
            return Self::Exhausted;
        };

        let query = link
            .split_once('?')
            .map(|(_, rest)| rest.split('#').next().unwrap_or_default())
            .unwrap_or_default();
        let param = |key: &str| -> Option<u32> {
            form_urlencoded::parse(query.as_bytes())
                .find(|(k, _)| k == key)
                .and_then(|(_, v)| v.parse().ok())
        };

        let advanced = Self::Page {
            offset: param("offset").unwrap_or(offset),
            limit: param("limit").unwrap_or(limit),
        };
        debug!(%link, from = %self, to = %advanced, "Advanced cursor");
        advanced
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page { offset, limit } => write!(f, "offset={offset} limit={limit}"),
            Self::Exhausted => write!(f, "exhausted"),
        }
    }
}
