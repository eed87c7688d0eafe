//! reqwest-backed PokeAPI client.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use pokedex_core::config::ApiConfig;
use pokedex_core::error::{AppError, ErrorKind};
use pokedex_core::result::AppResult;
use pokedex_entity::api::{PokemonDetailResponse, PokemonListResponse};

/// Client for the `pokemon` list and detail endpoints.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    base_url: Url,
    http_client: reqwest::Client,
}

impl PokeApiClient {
    /// Build a client from configuration.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            base_url: parse_base_url(&config.base_url)?,
            http_client,
        })
    }

    /// Build a client for `base_url` with default timeouts.
    pub fn with_base_url(base_url: &str) -> AppResult<Self> {
        Self::new(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
    }

    /// The normalised base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET pokemon?limit=<limit>&offset=<offset>`
    pub async fn fetch_page(&self, limit: u32, offset: u32) -> AppResult<PokemonListResponse> {
        let mut url = self.endpoint(&["pokemon"])?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset.to_string());

        self.get_json(url).await
    }

    /// `GET pokemon/{id}`
    pub async fn fetch_detail(&self, id: &str) -> AppResult<PokemonDetailResponse> {
        let url = self.endpoint(&["pokemon", id])?;

        self.get_json(url).await.map_err(|e| {
            if e.is(ErrorKind::NotFound) {
                AppError::not_found(format!("Pokemon '{id}' does not exist"))
            } else {
                e
            }
        })
    }

    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::configuration(format!("Base URL '{}' cannot have a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> AppResult<T> {
        debug!(%url, "GET");

        let response = self.http_client.get(url.clone()).send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Transport,
                format!("Failed to send GET {url}: {e}"),
                e,
            )
        })?;

        let status = response.status();
        match status {
            s if s.is_success() => {}
            StatusCode::NOT_FOUND => {
                return Err(AppError::not_found(format!("GET {url} returned 404")));
            }
            code => {
                let message = response.text().await.unwrap_or_default();
                return Err(AppError::transport(format!(
                    "GET {url} failed with [{code}]: {message}"
                )));
            }
        }

        response.json::<T>().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Decode,
                format!("Failed to decode response of GET {url}: {e}"),
                e,
            )
        })
    }
}

/// Parse the configured base URL, forcing a trailing slash so that joined
/// paths extend it instead of replacing its last segment.
fn parse_base_url(raw: &str) -> AppResult<Url> {
    let mut url = Url::parse(raw).map_err(|e| {
        AppError::with_source(
            ErrorKind::Configuration,
            format!("Invalid API base URL '{raw}': {e}"),
            e,
        )
    })?;
    if url.cannot_be_a_base() {
        return Err(AppError::configuration(format!(
            "API base URL '{raw}' cannot have a path"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
