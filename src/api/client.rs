//! PokeAPI client implementation
//!
//! Async HTTP client for the paginated location-area catalog. The fetch is
//! exposed behind the [`PageSource`] trait so the REPL can run against a
//! stub in tests.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::api::types::LocationPage;
use crate::core::{Config, PokedexError, Result};

/// Anything that can produce one catalog page for a cursor URL
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch and decode the page at `url`. One request, no retries.
    async fn fetch_page(&self, url: &str) -> Result<LocationPage>;
}

/// HTTP-backed page source
#[derive(Clone)]
pub struct PokeApiClient {
    client: Client,
}

impl PokeApiClient {
    /// Create a client from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .build()
            .map_err(|e| PokedexError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for PokeApiClient {
    async fn fetch_page(&self, url: &str) -> Result<LocationPage> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| PokedexError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::HttpStatus(status));
        }

        let body = response.bytes().await.map_err(PokedexError::Body)?;
        let page = serde_json::from_slice(&body)?;
        Ok(page)
    }
}
