//! High-level client: `OpenSeaClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared transport and the accessor methods.

use crate::domain::offer::client::Offers;
use crate::domain::search::client::Search;
use crate::domain::token::client::Tokens;
use crate::error::SdkError;
use crate::fetcher::Fetcher;
use crate::shared::Chain;

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::offer::client::Offers as OffersClient;
pub use crate::domain::search::client::Search as SearchClient;
pub use crate::domain::token::client::Tokens as TokensClient;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.offers()`, `client.search()`, `client.tokens()`.
///
/// Cloning is cheap; clones share the transport.
#[derive(Clone)]
pub struct OpenSeaClient {
    pub(crate) fetcher: Arc<dyn Fetcher>,
    /// Default chain for chain-scoped calls that take no explicit override.
    pub(crate) chain: Chain,
}

impl OpenSeaClient {
    pub fn builder() -> OpenSeaClientBuilder {
        OpenSeaClientBuilder::default()
    }

    /// Wrap an existing transport.
    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>, chain: Chain) -> Self {
        Self { fetcher, chain }
    }

    pub fn chain(&self) -> Chain {
        self.chain
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn offers(&self) -> Offers<'_> {
        Offers { client: self }
    }

    pub fn search(&self) -> Search<'_> {
        Search { client: self }
    }

    pub fn tokens(&self) -> Tokens<'_> {
        Tokens { client: self }
    }

    // ── Typed transport helpers ──────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<Value>,
    ) -> Result<T, SdkError> {
        let value = self.fetcher.get(path, query).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
    ) -> Result<T, SdkError> {
        let value = self.fetcher.post(path, body).await?;
        Ok(serde_json::from_value(value)?)
    }
}

impl std::fmt::Debug for OpenSeaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenSeaClient")
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct OpenSeaClientBuilder {
    base_url: String,
    api_key: Option<String>,
    chain: Chain,
    timeout: Duration,
    #[cfg(feature = "http")]
    retry: crate::http::RetryPolicy,
    fetcher: Option<Arc<dyn Fetcher>>,
}

impl Default for OpenSeaClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            api_key: None,
            chain: Chain::default(),
            timeout: crate::network::DEFAULT_TIMEOUT,
            #[cfg(feature = "http")]
            retry: crate::http::RetryPolicy::Idempotent,
            fetcher: None,
        }
    }
}

impl OpenSeaClientBuilder {
    /// Builder seeded from `OPENSEA_API_KEY` / `OPENSEA_API_URL` when they are set.
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        if let Ok(key) = std::env::var(crate::network::API_KEY_ENV) {
            if !key.is_empty() {
                builder.api_key = Some(key);
            }
        }
        if let Ok(url) = std::env::var(crate::network::API_URL_ENV) {
            if !url.is_empty() {
                builder.base_url = url;
            }
        }
        builder
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Default chain for chain-scoped calls and offer payloads.
    pub fn chain(mut self, chain: Chain) -> Self {
        self.chain = chain;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retry behavior for GET requests. POST requests are never retried.
    #[cfg(feature = "http")]
    pub fn retry(mut self, config: crate::http::RetryConfig) -> Self {
        self.retry = crate::http::RetryPolicy::Custom(config);
        self
    }

    /// Disable GET retries entirely.
    #[cfg(feature = "http")]
    pub fn no_retry(mut self) -> Self {
        self.retry = crate::http::RetryPolicy::None;
        self
    }

    /// Use a custom transport instead of the built-in HTTP one.
    ///
    /// `base_url`, `api_key`, `timeout` and retry settings are ignored when set.
    pub fn fetcher(mut self, fetcher: Arc<dyn Fetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    pub fn build(self) -> Result<OpenSeaClient, SdkError> {
        let fetcher = match self.fetcher {
            Some(fetcher) => fetcher,
            None => self.default_fetcher()?,
        };
        Ok(OpenSeaClient {
            fetcher,
            chain: self.chain,
        })
    }

    #[cfg(feature = "http")]
    fn default_fetcher(&self) -> Result<Arc<dyn Fetcher>, SdkError> {
        let http = crate::http::HttpFetcher::with_options(
            &self.base_url,
            self.api_key.clone(),
            self.timeout,
            self.retry.clone(),
        )?;
        Ok(Arc::new(http))
    }

    #[cfg(not(feature = "http"))]
    fn default_fetcher(&self) -> Result<Arc<dyn Fetcher>, SdkError> {
        Err(SdkError::Other(format!(
            "No fetcher configured for {} and the `http` feature is disabled",
            self.base_url
        )))
    }
}
