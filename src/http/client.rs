//! Default transport: `HttpFetcher`.
//!
//! Joins request paths onto the base URL, attaches the API key, flattens query
//! objects and maps non-2xx statuses onto [`HttpError`]. GET requests follow the
//! configured retry policy; POST requests are sent exactly once.

use crate::error::{HttpError, SdkError};
use crate::fetcher::Fetcher;
use crate::http::retry::{parse_retry_after, RetryConfig, RetryPolicy};
use crate::network::{API_KEY_HEADER, DEFAULT_TIMEOUT};
use crate::shared::query::to_pairs;

use async_lock::RwLock;
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// reqwest-backed [`Fetcher`] for the OpenSea REST API.
pub struct HttpFetcher {
    base_url: String,
    client: Client,
    /// API key sent as `X-API-KEY`. Never exposed publicly.
    api_key: Arc<RwLock<Option<String>>>,
    /// Policy for GET requests.
    get_policy: RetryPolicy,
}

impl HttpFetcher {
    /// Unauthenticated fetcher with default timeout and idempotent GET retries.
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Self::with_options(base_url, None, DEFAULT_TIMEOUT, RetryPolicy::Idempotent)
    }

    pub fn with_options(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
        get_policy: RetryPolicy,
    ) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
            api_key: Arc::new(RwLock::new(api_key)),
            get_policy,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace (or clear) the API key used for subsequent requests.
    pub async fn set_api_key(&self, api_key: Option<String>) {
        *self.api_key.write().await = api_key;
    }

    pub async fn has_api_key(&self) -> bool {
        self.api_key.read().await.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn request_with_retry(
        &self,
        method: Method,
        path: &str,
        query: Option<&Value>,
        body: Option<&Value>,
        retry: &RetryPolicy,
    ) -> Result<Value, SdkError> {
        let url = self.url(path);
        let Some(config) = retry.config() else {
            return self.do_request(&method, &url, query, body).await;
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request(&method, &url, query, body).await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    let (should_retry, server_delay) = classify(&e, &config);

                    if should_retry && attempt < config.max_retries {
                        let delay = server_delay.unwrap_or_else(|| config.delay_for_attempt(attempt));
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying {} {}",
                            method,
                            path
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        if should_retry {
                            tracing::warn!(attempts = attempt + 1, "Giving up on {} {}", method, path);
                        }
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        }
        .into())
    }

    async fn do_request(
        &self,
        method: &Method,
        url: &str,
        query: Option<&Value>,
        body: Option<&Value>,
    ) -> Result<Value, SdkError> {
        let mut req = self.client.request(method.clone(), url);

        if let Some(key) = self.api_key.read().await.as_ref() {
            req = req.header(API_KEY_HEADER, key);
        }
        if let Some(q) = query {
            req = req.query(&to_pairs(q));
        }
        if let Some(b) = body {
            req = req.json(b);
        }

        tracing::debug!("{} {}", method, url);
        let resp = req.send().await.map_err(transport_error)?;
        let status = resp.status();

        if status.is_success() {
            let text = resp.text().await.map_err(transport_error)?;
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_str(&text)?);
        }

        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_retry_after);
        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        let err = match status_code {
            401 => HttpError::Unauthorized,
            404 => HttpError::NotFound(body_text),
            429 => HttpError::RateLimited { retry_after_ms },
            400..=499 => HttpError::BadRequest(body_text),
            _ => HttpError::ServerError {
                status: status_code,
                body: body_text,
            },
        };
        Err(err.into())
    }
}

/// Timeouts get their own variant; everything else stays a reqwest error.
fn transport_error(err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Reqwest(err)
    }
}

/// Whether an error is worth another attempt, plus any delay the server asked for.
fn classify(err: &SdkError, config: &RetryConfig) -> (bool, Option<Duration>) {
    let SdkError::Http(http) = err else {
        return (false, None);
    };
    match http {
        HttpError::ServerError { status, .. } => (config.is_retryable_status(*status), None),
        HttpError::RateLimited { retry_after_ms } => (
            config.is_retryable_status(429),
            retry_after_ms.map(|ms| config.server_delay(ms)),
        ),
        HttpError::Timeout => (true, None),
        HttpError::Reqwest(re) => {
            #[cfg(not(target_arch = "wasm32"))]
            let retryable = re.is_connect() || re.is_request();
            #[cfg(target_arch = "wasm32")]
            let retryable = re.is_request();
            (retryable, None)
        }
        _ => (false, None),
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Fetcher for HttpFetcher {
    async fn get(&self, path: &str, query: Option<Value>) -> Result<Value, SdkError> {
        self.request_with_retry(Method::GET, path, query.as_ref(), None, &self.get_policy)
            .await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, SdkError> {
        self.request_with_retry(Method::POST, path, None, Some(&body), &RetryPolicy::None)
            .await
    }
}

impl Clone for HttpFetcher {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            api_key: self.api_key.clone(),
            get_policy: self.get_policy.clone(),
        }
    }
}
