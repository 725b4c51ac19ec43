//! Transport seam shared by every sub-client.
//!
//! Sub-clients only build paths, queries and bodies; a [`Fetcher`] performs the
//! request and hands back raw JSON. Authentication, retries and timeouts are the
//! fetcher's business. [`crate::http::HttpFetcher`] is the reqwest-backed
//! implementation; tests plug in their own.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::SdkError;

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait Fetcher: Send + Sync {
    /// GET `path` with an optional query object.
    ///
    /// `None` means the caller passed no arguments at all, which is not the
    /// same as `Some(json!({}))`.
    async fn get(&self, path: &str, query: Option<Value>) -> Result<Value, SdkError>;

    /// POST `body` as JSON to `path`.
    async fn post(&self, path: &str, body: Value) -> Result<Value, SdkError>;
}
