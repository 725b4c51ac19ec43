//! HTTP transport layer: `HttpFetcher` with per-verb retry policies.

pub mod client;
pub mod retry;

pub use client::HttpFetcher;
pub use retry::{RetryConfig, RetryPolicy};
