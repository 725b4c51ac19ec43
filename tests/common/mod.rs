//! Recording transport shared by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use opensea_sdk::client::OpenSeaClient;
use opensea_sdk::error::{HttpError, SdkError};
use opensea_sdk::fetcher::Fetcher;
use opensea_sdk::shared::Chain;

/// One request as the transport saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub query: Option<Value>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
enum Reply {
    Json(Value),
    Fail(String),
    BadRequest(String),
}

/// Answers every request with the configured reply and records it.
#[derive(Debug)]
pub struct MockFetcher {
    calls: Mutex<Vec<Call>>,
    reply: Mutex<Reply>,
}

impl MockFetcher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply: Mutex::new(Reply::Json(Value::Null)),
        })
    }

    pub fn resolves(&self, value: Value) {
        *self.reply.lock().unwrap() = Reply::Json(value);
    }

    /// Fail with a plain transport error carrying `message`.
    pub fn rejects(&self, message: &str) {
        *self.reply.lock().unwrap() = Reply::Fail(message.to_string());
    }

    /// Fail the way the HTTP transport reports a 400.
    pub fn rejects_bad_request(&self, message: &str) {
        *self.reply.lock().unwrap() = Reply::BadRequest(message.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn only_call(&self) -> Call {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {calls:?}");
        calls.into_iter().next().unwrap()
    }

    fn answer(&self, call: Call) -> Result<Value, SdkError> {
        self.calls.lock().unwrap().push(call);
        match self.reply.lock().unwrap().clone() {
            Reply::Json(value) => Ok(value),
            Reply::Fail(message) => Err(SdkError::Other(message)),
            Reply::BadRequest(message) => Err(HttpError::BadRequest(message).into()),
        }
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn get(&self, path: &str, query: Option<Value>) -> Result<Value, SdkError> {
        self.answer(Call {
            method: "GET",
            path: path.to_string(),
            query,
            body: None,
        })
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, SdkError> {
        self.answer(Call {
            method: "POST",
            path: path.to_string(),
            query: None,
            body: Some(body),
        })
    }
}

pub fn client_with(fetcher: &Arc<MockFetcher>) -> OpenSeaClient {
    client_on(fetcher, Chain::Mainnet)
}

pub fn client_on(fetcher: &Arc<MockFetcher>, chain: Chain) -> OpenSeaClient {
    OpenSeaClient::builder()
        .chain(chain)
        .fetcher(fetcher.clone())
        .build()
        .expect("client should build with a custom fetcher")
}
