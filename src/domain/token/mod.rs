//! Token domain: fungible token listings, details and swap quotes.

pub mod client;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ─── Token ───────────────────────────────────────────────────────────────────

/// A fungible token as listed by the token endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    pub address: String,
    pub chain: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub image_url: Option<String>,
    pub opensea_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usd_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap_usd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_24h: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_24h: Option<f64>,
}

pub type GetTokenResponse = Token;

/// One page of a ranked token list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokensPage {
    pub tokens: Vec<Token>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

pub type GetTrendingTokensResponse = TokensPage;
pub type GetTopTokensResponse = TokensPage;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GetTokensArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Opaque cursor from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl GetTokensArgs {
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn next(mut self, cursor: impl Into<String>) -> Self {
        self.next = Some(cursor.into());
        self
    }
}

// ─── Swap quotes ─────────────────────────────────────────────────────────────

/// Swap quote request. Required fields are checked by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GetSwapQuoteArgs {
    pub token_in: String,
    pub token_out: String,
    /// Amount of `token_in` in base units.
    pub amount: String,
    pub chain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taker_address: Option<String>,
    /// Percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slippage: Option<f64>,
}

impl GetSwapQuoteArgs {
    pub fn new(
        token_in: impl Into<String>,
        token_out: impl Into<String>,
        amount: impl Into<String>,
        chain: impl Into<String>,
    ) -> Self {
        Self {
            token_in: token_in.into(),
            token_out: token_out.into(),
            amount: amount.into(),
            chain: chain.into(),
            taker_address: None,
            slippage: None,
        }
    }

    pub fn taker_address(mut self, address: impl Into<String>) -> Self {
        self.taker_address = Some(address.into());
        self
    }

    pub fn slippage(mut self, slippage: f64) -> Self {
        self.slippage = Some(slippage);
        self
    }
}

/// A price/route estimate. Not a binding commitment.
///
/// Only `price` and `route` are typed; everything else the server sends is
/// kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwapQuote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub type GetSwapQuoteResponse = SwapQuote;
