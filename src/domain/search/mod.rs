//! Search domain: one query across collections, tokens, NFTs and accounts.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::Chain;
use serde::{Deserialize, Serialize};

pub use convert::SearchResultError;

// ─── SearchAssetType ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchAssetType {
    Collection,
    Token,
    Nft,
    Account,
}

impl SearchAssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Collection => "collection",
            Self::Token => "token",
            Self::Nft => "nft",
            Self::Account => "account",
        }
    }
}

impl std::fmt::Display for SearchAssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── SearchArgs ──────────────────────────────────────────────────────────────

/// Search query. Every filter is independent and optional; filtering is done
/// server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchArgs {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chains: Option<Vec<Chain>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_types: Option<Vec<SearchAssetType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl SearchArgs {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn chains(mut self, chains: Vec<Chain>) -> Self {
        self.chains = Some(chains);
        self
    }

    pub fn asset_types(mut self, asset_types: Vec<SearchAssetType>) -> Self {
        self.asset_types = Some(asset_types);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

// ─── Result payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionSearchResult {
    /// Collection slug.
    pub collection: String,
    pub name: String,
    pub image_url: Option<String>,
    pub is_disabled: bool,
    pub is_nsfw: bool,
    pub opensea_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenSearchResult {
    pub address: String,
    pub chain: String,
    pub name: String,
    pub symbol: String,
    pub image_url: Option<String>,
    pub usd_price: String,
    pub decimals: u8,
    pub opensea_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NftSearchResult {
    pub identifier: String,
    pub collection: String,
    pub contract: String,
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub opensea_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountSearchResult {
    pub address: String,
    pub username: Option<String>,
    pub profile_image_url: Option<String>,
    pub opensea_url: String,
}

// ─── SearchResult ────────────────────────────────────────────────────────────

/// One search hit. The variant is the hit's type; there is no way to hold a
/// `token` hit with a collection payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "wire::SearchResultResponse", into = "wire::SearchResultResponse")]
pub enum SearchResult {
    Collection(CollectionSearchResult),
    Token(TokenSearchResult),
    Nft(NftSearchResult),
    Account(AccountSearchResult),
}

impl SearchResult {
    pub fn asset_type(&self) -> SearchAssetType {
        match self {
            SearchResult::Collection(_) => SearchAssetType::Collection,
            SearchResult::Token(_) => SearchAssetType::Token,
            SearchResult::Nft(_) => SearchAssetType::Nft,
            SearchResult::Account(_) => SearchAssetType::Account,
        }
    }

    pub fn as_collection(&self) -> Option<&CollectionSearchResult> {
        match self {
            SearchResult::Collection(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_token(&self) -> Option<&TokenSearchResult> {
        match self {
            SearchResult::Token(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_nft(&self) -> Option<&NftSearchResult> {
        match self {
            SearchResult::Nft(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_account(&self) -> Option<&AccountSearchResult> {
        match self {
            SearchResult::Account(a) => Some(a),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}
