//! Wire types for search responses (REST).

use super::{
    AccountSearchResult, CollectionSearchResult, NftSearchResult, SearchAssetType,
    TokenSearchResult,
};
use serde::{Deserialize, Serialize};

/// Raw search hit: a `type` tag plus one payload field named after it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResultResponse {
    #[serde(rename = "type")]
    pub result_type: SearchAssetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<CollectionSearchResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<TokenSearchResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nft: Option<NftSearchResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<AccountSearchResult>,
}
