//! Wire types for Seaport orders as the API sends and accepts them.

use crate::shared::serde_util;
use serde::{Deserialize, Serialize};

/// A Seaport order: parameters plus the offerer's signature.
///
/// Built and signed outside this crate; `post_collection_offer` forwards it as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProtocolData {
    pub parameters: OrderParameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// Seaport `OrderComponents`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderParameters {
    pub offerer: String,
    pub zone: String,
    pub offer: Vec<OfferItem>,
    pub consideration: Vec<ConsiderationItem>,
    pub order_type: u8,
    #[serde(with = "serde_util::string_or_number")]
    pub start_time: String,
    #[serde(with = "serde_util::string_or_number")]
    pub end_time: String,
    pub zone_hash: String,
    #[serde(with = "serde_util::string_or_number")]
    pub salt: String,
    pub conduit_key: String,
    pub total_original_consideration_items: u32,
    #[serde(with = "serde_util::string_or_number")]
    pub counter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OfferItem {
    pub item_type: u8,
    pub token: String,
    #[serde(with = "serde_util::string_or_number")]
    pub identifier_or_criteria: String,
    #[serde(with = "serde_util::string_or_number")]
    pub start_amount: String,
    #[serde(with = "serde_util::string_or_number")]
    pub end_amount: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsiderationItem {
    pub item_type: u8,
    pub token: String,
    #[serde(with = "serde_util::string_or_number")]
    pub identifier_or_criteria: String,
    #[serde(with = "serde_util::string_or_number")]
    pub start_amount: String,
    #[serde(with = "serde_util::string_or_number")]
    pub end_amount: String,
    pub recipient: String,
}
