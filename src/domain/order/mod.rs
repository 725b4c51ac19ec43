//! Order domain: Seaport protocol data and the orders query filter.

pub mod wire;

use serde::{Deserialize, Serialize};

pub use wire::{ConsiderationItem, OfferItem, OrderParameters, ProtocolData};

// ─── Ordering ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    CreatedDate,
    EthPrice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    Desc,
}

// ─── OrdersQueryOptions ──────────────────────────────────────────────────────

/// Filter for the `/orders/{chain}/{protocol}/{side}` endpoints.
///
/// Serializes to the snake_case query object the API expects; unset fields are
/// not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrdersQueryOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_contract_address: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub token_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_token_address: Option<String>,
    /// Unix seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listed_after: Option<u64>,
    /// Unix seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listed_before: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_direction: Option<OrderDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_english: Option<bool>,
}

impl OrdersQueryOptions {
    /// Orders on a single NFT.
    pub fn for_nft(asset_contract_address: &str, token_id: &str) -> Self {
        Self {
            asset_contract_address: Some(asset_contract_address.to_string()),
            token_ids: vec![token_id.to_string()],
            ..Default::default()
        }
    }

    pub fn page(mut self, limit: Option<u32>, next: Option<&str>) -> Self {
        self.limit = limit;
        self.next = next.map(str::to_string);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nft_options_serialize_minimal() {
        let options = OrdersQueryOptions::for_nft("0xabc", "42");
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({ "asset_contract_address": "0xabc", "token_ids": ["42"] })
        );
    }

    #[test]
    fn test_page_and_ordering() {
        let options = OrdersQueryOptions {
            order_by: Some(OrderBy::EthPrice),
            order_direction: Some(OrderDirection::Desc),
            ..OrdersQueryOptions::for_nft("0xabc", "1")
        }
        .page(Some(20), Some("cursor"));
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["limit"], 20);
        assert_eq!(value["next"], "cursor");
        assert_eq!(value["order_by"], "eth_price");
        assert_eq!(value["order_direction"], "desc");
    }

    #[test]
    fn test_empty_options_serialize_to_empty_object() {
        let value = serde_json::to_value(OrdersQueryOptions::default()).unwrap();
        assert_eq!(value, json!({}));
    }
}
