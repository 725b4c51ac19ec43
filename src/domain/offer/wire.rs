//! Wire types for offer requests and responses (REST).

use super::{NumericTrait, Trait};
use crate::domain::order::{ConsiderationItem, ProtocolData};
use crate::shared::serde_util;
use serde::{Deserialize, Serialize};

// ─── Criteria ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionCriteria {
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContractCriteria {
    pub address: String,
}

/// What a collection offer applies to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OfferCriteria {
    pub collection: CollectionCriteria,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<ContractCriteria>,
    #[serde(rename = "trait", default, skip_serializing_if = "Option::is_none")]
    pub trait_filter: Option<Trait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traits: Option<Vec<Trait>>,
    #[serde(rename = "numericTraits", default, skip_serializing_if = "Option::is_none")]
    pub numeric_traits: Option<Vec<NumericTrait>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoded_token_ids: Option<String>,
}

impl OfferCriteria {
    /// Criteria covering a whole collection.
    pub fn collection(slug: &str) -> Self {
        Self {
            collection: CollectionCriteria {
                slug: slug.to_string(),
            },
            contract: None,
            trait_filter: None,
            traits: None,
            numeric_traits: None,
            encoded_token_ids: None,
        }
    }
}

// ─── Offers ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Price {
    pub currency: String,
    pub decimals: u32,
    #[serde(with = "serde_util::string_or_number")]
    pub value: String,
}

/// An offer as returned by the offers and orders endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    pub order_hash: String,
    pub chain: String,
    pub protocol_data: ProtocolData,
    pub protocol_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria: Option<OfferCriteria>,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A collection (or trait) offer; unlike [`Offer`] the criteria are always present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionOffer {
    pub order_hash: String,
    pub chain: String,
    pub protocol_data: ProtocolData,
    pub protocol_address: String,
    pub criteria: OfferCriteria,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetOffersResponse {
    pub offers: Vec<Offer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

pub type GetBestOfferResponse = Offer;

// ─── Build offer ─────────────────────────────────────────────────────────────

/// Server-chosen order fields the offerer must include before signing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartialParameters {
    pub consideration: Vec<ConsiderationItem>,
    pub zone: String,
    pub zone_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuildOfferResponse {
    #[serde(rename = "partialParameters")]
    pub partial_parameters: PartialParameters,
    pub criteria: OfferCriteria,
}

// ─── Query args ──────────────────────────────────────────────────────────────

/// Cursor pagination shared by the list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Opaque cursor from a previous response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl PageArgs {
    pub fn new(limit: Option<u32>, next: Option<&str>) -> Self {
        Self {
            limit,
            next: next.map(str::to_string),
        }
    }
}

/// Query for offers on one trait value.
///
/// `float_value` / `int_value` are alternate numeric encodings of `value` and
/// are forwarded untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GetTraitOffersArgs {
    #[serde(rename = "type")]
    pub trait_type: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub float_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub int_value: Option<i64>,
}

impl GetTraitOffersArgs {
    pub fn new(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn next(mut self, cursor: impl Into<String>) -> Self {
        self.next = Some(cursor.into());
        self
    }

    pub fn float_value(mut self, value: f64) -> Self {
        self.float_value = Some(value);
        self
    }

    pub fn int_value(mut self, value: i64) -> Self {
        self.int_value = Some(value);
        self
    }
}
