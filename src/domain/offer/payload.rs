//! Request bodies for building and posting collection offers.

use super::{OfferCriteria, TraitFilter, TraitFilterArgs, TraitSelection};
use crate::domain::order::ProtocolData;
use crate::network::SEAPORT_V1_6_ADDRESS;
use crate::shared::Chain;
use serde::Serialize;

/// Body of `POST /offers/build`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BuildOfferPayload {
    pub offerer: String,
    pub quantity: u64,
    pub criteria: OfferCriteria,
    pub protocol_address: String,
    pub offer_protection_enabled: bool,
    pub chain: Chain,
}

/// Body of `POST /offers`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PostCollectionOfferPayload {
    pub criteria: OfferCriteria,
    pub protocol_data: ProtocolData,
    pub protocol_address: String,
    pub chain: Chain,
}

impl OfferCriteria {
    /// Criteria for `slug` narrowed by an already validated filter.
    pub fn with_filter(slug: &str, filter: &TraitFilter) -> Self {
        let mut criteria = Self::collection(slug);
        match &filter.selection {
            TraitSelection::None => {}
            TraitSelection::Single(t) => criteria.trait_filter = Some(t.clone()),
            TraitSelection::List(traits) => criteria.traits = Some(traits.clone()),
        }
        if !filter.numeric.is_empty() {
            criteria.numeric_traits = Some(filter.numeric.clone());
        }
        criteria
    }

    /// Criteria for `slug` taken straight from raw filter fields, without validation.
    ///
    /// A non-empty `traits` list wins over the singular pair, and the pair is
    /// only used when both halves are present.
    pub fn from_raw(slug: &str, args: &TraitFilterArgs) -> Self {
        let mut criteria = Self::collection(slug);
        if !args.traits.is_empty() {
            criteria.traits = Some(args.traits.clone());
        } else if let (Some(t), Some(v)) = (args.trait_type(), args.trait_value()) {
            criteria.trait_filter = Some(super::Trait::new(t, v));
        }
        if !args.numeric_traits.is_empty() {
            criteria.numeric_traits = Some(args.numeric_traits.clone());
        }
        criteria
    }
}

pub fn build_collection_offer_payload(
    offerer: &str,
    quantity: u64,
    collection_slug: &str,
    offer_protection_enabled: bool,
    chain: Chain,
    filter: &TraitFilter,
) -> BuildOfferPayload {
    BuildOfferPayload {
        offerer: offerer.to_string(),
        quantity,
        criteria: OfferCriteria::with_filter(collection_slug, filter),
        protocol_address: SEAPORT_V1_6_ADDRESS.to_string(),
        offer_protection_enabled,
        chain,
    }
}

pub fn post_collection_offer_payload(
    collection_slug: &str,
    order: &ProtocolData,
    chain: Chain,
    filter: &TraitFilterArgs,
) -> PostCollectionOfferPayload {
    PostCollectionOfferPayload {
        criteria: OfferCriteria::from_raw(collection_slug, filter),
        protocol_data: order.clone(),
        protocol_address: SEAPORT_V1_6_ADDRESS.to_string(),
        chain,
    }
}
