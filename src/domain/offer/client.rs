//! Offers sub-client: collection, trait and NFT offers; build and post.

use crate::client::OpenSeaClient;
use crate::domain::offer::payload::{build_collection_offer_payload, post_collection_offer_payload};
use crate::domain::offer::wire::{
    BuildOfferResponse, CollectionOffer, GetBestOfferResponse, GetOffersResponse,
    GetTraitOffersArgs, PageArgs,
};
use crate::domain::offer::{NumericTrait, Trait, TraitFilter, TraitFilterArgs};
use crate::domain::order::{OrdersQueryOptions, ProtocolData};
use crate::error::SdkError;
use crate::shared::query::to_query;
use crate::shared::{paths, Chain, OrderProtocol, OrderSide};

/// Input for [`Offers::build_offer`].
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOfferRequest {
    pub offerer: String,
    pub quantity: u64,
    pub collection_slug: String,
    pub offer_protection_enabled: bool,
    pub filter: TraitFilterArgs,
}

impl BuildOfferRequest {
    /// Collection-wide offer with offer protection on.
    pub fn new(offerer: impl Into<String>, quantity: u64, collection_slug: impl Into<String>) -> Self {
        Self {
            offerer: offerer.into(),
            quantity,
            collection_slug: collection_slug.into(),
            offer_protection_enabled: true,
            filter: TraitFilterArgs::default(),
        }
    }

    pub fn offer_protection(mut self, enabled: bool) -> Self {
        self.offer_protection_enabled = enabled;
        self
    }

    pub fn trait_type(mut self, trait_type: impl Into<String>) -> Self {
        self.filter.trait_type = Some(trait_type.into());
        self
    }

    pub fn trait_value(mut self, trait_value: impl Into<String>) -> Self {
        self.filter.trait_value = Some(trait_value.into());
        self
    }

    pub fn traits(mut self, traits: Vec<Trait>) -> Self {
        self.filter.traits = traits;
        self
    }

    pub fn numeric_traits(mut self, numeric_traits: Vec<NumericTrait>) -> Self {
        self.filter.numeric_traits = numeric_traits;
        self
    }
}

pub struct Offers<'a> {
    pub(crate) client: &'a OpenSeaClient,
}

impl<'a> Offers<'a> {
    /// All offers on a collection, cursor paginated.
    pub async fn get_all_offers(
        &self,
        collection_slug: &str,
        limit: Option<u32>,
        next: Option<&str>,
    ) -> Result<GetOffersResponse, SdkError> {
        let query = to_query(&PageArgs::new(limit, next))?;
        self.client
            .get(&paths::all_offers(collection_slug), Some(query))
            .await
    }

    /// Offers on a single trait of a collection.
    pub async fn get_trait_offers(
        &self,
        collection_slug: &str,
        args: &GetTraitOffersArgs,
    ) -> Result<GetOffersResponse, SdkError> {
        let query = to_query(args)?;
        self.client
            .get(&paths::trait_offers(collection_slug), Some(query))
            .await
    }

    /// The highest offer on one token. `token_id` may be a string or an integer.
    pub async fn get_best_offer(
        &self,
        collection_slug: &str,
        token_id: impl std::fmt::Display,
    ) -> Result<GetBestOfferResponse, SdkError> {
        let path = paths::best_offer(collection_slug, &token_id.to_string());
        self.client.get(&path, None).await
    }

    /// Validate the trait filter and ask the server for an unsigned offer skeleton.
    ///
    /// Fails with [`SdkError::InvalidArgument`] before anything is sent when
    /// the filter mixes the singular pair with a trait list, carries half a
    /// trait pair, or holds a malformed entry.
    pub async fn build_offer(
        &self,
        request: &BuildOfferRequest,
    ) -> Result<BuildOfferResponse, SdkError> {
        let filter = TraitFilter::try_from(&request.filter)?;
        let payload = build_collection_offer_payload(
            &request.offerer,
            request.quantity,
            &request.collection_slug,
            request.offer_protection_enabled,
            self.client.chain,
            &filter,
        );
        tracing::debug!(
            collection = %request.collection_slug,
            quantity = request.quantity,
            "Building collection offer"
        );
        self.client
            .post(&paths::build_offer(), serde_json::to_value(&payload)?)
            .await
    }

    /// Standing collection offers for a slug.
    pub async fn get_collection_offers(
        &self,
        collection_slug: &str,
        limit: Option<u32>,
        next: Option<&str>,
    ) -> Result<GetOffersResponse, SdkError> {
        let query = to_query(&PageArgs::new(limit, next))?;
        self.client
            .get(&paths::collection_offers(collection_slug), Some(query))
            .await
    }

    /// Submit a signed collection offer.
    ///
    /// The filter is forwarded as given, without validation. Returns `None` when
    /// the server answers with `null` (no offer was created).
    pub async fn post_collection_offer(
        &self,
        order: &ProtocolData,
        collection_slug: &str,
        filter: &TraitFilterArgs,
    ) -> Result<Option<CollectionOffer>, SdkError> {
        let payload =
            post_collection_offer_payload(collection_slug, order, self.client.chain, filter);
        tracing::debug!(collection = %collection_slug, "Posting collection offer");
        self.client
            .post(&paths::post_collection_offer(), serde_json::to_value(&payload)?)
            .await
    }

    /// Active offers on one NFT. `chain` defaults to the client's chain.
    pub async fn get_nft_offers(
        &self,
        asset_contract_address: &str,
        token_id: &str,
        limit: Option<u32>,
        next: Option<&str>,
        chain: Option<Chain>,
    ) -> Result<GetOffersResponse, SdkError> {
        let options = OrdersQueryOptions::for_nft(asset_contract_address, token_id).page(limit, next);
        self.query_offers(&options, chain).await
    }

    /// Offers matching an arbitrary order filter (maker, ordering, time window…).
    pub async fn query_offers(
        &self,
        options: &OrdersQueryOptions,
        chain: Option<Chain>,
    ) -> Result<GetOffersResponse, SdkError> {
        let chain = chain.unwrap_or(self.client.chain);
        let path = paths::orders(chain, OrderProtocol::Seaport, OrderSide::Offer);
        self.client.get(&path, Some(to_query(options)?)).await
    }
}
