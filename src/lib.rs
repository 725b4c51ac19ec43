//! # OpenSea SDK
//!
//! A typed Rust client for the OpenSea API v2: offers, search and tokens.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Shared enums, path builders, query serialization, domain types
//! 2. **Transport**: the [`fetcher::Fetcher`] seam and the reqwest-backed `HttpFetcher`
//!    with per-verb retry policies
//! 3. **High-Level Client**: `OpenSeaClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use opensea_sdk::prelude::*;
//!
//! let client = OpenSeaClient::builder()
//!     .api_key("YOUR_API_KEY")
//!     .chain(Chain::Base)
//!     .build()?;
//!
//! let hits = client.search().search(&SearchArgs::new("bored ape").limit(5)).await?;
//! let offers = client.offers().get_collection_offers("boredapeyachtclub", Some(20), None).await?;
//! let trending = client.tokens().get_trending_tokens(None).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared enums and helpers used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network constants.
pub mod network;

// ── Layer 2: Transport ───────────────────────────────────────────────────────

/// Transport trait every sub-client delegates to.
pub mod fetcher;

/// HTTP transport with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `OpenSeaClient`: the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared enums
    pub use crate::shared::{Chain, OrderProtocol, OrderSide};

    // Domain types: offers
    pub use crate::domain::offer::client::BuildOfferRequest;
    pub use crate::domain::offer::{
        BuildOfferResponse, CollectionOffer, GetOffersResponse, GetTraitOffersArgs,
        NumericTrait, Offer, OfferCriteria, Price, Trait, TraitFilter, TraitFilterArgs,
        TraitSelection,
    };

    // Domain types: orders
    pub use crate::domain::order::{OrderBy, OrderDirection, OrdersQueryOptions, ProtocolData};

    // Domain types: search
    pub use crate::domain::search::{
        AccountSearchResult, CollectionSearchResult, NftSearchResult, SearchArgs,
        SearchAssetType, SearchResponse, SearchResult, TokenSearchResult,
    };

    // Domain types: tokens
    pub use crate::domain::token::{GetSwapQuoteArgs, GetTokensArgs, SwapQuote, Token, TokensPage};

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Transport
    pub use crate::fetcher::Fetcher;
    #[cfg(feature = "http")]
    pub use crate::http::{HttpFetcher, RetryConfig, RetryPolicy};

    // Client + sub-clients
    pub use crate::client::{
        OffersClient, OpenSeaClient, OpenSeaClientBuilder, SearchClient, TokensClient,
    };
}
