//! Path builders: logical resource + parameters → request path.
//!
//! Paths are relative to the API base URL. Segments are substituted verbatim.

use crate::network::API_V2_PREFIX;
use crate::shared::{Chain, OrderProtocol, OrderSide};

// ── Offers ───────────────────────────────────────────────────────────────────

pub fn all_offers(collection_slug: &str) -> String {
    format!("{API_V2_PREFIX}/offers/collection/{collection_slug}/all")
}

pub fn trait_offers(collection_slug: &str) -> String {
    format!("{API_V2_PREFIX}/offers/collection/{collection_slug}")
}

pub fn best_offer(collection_slug: &str, token_id: &str) -> String {
    format!("{API_V2_PREFIX}/offers/collection/{collection_slug}/nfts/{token_id}/best")
}

pub fn build_offer() -> String {
    format!("{API_V2_PREFIX}/offers/build")
}

pub fn collection_offers(collection_slug: &str) -> String {
    format!("{API_V2_PREFIX}/offers/collection/{collection_slug}")
}

pub fn post_collection_offer() -> String {
    format!("{API_V2_PREFIX}/offers")
}

// ── Orders ───────────────────────────────────────────────────────────────────

pub fn orders(chain: Chain, protocol: OrderProtocol, side: OrderSide) -> String {
    format!(
        "{API_V2_PREFIX}/orders/{}/{}/{}",
        chain.as_str(),
        protocol.as_str(),
        side.path_segment()
    )
}

// ── Search ───────────────────────────────────────────────────────────────────

pub fn search() -> String {
    format!("{API_V2_PREFIX}/search")
}

// ── Tokens ───────────────────────────────────────────────────────────────────

pub fn trending_tokens() -> String {
    format!("{API_V2_PREFIX}/tokens/trending")
}

pub fn top_tokens() -> String {
    format!("{API_V2_PREFIX}/tokens/top")
}

pub fn swap_quote() -> String {
    format!("{API_V2_PREFIX}/swap/quote")
}

pub fn token(chain: &str, address: &str) -> String {
    format!("{API_V2_PREFIX}/chain/{chain}/token/{address}")
}
