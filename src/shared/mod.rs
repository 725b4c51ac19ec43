//! Shared enums and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the API sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod paths;
pub mod query;
pub mod serde_util;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ─── Chain ───────────────────────────────────────────────────────────────────

/// A chain supported by the API, serialized as its API slug.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chain {
    #[default]
    #[serde(rename = "ethereum")]
    Mainnet,
    #[serde(rename = "matic")]
    Polygon,
    #[serde(rename = "base")]
    Base,
    #[serde(rename = "arbitrum")]
    Arbitrum,
    #[serde(rename = "arbitrum_nova")]
    ArbitrumNova,
    #[serde(rename = "optimism")]
    Optimism,
    #[serde(rename = "avalanche")]
    Avalanche,
    #[serde(rename = "blast")]
    Blast,
    #[serde(rename = "zora")]
    Zora,
    #[serde(rename = "klaytn")]
    Klaytn,
    #[serde(rename = "sei")]
    Sei,
    #[serde(rename = "b3")]
    B3,
    #[serde(rename = "bera_chain")]
    BeraChain,
    #[serde(rename = "ape_chain")]
    ApeChain,
    #[serde(rename = "flow")]
    Flow,
    #[serde(rename = "ronin")]
    Ronin,
    #[serde(rename = "abstract")]
    Abstract,
    #[serde(rename = "shape")]
    Shape,
    #[serde(rename = "unichain")]
    Unichain,
    #[serde(rename = "solana")]
    Solana,
}

impl Chain {
    pub const ALL: [Chain; 20] = [
        Chain::Mainnet,
        Chain::Polygon,
        Chain::Base,
        Chain::Arbitrum,
        Chain::ArbitrumNova,
        Chain::Optimism,
        Chain::Avalanche,
        Chain::Blast,
        Chain::Zora,
        Chain::Klaytn,
        Chain::Sei,
        Chain::B3,
        Chain::BeraChain,
        Chain::ApeChain,
        Chain::Flow,
        Chain::Ronin,
        Chain::Abstract,
        Chain::Shape,
        Chain::Unichain,
        Chain::Solana,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "ethereum",
            Self::Polygon => "matic",
            Self::Base => "base",
            Self::Arbitrum => "arbitrum",
            Self::ArbitrumNova => "arbitrum_nova",
            Self::Optimism => "optimism",
            Self::Avalanche => "avalanche",
            Self::Blast => "blast",
            Self::Zora => "zora",
            Self::Klaytn => "klaytn",
            Self::Sei => "sei",
            Self::B3 => "b3",
            Self::BeraChain => "bera_chain",
            Self::ApeChain => "ape_chain",
            Self::Flow => "flow",
            Self::Ronin => "ronin",
            Self::Abstract => "abstract",
            Self::Shape => "shape",
            Self::Unichain => "unichain",
            Self::Solana => "solana",
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Chain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chain::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown chain: {s}"))
    }
}

// ─── OrderSide ───────────────────────────────────────────────────────────────

/// Which side of the book an order sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Listing,
    Offer,
}

impl OrderSide {
    /// Plural path segment used by the orders endpoints.
    pub fn path_segment(&self) -> &'static str {
        match self {
            OrderSide::Listing => "listings",
            OrderSide::Offer => "offers",
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OrderSide::Listing => write!(f, "listing"),
            OrderSide::Offer => write!(f, "offer"),
        }
    }
}

// ─── OrderProtocol ───────────────────────────────────────────────────────────

/// Order protocol the marketplace settles through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderProtocol {
    #[default]
    Seaport,
}

impl OrderProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seaport => "seaport",
        }
    }
}

impl std::fmt::Display for OrderProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
