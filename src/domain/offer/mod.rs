//! Offer domain: trait filters, offer criteria, build/post payloads.
//!
//! A collection offer can be narrowed to NFTs carrying one trait, any of
//! several traits, or numeric trait values inside a range. Callers describe the
//! filter with [`TraitFilterArgs`]; [`TraitFilter`] is the validated form the
//! build path works with.

pub mod client;
pub mod payload;
pub mod wire;

use crate::error::SdkError;
use serde::{Deserialize, Serialize};

pub use wire::{
    BuildOfferResponse, CollectionOffer, GetBestOfferResponse, GetOffersResponse,
    GetTraitOffersArgs, Offer, OfferCriteria, PageArgs, PartialParameters, Price,
};

// ─── Trait ───────────────────────────────────────────────────────────────────

/// A categorical trait, e.g. `Background: Blue`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trait {
    #[serde(rename = "type")]
    pub trait_type: String,
    pub value: String,
}

impl Trait {
    pub fn new(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
        }
    }
}

// ─── NumericTrait ────────────────────────────────────────────────────────────

/// A numeric trait range; either bound may be open.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NumericTrait {
    #[serde(rename = "type")]
    pub trait_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl NumericTrait {
    pub fn new(trait_type: impl Into<String>, min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            trait_type: trait_type.into(),
            min,
            max,
        }
    }

    pub fn validate(&self) -> Result<(), SdkError> {
        if self.trait_type.is_empty() {
            return Err(SdkError::InvalidArgument(
                "Each numeric trait must have a 'type' property.".to_string(),
            ));
        }
        match (self.min, self.max) {
            (None, None) => Err(SdkError::InvalidArgument(format!(
                "Numeric trait '{}' must have at least one of 'min' or 'max'.",
                self.trait_type
            ))),
            (Some(min), Some(max)) if min > max => Err(SdkError::InvalidArgument(format!(
                "Numeric trait '{}': 'min' ({}) must be <= 'max' ({}).",
                self.trait_type, min, max
            ))),
            _ => Ok(()),
        }
    }
}

// ─── TraitFilterArgs ─────────────────────────────────────────────────────────

/// Raw, unvalidated trait filter fields as a caller supplies them.
///
/// Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraitFilterArgs {
    pub trait_type: Option<String>,
    pub trait_value: Option<String>,
    pub traits: Vec<Trait>,
    pub numeric_traits: Vec<NumericTrait>,
}

impl TraitFilterArgs {
    pub fn single(trait_type: impl Into<String>, trait_value: impl Into<String>) -> Self {
        Self {
            trait_type: Some(trait_type.into()),
            trait_value: Some(trait_value.into()),
            ..Default::default()
        }
    }

    pub fn traits(traits: Vec<Trait>) -> Self {
        Self {
            traits,
            ..Default::default()
        }
    }

    pub fn numeric(numeric_traits: Vec<NumericTrait>) -> Self {
        Self {
            numeric_traits,
            ..Default::default()
        }
    }

    pub(crate) fn trait_type(&self) -> Option<&str> {
        self.trait_type.as_deref().filter(|s| !s.is_empty())
    }

    pub(crate) fn trait_value(&self) -> Option<&str> {
        self.trait_value.as_deref().filter(|s| !s.is_empty())
    }
}

// ─── TraitFilter ─────────────────────────────────────────────────────────────

/// The categorical part of a trait filter. At most one style is in play.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TraitSelection {
    #[default]
    None,
    Single(Trait),
    List(Vec<Trait>),
}

/// A validated trait filter: one categorical selection plus any number of
/// numeric ranges, which apply on top of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraitFilter {
    pub selection: TraitSelection,
    pub numeric: Vec<NumericTrait>,
}

impl TraitFilter {
    pub fn single(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            selection: TraitSelection::Single(Trait::new(trait_type, value)),
            numeric: Vec::new(),
        }
    }

    pub fn list(traits: Vec<Trait>) -> Self {
        Self {
            selection: TraitSelection::List(traits),
            numeric: Vec::new(),
        }
    }

    pub fn numeric(numeric: Vec<NumericTrait>) -> Self {
        Self {
            selection: TraitSelection::None,
            numeric,
        }
    }

    pub fn with_numeric(mut self, numeric: Vec<NumericTrait>) -> Self {
        self.numeric = numeric;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.selection == TraitSelection::None && self.numeric.is_empty()
    }
}

impl TryFrom<&TraitFilterArgs> for TraitFilter {
    type Error = SdkError;

    fn try_from(args: &TraitFilterArgs) -> Result<Self, Self::Error> {
        let trait_type = args.trait_type();
        let trait_value = args.trait_value();

        if !args.traits.is_empty() && (trait_type.is_some() || trait_value.is_some()) {
            return Err(SdkError::InvalidArgument(
                "Cannot use both 'traits' array and individual 'trait_type'/'trait_value' \
                 parameters. Please use only one approach."
                    .to_string(),
            ));
        }

        let single = match (trait_type, trait_value) {
            (Some(t), Some(v)) => Some(Trait::new(t, v)),
            (None, None) => None,
            _ => {
                return Err(SdkError::InvalidArgument(
                    "Both trait_type and trait_value must be defined if one is defined."
                        .to_string(),
                ))
            }
        };

        if args
            .traits
            .iter()
            .any(|t| t.trait_type.is_empty() || t.value.is_empty())
        {
            return Err(SdkError::InvalidArgument(
                "Each trait must have both 'type' and 'value' properties.".to_string(),
            ));
        }

        for numeric in &args.numeric_traits {
            numeric.validate()?;
        }

        let selection = match single {
            Some(t) => TraitSelection::Single(t),
            None if !args.traits.is_empty() => TraitSelection::List(args.traits.clone()),
            None => TraitSelection::None,
        };
        Ok(TraitFilter {
            selection,
            numeric: args.numeric_traits.clone(),
        })
    }
}

impl TryFrom<TraitFilterArgs> for TraitFilter {
    type Error = SdkError;

    fn try_from(args: TraitFilterArgs) -> Result<Self, Self::Error> {
        TraitFilter::try_from(&args)
    }
}
