//! Conversion: SearchResultResponse ⇄ SearchResult.

use super::wire::SearchResultResponse;
use super::{SearchAssetType, SearchResult};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchResultError {
    #[error("search result of type '{0}' has no '{0}' payload")]
    MissingPayload(SearchAssetType),

    #[error("search result of type '{tag}' also carries a '{other}' payload")]
    ConflictingPayload {
        tag: SearchAssetType,
        other: SearchAssetType,
    },
}

impl TryFrom<SearchResultResponse> for SearchResult {
    type Error = SearchResultError;

    fn try_from(source: SearchResultResponse) -> Result<Self, Self::Error> {
        let tag = source.result_type;

        let present = [
            (SearchAssetType::Collection, source.collection.is_some()),
            (SearchAssetType::Token, source.token.is_some()),
            (SearchAssetType::Nft, source.nft.is_some()),
            (SearchAssetType::Account, source.account.is_some()),
        ];
        if let Some((other, _)) = present.iter().find(|(kind, set)| *set && *kind != tag) {
            return Err(SearchResultError::ConflictingPayload { tag, other: *other });
        }

        let result = match tag {
            SearchAssetType::Collection => source.collection.map(SearchResult::Collection),
            SearchAssetType::Token => source.token.map(SearchResult::Token),
            SearchAssetType::Nft => source.nft.map(SearchResult::Nft),
            SearchAssetType::Account => source.account.map(SearchResult::Account),
        };
        result.ok_or(SearchResultError::MissingPayload(tag))
    }
}

impl From<SearchResult> for SearchResultResponse {
    fn from(result: SearchResult) -> Self {
        let mut wire = SearchResultResponse {
            result_type: result.asset_type(),
            collection: None,
            token: None,
            nft: None,
            account: None,
        };
        match result {
            SearchResult::Collection(c) => wire.collection = Some(c),
            SearchResult::Token(t) => wire.token = Some(t),
            SearchResult::Nft(n) => wire.nft = Some(n),
            SearchResult::Account(a) => wire.account = Some(a),
        }
        wire
    }
}
