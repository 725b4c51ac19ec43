//! Search sub-client.

use crate::client::OpenSeaClient;
use crate::domain::search::{SearchArgs, SearchResponse};
use crate::error::SdkError;
use crate::shared::paths;
use crate::shared::query::to_query;

pub struct Search<'a> {
    pub(crate) client: &'a OpenSeaClient,
}

impl<'a> Search<'a> {
    /// Search across collections, tokens, NFTs and accounts.
    pub async fn search(&self, args: &SearchArgs) -> Result<SearchResponse, SdkError> {
        self.client.get(&paths::search(), Some(to_query(args)?)).await
    }
}
