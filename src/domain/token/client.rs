//! Tokens sub-client: trending/top lists, token details, swap quotes.

use crate::client::OpenSeaClient;
use crate::domain::token::{
    GetSwapQuoteArgs, GetSwapQuoteResponse, GetTokenResponse, GetTokensArgs,
    GetTopTokensResponse, GetTrendingTokensResponse,
};
use crate::error::SdkError;
use crate::shared::paths;
use crate::shared::query::{to_optional_query, to_query};

pub struct Tokens<'a> {
    pub(crate) client: &'a OpenSeaClient,
}

impl<'a> Tokens<'a> {
    /// Trending tokens. `None` sends no query at all.
    pub async fn get_trending_tokens(
        &self,
        args: Option<&GetTokensArgs>,
    ) -> Result<GetTrendingTokensResponse, SdkError> {
        self.client
            .get(&paths::trending_tokens(), to_optional_query(args)?)
            .await
    }

    /// Top tokens. `None` sends no query at all.
    pub async fn get_top_tokens(
        &self,
        args: Option<&GetTokensArgs>,
    ) -> Result<GetTopTokensResponse, SdkError> {
        self.client
            .get(&paths::top_tokens(), to_optional_query(args)?)
            .await
    }

    pub async fn get_swap_quote(
        &self,
        args: &GetSwapQuoteArgs,
    ) -> Result<GetSwapQuoteResponse, SdkError> {
        self.client
            .get(&paths::swap_quote(), Some(to_query(args)?))
            .await
    }

    /// Token details. `chain` and `address` go into the path verbatim.
    pub async fn get_token(&self, chain: &str, address: &str) -> Result<GetTokenResponse, SdkError> {
        self.client.get(&paths::token(chain, address), None).await
    }
}
