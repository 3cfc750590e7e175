use crate::batch::{ids_param, resolve_batches};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::{run_paginated, CursorStrategy, Page, PagingResponse, TokenPageResponse};
use crate::query::QueryParams;
use crate::resources::{
    self, follower_stats_query, follower_stats_timebound_query, page_stats_query,
    share_stats_query, AdAccount, AdCampaign, AdCampaignGroup, AdCreative, BatchGetResponse,
    FollowerStatsTimebound, LifetimeFollowerStats, LifetimePageStats, LifetimePageStatsResponse,
    Post, PostsByOwner, SearchAdAccounts, SearchAdCampaignGroups, SearchAdCampaigns,
    SearchAdCreatives, ShareStatsLifetime, TokenFinder,
};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// API version header (YYYYMM)
pub const VERSION_HEADER: &str = "LinkedIn-Version";
/// RESTli protocol version header
pub const RESTLI_PROTOCOL_HEADER: &str = "X-Restli-Protocol-Version";
/// RESTli method override header
pub const RESTLI_METHOD_HEADER: &str = "X-RestLi-Method";
/// Method value for finder calls
pub const FINDER_METHOD: &str = "FINDER";
/// Method value for batch gets
pub const BATCH_GET_METHOD: &str = "BATCH_GET";

/// Client for the versioned LinkedIn REST API
#[derive(Debug)]
pub struct LinkedInClient {
    http: HttpClient,
    config: ClientConfig,
}

impl LinkedInClient {
    /// Create a client; the configuration is validated first
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = HttpClientConfig::builder()
            .base_url(config.base_url.clone())
            .timeout(config.timeout())
            .header(VERSION_HEADER, config.api_version.clone())
            .header(RESTLI_PROTOCOL_HEADER, config.restli_protocol_version.clone());
        if let Some(ref token) = config.access_token {
            builder = builder.bearer_token(token.clone());
        }

        let http = HttpClient::with_config(builder.build())?;
        Ok(Self { http, config })
    }

    /// Active configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ========================================================================
    // Advertising
    // ========================================================================

    /// Search ad accounts visible to the token
    pub async fn search_ad_accounts(&self, search: &SearchAdAccounts) -> Result<Vec<AdAccount>> {
        self.find(resources::AD_ACCOUNTS_PATH, search, &RequestConfig::new())
            .await
    }

    /// Fetch one ad account by id
    pub async fn get_ad_account(&self, account_id: i64) -> Result<AdAccount> {
        self.http
            .get_json(
                &resources::account_path(account_id),
                &QueryParams::new(),
                &RequestConfig::new(),
            )
            .await
    }

    /// Search the campaign groups of an account
    pub async fn search_ad_campaign_groups(
        &self,
        account_id: i64,
        search: &SearchAdCampaignGroups,
    ) -> Result<Vec<AdCampaignGroup>> {
        self.find(
            &resources::campaign_groups_path(account_id),
            search,
            &RequestConfig::new(),
        )
        .await
    }

    /// Search the campaigns of an account
    pub async fn search_ad_campaigns(
        &self,
        account_id: i64,
        search: &SearchAdCampaigns,
    ) -> Result<Vec<AdCampaign>> {
        self.find(
            &resources::campaigns_path(account_id),
            search,
            &RequestConfig::new(),
        )
        .await
    }

    /// Search the creatives of an account
    pub async fn search_ad_creatives(
        &self,
        account_id: i64,
        search: &SearchAdCreatives,
    ) -> Result<Vec<AdCreative>> {
        let request = RequestConfig::new().header(RESTLI_METHOD_HEADER, FINDER_METHOD);
        self.find(&resources::creatives_path(account_id), search, &request)
            .await
    }

    // ========================================================================
    // Posts
    // ========================================================================

    /// Every post authored by an organization, filtered to the owner's window
    pub async fn posts_by_owner(&self, owner: &PostsByOwner) -> Result<Vec<Post>> {
        let filters = owner.query()?;
        let request = RequestConfig::new();

        let posts: Vec<Post> = run_paginated(
            CursorStrategy::offset(self.config.offset_page_size),
            |cursor| {
                let query = merge(&filters, cursor);
                let request = &request;
                async move {
                    let response: PagingResponse<Post> = self
                        .http
                        .get_json(resources::POSTS_PATH, &query, request)
                        .await?;
                    Ok(Page::from(response))
                }
            },
        )
        .await?;

        let fetched = posts.len();
        let posts: Vec<Post> = posts.into_iter().filter(|p| owner.in_window(p)).collect();
        info!(
            organization = owner.organization_id,
            fetched,
            kept = posts.len(),
            "Posts by owner complete"
        );
        Ok(posts)
    }

    /// Resolve post URNs in batches; URNs the API does not return are skipped
    pub async fn posts<I, S>(&self, urns: I) -> Result<Vec<Post>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = RequestConfig::new().header(RESTLI_METHOD_HEADER, BATCH_GET_METHOD);

        let posts = resolve_batches(urns, self.config.max_ids_per_call, |chunk| {
            let query = ids_param(&chunk);
            let request = &request;
            async move {
                let response: BatchGetResponse<Post> = self
                    .http
                    .get_json(resources::POSTS_PATH, &query, request)
                    .await?;
                Ok(response.results)
            }
        })
        .await?;

        info!(posts = posts.len(), "Batch post lookup complete");
        Ok(posts)
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Lifetime page statistics with views and clicks decoded
    pub async fn lifetime_page_stats(
        &self,
        organization_id: i64,
    ) -> Result<Vec<LifetimePageStats>> {
        let raw: Vec<LifetimePageStatsResponse> = self
            .elements(
                resources::PAGE_STATISTICS_PATH,
                &page_stats_query(organization_id)?,
            )
            .await?;
        raw.into_iter()
            .map(LifetimePageStatsResponse::decode)
            .collect()
    }

    /// Lifetime follower counts by segment
    pub async fn lifetime_follower_stats(
        &self,
        organization_id: i64,
    ) -> Result<Vec<LifetimeFollowerStats>> {
        self.elements(
            resources::FOLLOWER_STATISTICS_PATH,
            &follower_stats_query(organization_id)?,
        )
        .await
    }

    /// Daily follower gains between two epoch-millisecond instants
    pub async fn follower_stats_timebound(
        &self,
        organization_id: i64,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Vec<FollowerStatsTimebound>> {
        self.elements(
            resources::FOLLOWER_STATISTICS_PATH,
            &follower_stats_timebound_query(organization_id, start_ms, end_ms)?,
        )
        .await
    }

    /// Lifetime statistics for the given shares of an organization
    pub async fn share_stats_lifetime(
        &self,
        organization_id: i64,
        share_ids: &[String],
    ) -> Result<Vec<ShareStatsLifetime>> {
        self.elements(
            resources::SHARE_STATISTICS_PATH,
            &share_stats_query(organization_id, share_ids)?,
        )
        .await
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Run a token-paged finder to exhaustion
    async fn find<T, F>(&self, path: &str, finder: &F, request: &RequestConfig) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        F: TokenFinder,
    {
        let filters = finder.query()?;
        let cursor = finder.cursor(self.config.page_size);

        let records: Vec<T> = run_paginated(cursor, |cursor| {
            let query = merge(&filters, cursor);
            async move {
                let response: TokenPageResponse<T> =
                    self.http.get_json(path, &query, request).await?;
                Ok(Page::from(response))
            }
        })
        .await?;

        info!(path, records = records.len(), "Finder complete");
        Ok(records)
    }

    /// Single unpaged request returning the `elements` of a paging envelope
    async fn elements<T>(&self, path: &str, query: &QueryParams) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let response: PagingResponse<T> = self
            .http
            .get_json(path, query, &RequestConfig::new())
            .await?;
        debug!(path, elements = response.elements.len(), "Statistics received");
        Ok(response.elements)
    }
}

/// Filter parameters first, then the cursor's
fn merge(filters: &QueryParams, cursor: QueryParams) -> QueryParams {
    let mut query = filters.clone();
    query.extend(cursor);
    query
}
