//! Resource finders built on the query core
//!
//! Each resource pairs its record types with a filter struct that knows how
//! to encode itself. Execution lives on [`LinkedInClient`](crate::LinkedInClient).

mod ad_accounts;
mod ad_campaign_groups;
mod ad_campaigns;
mod ad_creatives;
mod common;
mod finder;
mod posts;
mod statistics;

pub use ad_accounts::{AdAccount, AdAccountStatus, AdAccountType, SearchAdAccounts};
pub use ad_campaign_groups::{AdCampaignGroup, AdCampaignGroupStatus, SearchAdCampaignGroups};
pub use ad_campaigns::{AdCampaign, AdCampaignStatus, AdCampaignType, SearchAdCampaigns};
pub use ad_creatives::{AdCreative, AdCreativeReview, SearchAdCreatives};
pub use common::{AdBudget, AdChangeAuditStamps, AdLocale, AdRunSchedule, AdVersion, AuditStamp};
pub use finder::TokenFinder;
pub use posts::{BatchGetResponse, Post, PostsByOwner};
pub use statistics::{
    follower_stats_query, follower_stats_timebound_query, page_stats_query, share_stats_query,
    FollowerCounts, FollowerCountsByType, FollowerGains, FollowerStatsTimebound,
    LifetimeFollowerStats, LifetimePageStats, LifetimePageStatsResponse, PageStatisticsByType,
    PageViews, RawPageStatistics, RawPageStatisticsByType, RawTotalPageStatistics,
    ShareStatsLifetime, TimeRange, TotalPageStatistics, TotalShareStatistics,
};

pub(crate) use ad_accounts::{account_path, PATH as AD_ACCOUNTS_PATH};
pub(crate) use ad_campaign_groups::path as campaign_groups_path;
pub(crate) use ad_campaigns::path as campaigns_path;
pub(crate) use ad_creatives::path as creatives_path;
pub(crate) use posts::PATH as POSTS_PATH;
pub(crate) use statistics::{
    FOLLOWER_STATISTICS_PATH, PAGE_STATISTICS_PATH, SHARE_STATISTICS_PATH,
};
