//! Organization statistics
//!
//! Page statistics arrive with dynamically keyed sections. Views are
//! reinterpreted strictly; clicks best-effort, dropping segments that do not
//! decode.

use crate::decode::{Breakdown, DynamicField};
use crate::error::Result;
use crate::query::{encode, encode_value, EncodingStyle, FilterSet, QueryParams};
use crate::types::urn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub(crate) const PAGE_STATISTICS_PATH: &str = "organizationPageStatistics";
pub(crate) const FOLLOWER_STATISTICS_PATH: &str = "organizationalEntityFollowerStatistics";
pub(crate) const SHARE_STATISTICS_PATH: &str = "organizationalEntityShareStatistics";

/// `q=organization&organization=urn:li:organization:<id>`
pub fn page_stats_query(organization_id: i64) -> Result<QueryParams> {
    let filters = FilterSet::new("organization")
        .top_level_scalar("organization", urn("organization", organization_id));
    encode(&filters, EncodingStyle::CriteriaList)
}

/// `q=organizationalEntity&organizationalEntity=urn:li:organization:<id>`
pub fn follower_stats_query(organization_id: i64) -> Result<QueryParams> {
    encode(&entity(organization_id), EncodingStyle::CriteriaList)
}

/// Daily follower gains between two epoch-millisecond instants
pub fn follower_stats_timebound_query(
    organization_id: i64,
    start_ms: i64,
    end_ms: i64,
) -> Result<QueryParams> {
    let filters = entity(organization_id)
        .top_level_scalar("timeIntervals.timeGranularityType", "DAY")
        .top_level_scalar("timeIntervals.timeRange.start", start_ms)
        .top_level_scalar("timeIntervals.timeRange.end", end_ms);
    encode(&filters, EncodingStyle::CriteriaList)
}

/// Lifetime share statistics, one `shares[i]=urn:li:share:<id>` per share
pub fn share_stats_query(organization_id: i64, share_ids: &[String]) -> Result<QueryParams> {
    let mut params = encode(&entity(organization_id), EncodingStyle::CriteriaList)?;
    for (i, id) in share_ids.iter().enumerate() {
        params.push_raw(format!("shares[{i}]"), encode_value(&urn("share", id)));
    }
    Ok(params)
}

fn entity(organization_id: i64) -> FilterSet {
    FilterSet::new("organizationalEntity")
        .top_level_scalar("organizationalEntity", urn("organization", organization_id))
}

// ============================================================================
// Page Statistics
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageViews {
    pub page_views: i64,
    pub unique_page_views: i64,
}

/// Page statistics as returned, dynamic sections still raw
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LifetimePageStatsResponse {
    pub organization: String,
    #[serde(rename = "pageStatisticsByStaffCountRange")]
    pub by_staff_count_range: Vec<RawPageStatisticsByType>,
    #[serde(rename = "pageStatisticsByFunction")]
    pub by_function: Vec<RawPageStatisticsByType>,
    #[serde(rename = "pageStatisticsBySeniority")]
    pub by_seniority: Vec<RawPageStatisticsByType>,
    #[serde(rename = "pageStatisticsByIndustry")]
    pub by_industry: Vec<RawPageStatisticsByType>,
    #[serde(rename = "pageStatisticsByRegion")]
    pub by_region: Vec<RawPageStatisticsByType>,
    #[serde(rename = "pageStatisticsByCountry")]
    pub by_country: Vec<RawPageStatisticsByType>,
    #[serde(rename = "totalPageStatistics")]
    pub totals: RawTotalPageStatistics,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawPageStatisticsByType {
    pub page_statistics: RawPageStatistics,
    pub country: Option<String>,
    pub function: Option<String>,
    pub industry: Option<String>,
    pub region: Option<String>,
    pub seniority: Option<String>,
    pub staff_count_range: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPageStatistics {
    pub views: Option<DynamicField>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTotalPageStatistics {
    pub views: Option<DynamicField>,
    pub clicks: Option<DynamicField>,
}

/// Page statistics with views and clicks decoded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifetimePageStats {
    pub organization: String,
    pub by_staff_count_range: Vec<PageStatisticsByType>,
    pub by_function: Vec<PageStatisticsByType>,
    pub by_seniority: Vec<PageStatisticsByType>,
    pub by_industry: Vec<PageStatisticsByType>,
    pub by_region: Vec<PageStatisticsByType>,
    pub by_country: Vec<PageStatisticsByType>,
    pub totals: TotalPageStatistics,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStatisticsByType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seniority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_count_range: Option<String>,
    pub views: BTreeMap<String, PageViews>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TotalPageStatistics {
    pub views: BTreeMap<String, PageViews>,
    pub clicks: BTreeMap<String, Breakdown>,
}

impl LifetimePageStatsResponse {
    /// Second pass over every dynamic section; any views failure fails the whole
    pub fn decode(self) -> Result<LifetimePageStats> {
        let segments = |raw: Vec<RawPageStatisticsByType>| -> Result<Vec<PageStatisticsByType>> {
            raw.into_iter().map(RawPageStatisticsByType::decode).collect()
        };

        Ok(LifetimePageStats {
            organization: self.organization,
            by_staff_count_range: segments(self.by_staff_count_range)?,
            by_function: segments(self.by_function)?,
            by_seniority: segments(self.by_seniority)?,
            by_industry: segments(self.by_industry)?,
            by_region: segments(self.by_region)?,
            by_country: segments(self.by_country)?,
            totals: self.totals.decode()?,
        })
    }
}

impl RawPageStatisticsByType {
    fn decode(self) -> Result<PageStatisticsByType> {
        Ok(PageStatisticsByType {
            country: self.country,
            function: self.function,
            industry: self.industry,
            region: self.region,
            seniority: self.seniority,
            staff_count_range: self.staff_count_range,
            views: views(self.page_statistics.views.as_ref())?,
        })
    }
}

impl RawTotalPageStatistics {
    fn decode(self) -> Result<TotalPageStatistics> {
        let clicks = match self.clicks {
            Some(raw) => raw.reinterpret_breakdowns()?,
            None => BTreeMap::new(),
        };
        Ok(TotalPageStatistics {
            views: views(self.views.as_ref())?,
            clicks,
        })
    }
}

fn views(raw: Option<&DynamicField>) -> Result<BTreeMap<String, PageViews>> {
    match raw {
        Some(field) => field.reinterpret(),
        None => Ok(BTreeMap::new()),
    }
}

// ============================================================================
// Follower Statistics
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FollowerCounts {
    pub organic_follower_count: i64,
    pub paid_follower_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FollowerCountsByType {
    pub follower_counts: FollowerCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seniority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_count_range: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LifetimeFollowerStats {
    pub organizational_entity: String,
    #[serde(rename = "followerCountsByAssociationType")]
    pub by_association_type: Vec<FollowerCountsByType>,
    #[serde(rename = "followerCountsByStaffCountRange")]
    pub by_staff_count_range: Vec<FollowerCountsByType>,
    #[serde(rename = "followerCountsByFunction")]
    pub by_function: Vec<FollowerCountsByType>,
    #[serde(rename = "followerCountsBySeniority")]
    pub by_seniority: Vec<FollowerCountsByType>,
    #[serde(rename = "followerCountsByIndustry")]
    pub by_industry: Vec<FollowerCountsByType>,
    #[serde(rename = "followerCountsByRegion")]
    pub by_region: Vec<FollowerCountsByType>,
    #[serde(rename = "followerCountsByCountry")]
    pub by_country: Vec<FollowerCountsByType>,
}

/// Epoch milliseconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeRange {
    pub start: i64,
    pub end: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FollowerGains {
    pub organic_follower_gain: i64,
    pub paid_follower_gain: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FollowerStatsTimebound {
    pub time_range: TimeRange,
    pub follower_gains: FollowerGains,
    pub organizational_entity: String,
}

// ============================================================================
// Share Statistics
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TotalShareStatistics {
    pub click_count: i64,
    pub comment_count: i64,
    pub comment_mentions_count: i64,
    pub engagement: f64,
    pub impression_count: i64,
    pub like_count: i64,
    pub share_count: i64,
    pub share_mentions_count: i64,
    pub unique_impressions_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShareStatsLifetime {
    pub total_share_statistics: TotalShareStatistics,
    pub organizational_entity: String,
    pub share: Option<String>,
}
