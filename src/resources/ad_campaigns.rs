//! Campaigns (`/adAccounts/{id}/adCampaigns`)

use super::ad_accounts::account_path;
use super::common::{AdBudget, AdChangeAuditStamps, AdLocale, AdRunSchedule, AdVersion};
use super::finder::TokenFinder;
use crate::decode::DynamicField;
use crate::query::{EncodingStyle, FilterSet};
use crate::types::urn;
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) fn path(account_id: i64) -> String {
    format!("{}/adCampaigns", account_path(account_id))
}

/// A campaign
///
/// `targeting_criteria` is a nested boolean expression whose facet keys vary
/// per campaign, so it is kept raw.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdCampaign {
    pub account: String,
    pub associated_entity: Option<String>,
    pub audience_expansion_enabled: bool,
    pub campaign_group: String,
    pub change_audit_stamps: AdChangeAuditStamps,
    pub cost_type: String,
    pub creative_selection: String,
    pub daily_budget: Option<AdBudget>,
    pub format: String,
    pub id: i64,
    pub locale: AdLocale,
    pub name: String,
    pub objective_type: Option<String>,
    pub offsite_delivery_enabled: bool,
    pub optimization_target_type: Option<String>,
    pub pacing_strategy: Option<String>,
    pub run_schedule: AdRunSchedule,
    pub serving_statuses: Vec<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targeting_criteria: Option<DynamicField>,
    pub test: bool,
    pub total_budget: Option<AdBudget>,
    #[serde(rename = "type")]
    pub campaign_type: String,
    pub unit_cost: Option<AdBudget>,
    pub version: AdVersion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdCampaignStatus {
    Active,
    Paused,
    Archived,
    Completed,
    Canceled,
    Draft,
}

impl fmt::Display for AdCampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "ACTIVE",
            Self::Paused => "PAUSED",
            Self::Archived => "ARCHIVED",
            Self::Completed => "COMPLETED",
            Self::Canceled => "CANCELED",
            Self::Draft => "DRAFT",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdCampaignType {
    TextAd,
    SponsoredUpdates,
    SponsoredInmails,
    Dynamic,
}

impl fmt::Display for AdCampaignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TextAd => "TEXT_AD",
            Self::SponsoredUpdates => "SPONSORED_UPDATES",
            Self::SponsoredInmails => "SPONSORED_INMAILS",
            Self::Dynamic => "DYNAMIC",
        })
    }
}

/// Filters for the campaign search finder (indexed-array encoding)
///
/// Campaign groups are given by numeric id and sent as
/// `urn:li:sponsoredCampaignGroup:<id>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchAdCampaigns {
    pub campaign_group: Option<Vec<i64>>,
    pub associated_entity: Option<Vec<String>>,
    pub id: Option<Vec<i64>>,
    pub status: Option<Vec<AdCampaignStatus>>,
    pub campaign_type: Option<Vec<AdCampaignType>>,
    pub name: Option<Vec<String>>,
    pub test: Option<bool>,
    pub page_token: Option<String>,
    pub page_size: Option<u32>,
}

impl TokenFinder for SearchAdCampaigns {
    const ENCODING: EncodingStyle = EncodingStyle::IndexedArray;

    fn filter_set(&self) -> FilterSet {
        let groups = self.campaign_group.as_ref().map(|ids| {
            ids.iter()
                .map(|id| urn("sponsoredCampaignGroup", id))
                .collect::<Vec<_>>()
        });

        FilterSet::new("search")
            .optional_list("campaignGroup", groups)
            .optional_list("associatedEntity", self.associated_entity.as_deref())
            .optional_list("id", self.id.as_deref())
            .optional_list("status", self.status.as_deref())
            .optional_list("type", self.campaign_type.as_deref())
            .optional_list("name", self.name.as_deref())
            .optional_scalar("test", self.test)
    }

    fn page_token(&self) -> Option<&str> {
        self.page_token.as_deref()
    }

    fn page_size(&self) -> Option<u32> {
        self.page_size
    }
}
