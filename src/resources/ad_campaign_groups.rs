//! Campaign groups (`/adAccounts/{id}/adCampaignGroups`)

use super::ad_accounts::account_path;
use super::common::{AdBudget, AdChangeAuditStamps, AdRunSchedule};
use super::finder::TokenFinder;
use crate::query::{EncodingStyle, FilterSet};
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) fn path(account_id: i64) -> String {
    format!("{}/adCampaignGroups", account_path(account_id))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdCampaignGroup {
    pub account: String,
    pub allowed_campaign_types: Vec<String>,
    pub backfilled: bool,
    pub change_audit_stamps: AdChangeAuditStamps,
    pub id: i64,
    pub name: String,
    pub run_schedule: AdRunSchedule,
    pub serving_statuses: Vec<String>,
    pub status: String,
    pub test: bool,
    pub total_budget: Option<AdBudget>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdCampaignGroupStatus {
    Active,
    Archived,
    Canceled,
    Draft,
    Completed,
}

impl fmt::Display for AdCampaignGroupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "ACTIVE",
            Self::Archived => "ARCHIVED",
            Self::Canceled => "CANCELED",
            Self::Draft => "DRAFT",
            Self::Completed => "COMPLETED",
        })
    }
}

/// Filters for the campaign group search finder (indexed-array encoding)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchAdCampaignGroups {
    pub id: Option<Vec<i64>>,
    pub status: Option<Vec<AdCampaignGroupStatus>>,
    pub name: Option<Vec<String>>,
    pub test: Option<bool>,
    pub page_token: Option<String>,
    pub page_size: Option<u32>,
}

impl TokenFinder for SearchAdCampaignGroups {
    const ENCODING: EncodingStyle = EncodingStyle::IndexedArray;

    fn filter_set(&self) -> FilterSet {
        FilterSet::new("search")
            .optional_list("id", self.id.as_deref())
            .optional_list("status", self.status.as_deref())
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
