//! Creatives (`/adAccounts/{id}/creatives`)

use super::ad_accounts::account_path;
use super::finder::TokenFinder;
use crate::query::{EncodingStyle, FilterSet};
use serde::{Deserialize, Serialize};

pub(crate) fn path(account_id: i64) -> String {
    format!("{}/creatives", account_path(account_id))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdCreativeReview {
    pub status: String,
    pub rejection_reasons: Vec<String>,
}

/// A creative; content variants are left as untyped JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdCreative {
    pub account: Option<String>,
    pub campaign: Option<String>,
    pub content: Option<serde_json::Value>,
    pub created_at: Option<i64>,
    pub created_by: Option<String>,
    pub id: Option<String>,
    pub inline_content: Option<serde_json::Value>,
    pub intended_status: Option<String>,
    pub is_serving: Option<bool>,
    pub is_test: Option<bool>,
    pub last_modified_at: Option<i64>,
    pub last_modified_by: Option<String>,
    pub review: Option<AdCreativeReview>,
    pub serving_hold_reasons: Option<Vec<String>>,
}

/// Filters for the creative criteria finder
///
/// Lists are sent bare (`campaigns=List(...)`), the flags and sort order as
/// plain parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchAdCreatives {
    pub campaigns: Option<Vec<String>>,
    pub content_references: Option<Vec<String>>,
    pub creatives: Option<Vec<String>>,
    pub intended_statuses: Option<Vec<String>>,
    pub is_test_account: Option<bool>,
    pub is_total_included: Option<bool>,
    pub leadgen_creative_call_to_action_destinations: Option<Vec<String>>,
    pub sort_order: Option<String>,
    pub page_token: Option<String>,
    pub page_size: Option<u32>,
}

impl TokenFinder for SearchAdCreatives {
    const ENCODING: EncodingStyle = EncodingStyle::CriteriaList;

    fn filter_set(&self) -> FilterSet {
        FilterSet::new("criteria")
            .optional_list("campaigns", self.campaigns.as_deref())
            .optional_list("contentReferences", self.content_references.as_deref())
            .optional_list("creatives", self.creatives.as_deref())
            .optional_list("intendedStatuses", self.intended_statuses.as_deref())
            .optional_top_level_scalar("isTestAccount", self.is_test_account)
            .optional_top_level_scalar("isTotalIncluded", self.is_total_included)
            .optional_list(
                "leadgenCreativeCallToActionDestinations",
                self.leadgen_creative_call_to_action_destinations.as_deref(),
            )
            .optional_top_level_scalar("sortOrder", self.sort_order.as_deref())
    }

    fn page_token(&self) -> Option<&str> {
        self.page_token.as_deref()
    }

    fn page_size(&self) -> Option<u32> {
        self.page_size
    }
}
