//! Ad accounts (`/adAccounts`)

use super::common::{AdChangeAuditStamps, AdVersion};
use super::finder::TokenFinder;
use crate::query::{EncodingStyle, FilterSet};
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) const PATH: &str = "adAccounts";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdAccount {
    pub change_audit_stamps: AdChangeAuditStamps,
    pub currency: String,
    pub id: i64,
    pub name: String,
    pub notified_on_campaign_optimization: bool,
    pub notified_on_creative_approval: bool,
    pub notified_on_creative_rejection: bool,
    pub notified_on_end_of_campaign: bool,
    pub notified_on_new_features_enabled: bool,
    pub reference: String,
    pub serving_statuses: Vec<String>,
    pub status: String,
    pub test: bool,
    #[serde(rename = "type")]
    pub account_type: String,
    pub version: AdVersion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdAccountStatus {
    Draft,
    Canceled,
    Active,
}

impl AdAccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Canceled => "CANCELED",
            Self::Active => "ACTIVE",
        }
    }
}

impl fmt::Display for AdAccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdAccountType {
    Business,
    Enterprise,
}

impl AdAccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Business => "BUSINESS",
            Self::Enterprise => "ENTERPRISE",
        }
    }
}

impl fmt::Display for AdAccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for the ad account search finder
///
/// Encoded in RESTli list form: `search=(status:(values:List(ACTIVE)),...)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchAdAccounts {
    pub status: Option<Vec<AdAccountStatus>>,
    pub reference: Option<Vec<String>>,
    pub name: Option<Vec<String>>,
    pub id: Option<Vec<i64>>,
    pub account_type: Option<Vec<AdAccountType>>,
    pub test: Option<bool>,
    pub page_token: Option<String>,
    pub page_size: Option<u32>,
}

impl TokenFinder for SearchAdAccounts {
    const ENCODING: EncodingStyle = EncodingStyle::RestliList;

    fn filter_set(&self) -> FilterSet {
        FilterSet::new("search")
            .optional_list("status", self.status.as_deref())
            .optional_list("reference", self.reference.as_deref())
            .optional_list("name", self.name.as_deref())
            .optional_list("id", self.id.as_deref())
            .optional_list("type", self.account_type.as_deref())
            .optional_scalar("test", self.test)
    }

    fn page_token(&self) -> Option<&str> {
        self.page_token.as_deref()
    }

    fn page_size(&self) -> Option<u32> {
        self.page_size
    }
}

/// Path of a single account
pub(crate) fn account_path(account_id: i64) -> String {
    format!("{PATH}/{account_id}")
}
