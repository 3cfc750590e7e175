//! Posts (`/posts`)

use crate::error::Result;
use crate::query::{encode, EncodingStyle, FilterSet, QueryParams};
use crate::types::urn;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub(crate) const PATH: &str = "posts";

/// A post; timestamps are epoch milliseconds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: String,
    pub commentary: Option<String>,
    pub container: Option<String>,
    pub content: Option<serde_json::Value>,
    pub content_call_to_action_label: Option<String>,
    pub created_at: i64,
    pub distribution: Option<serde_json::Value>,
    pub is_reshare_disabled_by_author: bool,
    pub last_modified_at: i64,
    pub lifecycle_state: Option<String>,
    pub published_at: i64,
    pub visibility: Option<String>,
}

impl Post {
    pub fn created(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created_at)
    }

    pub fn published(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.published_at)
    }
}

/// `{"results": {"<urn>": <record>, ...}}` returned by batch gets
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct BatchGetResponse<T> {
    #[serde(default = "HashMap::new")]
    pub results: HashMap<String, T>,
}

/// Posts authored by an organization, optionally narrowed to a time window
///
/// Window bounds are inclusive epoch milliseconds and are applied to the
/// assembled result, not sent to the API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostsByOwner {
    pub organization_id: i64,
    pub fields: Option<String>,
    pub created_start: Option<i64>,
    pub created_end: Option<i64>,
    pub published_start: Option<i64>,
    pub published_end: Option<i64>,
}

impl PostsByOwner {
    pub fn new(organization_id: i64) -> Self {
        Self {
            organization_id,
            ..Self::default()
        }
    }

    /// `q=author&author=urn:li:organization:<id>[&fields=...]`
    pub fn query(&self) -> Result<QueryParams> {
        let filters = FilterSet::new("author")
            .top_level_scalar("author", urn("organization", self.organization_id))
            .optional_top_level_scalar("fields", self.fields.as_deref());
        encode(&filters, EncodingStyle::CriteriaList)
    }

    /// Whether a post falls inside every configured bound
    pub fn in_window(&self, post: &Post) -> bool {
        within(post.created_at, self.created_start, self.created_end)
            && within(post.published_at, self.published_start, self.published_end)
    }
}

fn within(value: i64, start: Option<i64>, end: Option<i64>) -> bool {
    start.map_or(true, |start| value >= start) && end.map_or(true, |end| value <= end)
}
