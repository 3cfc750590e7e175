//! CLI commands and argument parsing

use crate::resources::{AdAccountStatus, AdCampaignGroupStatus, AdCampaignStatus, AdCampaignType};
use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Query the LinkedIn Marketing REST API
#[derive(Parser, Debug)]
#[command(name = "restli-query")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search ad accounts
    Accounts {
        /// Account statuses (ACTIVE, DRAFT, CANCELED)
        #[arg(long, value_delimiter = ',', value_parser = wire_enum::<AdAccountStatus>)]
        status: Option<Vec<AdAccountStatus>>,

        /// Account names
        #[arg(long, value_delimiter = ',')]
        name: Option<Vec<String>>,

        /// Account ids
        #[arg(long, value_delimiter = ',')]
        id: Option<Vec<i64>>,

        /// Only test (true) or only real (false) accounts
        #[arg(long)]
        test: Option<bool>,

        /// Fetch only the page at this token
        #[arg(long)]
        page_token: Option<String>,
    },

    /// Search the campaign groups of an account
    CampaignGroups {
        /// Ad account id
        #[arg(long)]
        account: i64,

        /// Campaign group statuses
        #[arg(long, value_delimiter = ',', value_parser = wire_enum::<AdCampaignGroupStatus>)]
        status: Option<Vec<AdCampaignGroupStatus>>,

        /// Campaign group ids
        #[arg(long, value_delimiter = ',')]
        id: Option<Vec<i64>>,
    },

    /// Search the campaigns of an account
    Campaigns {
        /// Ad account id
        #[arg(long)]
        account: i64,

        /// Campaign group ids
        #[arg(long, value_delimiter = ',')]
        campaign_group: Option<Vec<i64>>,

        /// Campaign statuses
        #[arg(long, value_delimiter = ',', value_parser = wire_enum::<AdCampaignStatus>)]
        status: Option<Vec<AdCampaignStatus>>,

        /// Campaign types
        #[arg(long = "type", value_delimiter = ',', value_parser = wire_enum::<AdCampaignType>)]
        campaign_type: Option<Vec<AdCampaignType>>,
    },

    /// Search the creatives of an account
    Creatives {
        /// Ad account id
        #[arg(long)]
        account: i64,

        /// Campaign URNs
        #[arg(long, value_delimiter = ',')]
        campaign: Option<Vec<String>>,

        /// Intended statuses
        #[arg(long, value_delimiter = ',')]
        intended_status: Option<Vec<String>>,

        /// ASCENDING or DESCENDING
        #[arg(long)]
        sort_order: Option<String>,
    },

    /// Posts authored by an organization
    Posts {
        /// Organization id
        #[arg(long)]
        organization: i64,

        /// Earliest creation time (YYYY-MM-DD or epoch ms)
        #[arg(long, value_parser = parse_instant)]
        created_after: Option<i64>,

        /// Latest creation time (YYYY-MM-DD or epoch ms)
        #[arg(long, value_parser = parse_instant)]
        created_before: Option<i64>,

        /// Earliest publication time (YYYY-MM-DD or epoch ms)
        #[arg(long, value_parser = parse_instant)]
        published_after: Option<i64>,

        /// Latest publication time (YYYY-MM-DD or epoch ms)
        #[arg(long, value_parser = parse_instant)]
        published_before: Option<i64>,
    },

    /// Look up posts by URN
    Post {
        /// Post URNs (duplicates are fetched once)
        #[arg(required = true)]
        urns: Vec<String>,
    },

    /// Lifetime page statistics of an organization
    PageStats {
        /// Organization id
        #[arg(long)]
        organization: i64,
    },

    /// Follower statistics, lifetime or daily within a range
    FollowerStats {
        /// Organization id
        #[arg(long)]
        organization: i64,

        /// Range start (YYYY-MM-DD or epoch ms)
        #[arg(long, value_parser = parse_instant, requires = "end")]
        start: Option<i64>,

        /// Range end (YYYY-MM-DD or epoch ms)
        #[arg(long, value_parser = parse_instant, requires = "start")]
        end: Option<i64>,
    },

    /// Lifetime statistics of an organization's shares
    ShareStats {
        /// Organization id
        #[arg(long)]
        organization: i64,

        /// Share ids
        #[arg(long, value_delimiter = ',')]
        share: Vec<String>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}

/// Parse an API enum from its wire spelling, case-insensitively
pub(crate) fn wire_enum<T: DeserializeOwned>(value: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(value.trim().to_uppercase()))
        .map_err(|_| format!("unknown value '{value}'"))
}

/// Epoch milliseconds from either a raw number or a UTC date
pub(crate) fn parse_instant(value: &str) -> Result<i64, String> {
    if let Ok(ms) = value.parse::<i64>() {
        return Ok(ms);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
        .map_err(|e| format!("expected YYYY-MM-DD or epoch milliseconds: {e}"))
}
