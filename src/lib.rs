//! # restli-query
//!
//! Paginated query execution for the LinkedIn Marketing REST API.
//!
//! ## Features
//!
//! - **Query Encoding**: Filter sets rendered as indexed arrays, RESTli lists or criteria lists
//! - **Pagination**: Opaque-token and offset/link cursors driven to exhaustion
//! - **Batch Lookups**: Deduplicated, chunked `ids=List(...)` batch gets
//! - **Two-Pass Decoding**: Dynamically keyed fields captured raw, reinterpreted on demand
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use restli_query::{ClientConfig, LinkedInClient, Result};
//! use restli_query::resources::{AdAccountStatus, SearchAdAccounts};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::load("linkedin.yaml")?.with_env_overrides();
//!     let client = LinkedInClient::new(config)?;
//!
//!     let search = SearchAdAccounts {
//!         status: Some(vec![AdAccountStatus::Active]),
//!         ..Default::default()
//!     };
//!     for account in client.search_ad_accounts(&search).await? {
//!         println!("{} {}", account.id, account.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       LinkedInClient                        │
//! │  accounts · campaign groups · campaigns · creatives         │
//! │  posts · page / follower / share statistics                 │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌────────────┬────────────────┼──────────────┬────────────────┐
//! │   Query    │   Pagination   │    Batch     │     Decode     │
//! ├────────────┼────────────────┼──────────────┼────────────────┤
//! │ Indexed    │ Token cursor   │ Dedup        │ DynamicField   │
//! │ RESTli     │ Offset cursor  │ Chunk        │ Strict pass    │
//! │ Criteria   │ Driver         │ Resolve      │ Best-effort    │
//! └────────────┴────────────────┴──────────────┴────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::struct_excessive_bools)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Filter set encoding
pub mod query;

/// Cursor strategies and the pagination driver
pub mod pagination;

/// Batch identifier resolution
pub mod batch;

/// Two-pass response decoding
pub mod decode;

/// HTTP transport
pub mod http;

/// Client configuration
pub mod config;

/// Resource finders and record types
pub mod resources;

/// LinkedIn API client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::LinkedInClient;
pub use config::ClientConfig;
pub use decode::DynamicField;
pub use error::{Error, Result};
pub use query::{encode, EncodingStyle, FilterSet, QueryParams};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
