//! CLI module
//!
//! Command-line interface over [`LinkedInClient`](crate::LinkedInClient).
//!
//! # Commands
//!
//! - `accounts` - Search ad accounts
//! - `campaign-groups` / `campaigns` / `creatives` - Search an account's ads
//! - `posts` - Posts by an organization, optionally within a window
//! - `post` - Look up posts by URN
//! - `page-stats` / `follower-stats` / `share-stats` - Organization statistics

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;

#[cfg(test)]
mod tests;
