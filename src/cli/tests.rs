//! Tests for the CLI module

use super::commands::{parse_instant, wire_enum};
use super::*;
use crate::resources::{AdAccountStatus, AdCampaignType};
use clap::Parser;
use std::io::Write;

#[test]
fn test_parse_accounts_command() {
    let cli = Cli::parse_from([
        "restli-query",
        "accounts",
        "--status",
        "active,draft",
        "--id",
        "1,2",
    ]);

    match cli.command {
        Commands::Accounts { status, id, .. } => {
            assert_eq!(
                status,
                Some(vec![AdAccountStatus::Active, AdAccountStatus::Draft])
            );
            assert_eq!(id, Some(vec![1, 2]));
        }
        other => panic!("unexpected command: {other:?}"),
    }
    assert_eq!(cli.format, OutputFormat::Pretty);
    assert!(!cli.verbose);
}

#[test]
fn test_parse_global_flags() {
    let cli = Cli::parse_from([
        "restli-query",
        "post",
        "urn:li:share:1",
        "-C",
        "config.yaml",
        "--verbose",
        "--format",
        "json",
    ]);

    assert!(cli.verbose);
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.config.unwrap().to_str(), Some("config.yaml"));
}

#[test]
fn test_follower_stats_range_requires_both_ends() {
    let result = Cli::try_parse_from([
        "restli-query",
        "follower-stats",
        "--organization",
        "5",
        "--start",
        "2024-01-01",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_wire_enum() {
    assert_eq!(
        wire_enum::<AdCampaignType>("sponsored_updates"),
        Ok(AdCampaignType::SponsoredUpdates)
    );
    assert!(wire_enum::<AdCampaignType>("banner").is_err());
}

#[test]
fn test_parse_instant() {
    assert_eq!(parse_instant("1704067200000"), Ok(1_704_067_200_000));
    assert_eq!(parse_instant("2024-01-01"), Ok(1_704_067_200_000));
    assert!(parse_instant("01/01/2024").is_err());
}

#[test]
fn test_runner_loads_config_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "page_size: 7").unwrap();

    let cli = Cli::parse_from([
        "restli-query",
        "page-stats",
        "--organization",
        "1",
        "-C",
        file.path().to_str().unwrap(),
    ]);
    let config = Runner::new(cli).load_config().unwrap();
    assert_eq!(config.page_size, 7);
}
