//! Tests for the client module

use super::*;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::resources::SearchAdAccounts;
use serde_json::json;
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    }
}

#[test]
fn test_new_rejects_invalid_config() {
    let config = ClientConfig {
        max_ids_per_call: 0,
        ..ClientConfig::default()
    };
    let err = LinkedInClient::new(config).unwrap_err();
    assert!(matches!(err, Error::InvalidConfigValue { .. }));
}

#[test]
fn test_new_keeps_config() {
    let client = LinkedInClient::new(ClientConfig::default()).unwrap();
    assert_eq!(client.config().api_version, "202401");
}

#[tokio::test]
async fn test_versioned_headers_on_every_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/adAccounts"))
        .and(header(VERSION_HEADER, "202406"))
        .and(header(RESTLI_PROTOCOL_HEADER, "2.0.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"elements": []})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig {
        api_version: "202406".to_string(),
        ..config_for(&server)
    };
    let client = LinkedInClient::new(config).unwrap();
    let accounts = client
        .search_ad_accounts(&SearchAdAccounts::default())
        .await
        .unwrap();

    assert!(accounts.is_empty());
}

#[tokio::test]
async fn test_no_authorization_without_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/adAccounts/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7, "name": "acme"})))
        .mount(&server)
        .await;

    let client = LinkedInClient::new(config_for(&server)).unwrap();
    let account = client.get_ad_account(7).await.unwrap();

    assert_eq!(account.id, 7);
    assert_eq!(account.name, "acme");
}
