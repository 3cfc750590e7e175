//! Integration tests using mock HTTP server
//!
//! Tests the full flow: filters → encoded query → paged/batched requests →
//! decoded records.

use restli_query::resources::{
    AdAccountStatus, AdCampaignStatus, PostsByOwner, SearchAdAccounts, SearchAdCampaigns,
    SearchAdCreatives,
};
use restli_query::{ClientConfig, Error, LinkedInClient};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> LinkedInClient {
    let config = ClientConfig {
        base_url: server.uri(),
        access_token: Some("test-token".to_string()),
        page_size: 2,
        offset_page_size: 2,
        max_ids_per_call: 2,
        ..ClientConfig::default()
    };
    LinkedInClient::new(config).unwrap()
}

fn token_page(ids: &[i64], next: Option<&str>) -> ResponseTemplate {
    let elements: Vec<_> = ids
        .iter()
        .map(|id| json!({"id": id, "name": format!("n{id}")}))
        .collect();
    let metadata = match next {
        Some(token) => json!({"nextPageToken": token}),
        None => json!({}),
    };
    ResponseTemplate::new(200).set_body_json(json!({"metadata": metadata, "elements": elements}))
}

// ============================================================================
// Token Pagination
// ============================================================================

#[tokio::test]
async fn test_ad_accounts_follow_tokens_until_exhausted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/adAccounts"))
        .and(query_param("q", "search"))
        .and(query_param("search", "(status:(values:List(ACTIVE)))"))
        .and(query_param("pageSize", "2"))
        .and(query_param_is_missing("pageToken"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("LinkedIn-Version", "202401"))
        .and(header("X-Restli-Protocol-Version", "2.0.0"))
        .respond_with(token_page(&[1, 2], Some("t1")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/adAccounts"))
        .and(query_param("pageToken", "t1"))
        .and(query_param("pageSize", "2"))
        .respond_with(token_page(&[3, 4], Some("t2")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/adAccounts"))
        .and(query_param("pageToken", "t2"))
        .respond_with(token_page(&[5], Some("")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let search = SearchAdAccounts {
        status: Some(vec![AdAccountStatus::Active]),
        ..Default::default()
    };
    let accounts = client.search_ad_accounts(&search).await.unwrap();

    let ids: Vec<i64> = accounts.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_explicit_page_token_fetches_one_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/adAccounts"))
        .and(query_param("pageToken", "resume"))
        .respond_with(token_page(&[9], Some("more")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let search = SearchAdAccounts {
        page_token: Some("resume".to_string()),
        ..Default::default()
    };
    let accounts = client.search_ad_accounts(&search).await.unwrap();

    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].id, 9);
}

#[tokio::test]
async fn test_empty_first_page_ends_run() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/adAccounts/1/adCampaigns"))
        .respond_with(token_page(&[], Some("ignored")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let campaigns = client
        .search_ad_campaigns(1, &SearchAdCampaigns::default())
        .await
        .unwrap();

    assert!(campaigns.is_empty());
}

#[tokio::test]
async fn test_campaigns_indexed_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/adAccounts/42/adCampaigns"))
        .and(query_param("q", "search"))
        .and(query_param(
            "search.campaignGroup.values[0]",
            "urn:li:sponsoredCampaignGroup:7",
        ))
        .and(query_param("search.status.values[0]", "ACTIVE"))
        .and(query_param("search.status.values[1]", "PAUSED"))
        .and(query_param("search.test", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "metadata": {},
            "elements": [{
                "id": 100,
                "name": "spring",
                "campaignGroup": "urn:li:sponsoredCampaignGroup:7",
                "targetingCriteria": {"include": {"and": [{"or": {"urn:li:adTargetingFacet:locations": ["urn:li:geo:103644278"]}}]}}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let search = SearchAdCampaigns {
        campaign_group: Some(vec![7]),
        status: Some(vec![AdCampaignStatus::Active, AdCampaignStatus::Paused]),
        test: Some(false),
        ..Default::default()
    };
    let campaigns = client.search_ad_campaigns(42, &search).await.unwrap();

    assert_eq!(campaigns.len(), 1);
    let targeting = campaigns[0].targeting_criteria.as_ref().unwrap();
    assert!(targeting.raw().contains("urn:li:geo:103644278"));
}

#[tokio::test]
async fn test_creatives_criteria_finder() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/adAccounts/42/creatives"))
        .and(query_param("q", "criteria"))
        .and(query_param("campaigns", "List(urn:li:sponsoredCampaign:1)"))
        .and(query_param("isTestAccount", "false"))
        .and(query_param("sortOrder", "DESCENDING"))
        .and(header("X-RestLi-Method", "FINDER"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "metadata": {},
            "elements": [{"id": "urn:li:sponsoredCreative:5", "intendedStatus": "ACTIVE"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let search = SearchAdCreatives {
        campaigns: Some(vec!["urn:li:sponsoredCampaign:1".to_string()]),
        is_test_account: Some(false),
        sort_order: Some("DESCENDING".to_string()),
        ..Default::default()
    };
    let creatives = client.search_ad_creatives(42, &search).await.unwrap();

    assert_eq!(creatives.len(), 1);
    assert_eq!(creatives[0].intended_status.as_deref(), Some("ACTIVE"));
}

#[tokio::test]
async fn test_error_mid_run_returns_no_partial_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/adAccounts"))
        .and(query_param_is_missing("pageToken"))
        .respond_with(token_page(&[1, 2], Some("t1")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/adAccounts"))
        .and(query_param("pageToken", "t1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .search_ad_accounts(&SearchAdAccounts::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}

// ============================================================================
// Offset Pagination and Batch Gets
// ============================================================================

#[tokio::test]
async fn test_posts_by_owner_offset_paging_and_window() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("q", "author"))
        .and(query_param("author", "urn:li:organization:5"))
        .and(query_param("start", "0"))
        .and(query_param("count", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paging": {"start": 0, "count": 2, "links": [{"rel": "next", "href": "/rest/posts?start=2"}]},
            "elements": [
                {"id": "urn:li:share:1", "createdAt": 1000, "publishedAt": 1000},
                {"id": "urn:li:share:2", "createdAt": 2000, "publishedAt": 2000}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("start", "2"))
        .and(query_param("count", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paging": {"start": 2, "count": 2, "links": [{"rel": "prev", "href": "/rest/posts?start=0"}]},
            "elements": [{"id": "urn:li:share:3", "createdAt": 3000, "publishedAt": 3000}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let owner = PostsByOwner {
        created_start: Some(1500),
        ..PostsByOwner::new(5)
    };
    let posts = client.posts_by_owner(&owner).await.unwrap();

    let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["urn:li:share:2", "urn:li:share:3"]);
}

#[tokio::test]
async fn test_posts_batch_get_dedups_and_chunks() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("ids", "List(urn:li:share:1,urn:li:share:2)"))
        .and(header("X-RestLi-Method", "BATCH_GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": {
                "urn:li:share:1": {"id": "urn:li:share:1"},
                "urn:li:share:2": {"id": "urn:li:share:2"}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("ids", "List(urn:li:share:3)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let posts = client
        .posts(["urn:li:share:1", "urn:li:share:2", "urn:li:share:1", "urn:li:share:3"])
        .await
        .unwrap();

    let mut ids: Vec<String> = posts.into_iter().map(|p| p.id).collect();
    ids.sort();
    assert_eq!(ids, vec!["urn:li:share:1", "urn:li:share:2"]);
}

// ============================================================================
// Statistics
// ============================================================================

#[tokio::test]
async fn test_page_stats_reinterpreted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizationPageStatistics"))
        .and(query_param("q", "organization"))
        .and(query_param("organization", "urn:li:organization:5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "paging": {"start": 0, "count": 10, "links": []},
            "elements": [{
                "organization": "urn:li:organization:5",
                "pageStatisticsBySeniority": [{
                    "seniority": "urn:li:seniority:3",
                    "pageStatistics": {"views": {"allPageViews": {"pageViews": 8}}}
                }],
                "totalPageStatistics": {
                    "views": {"allPageViews": {"pageViews": 30, "uniquePageViews": 11}},
                    "clicks": {
                        "careersPageClicks": {"careersPageJobsClicks": 2, "careersPagePromoLinksClicks": 1},
                        "mobileCareersPageClicks": "unexpected"
                    }
                }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let stats = client.lifetime_page_stats(5).await.unwrap();

    assert_eq!(stats.len(), 1);
    let stats = &stats[0];
    assert_eq!(stats.by_seniority[0].views["allPageViews"].page_views, 8);
    assert_eq!(stats.totals.views["allPageViews"].unique_page_views, 11);
    assert_eq!(stats.totals.clicks.len(), 1);
    assert_eq!(stats.totals.clicks["careersPageClicks"]["careersPageJobsClicks"], 2);
}

#[tokio::test]
async fn test_page_stats_views_failure_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizationPageStatistics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "elements": [{
                "organization": "urn:li:organization:5",
                "totalPageStatistics": {"views": ["not", "a", "map"]}
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.lifetime_page_stats(5).await.unwrap_err();

    match err {
        Error::Reinterpret { raw, .. } => assert!(raw.contains("not")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_follower_stats_timebound_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizationalEntityFollowerStatistics"))
        .and(query_param("q", "organizationalEntity"))
        .and(query_param("organizationalEntity", "urn:li:organization:5"))
        .and(query_param("timeIntervals.timeGranularityType", "DAY"))
        .and(query_param("timeIntervals.timeRange.start", "1704067200000"))
        .and(query_param("timeIntervals.timeRange.end", "1704153600000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "elements": [{
                "timeRange": {"start": 1_704_067_200_000_i64, "end": 1_704_153_600_000_i64},
                "followerGains": {"organicFollowerGain": 4, "paidFollowerGain": 1},
                "organizationalEntity": "urn:li:organization:5"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let stats = client
        .follower_stats_timebound(5, 1_704_067_200_000, 1_704_153_600_000)
        .await
        .unwrap();

    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].follower_gains.organic_follower_gain, 4);
}

#[tokio::test]
async fn test_share_stats_lifetime_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizationalEntityShareStatistics"))
        .and(query_param("shares[0]", "urn:li:share:10"))
        .and(query_param("shares[1]", "urn:li:share:11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "elements": [{
                "share": "urn:li:share:10",
                "organizationalEntity": "urn:li:organization:5",
                "totalShareStatistics": {"clickCount": 3, "engagement": 0.25, "impressionCount": 40}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let stats = client
        .share_stats_lifetime(5, &["10".to_string(), "11".to_string()])
        .await
        .unwrap();

    assert_eq!(stats[0].total_share_statistics.impression_count, 40);
    assert_eq!(stats[0].share.as_deref(), Some("urn:li:share:10"));
}
