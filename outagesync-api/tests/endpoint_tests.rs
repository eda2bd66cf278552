//! Endpoint integration tests.
//!
//! These tests run the typed endpoints against a mock outage API and
//! cover authentication, retry behavior, and error classification.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use outagesync_api::{
    ApiClient, ApiConfig, ApiError, FailureKind, OutageApi, RetryPolicy,
};
use outagesync_core::EnhancedOutage;

const TEST_API_KEY: &str = "test-api-key";

/// Builds an endpoint layer pointed at the mock server, with short retry
/// delays so retry tests stay fast.
fn api_for(server: &MockServer) -> OutageApi {
    let config = ApiConfig::new(Url::parse(&server.uri()).unwrap(), TEST_API_KEY);
    let retry = RetryPolicy::new(3).with_base_delay(Duration::from_millis(1));
    let client = ApiClient::with_retry(config, retry).unwrap();
    OutageApi::new(client)
}

#[tokio::test]
async fn test_list_outages_returns_typed_outages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/outages"))
        .and(header("x-api-key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "44a3e0d4-8b8b-41c3-9a0f-cf4ae5c8d976",
                "begin": "2022-05-23T12:21:27.377Z",
                "end": "2022-11-13T02:16:38.905Z"
            },
            {
                "id": "9ed11921-1c5b-40f4-be66-adb4e2f016bd",
                "begin": "2021-07-26T17:09:31.036Z",
                "end": "2021-08-29T00:37:42.253Z"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let outages = api.list_outages().await.unwrap();

    assert_eq!(outages.len(), 2);
    assert_eq!(outages[0].id, "44a3e0d4-8b8b-41c3-9a0f-cf4ae5c8d976");
    assert_eq!(
        outages[0].begin,
        "2022-05-23T12:21:27.377Z".parse::<DateTime<Utc>>().unwrap()
    );
}

#[tokio::test]
async fn test_site_info_returns_device_roster() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/site-info/norwich-pear-tree"))
        .and(header("x-api-key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "norwich-pear-tree",
            "name": "Norwich Pear Tree",
            "devices": [
                {"id": "44a3e0d4-8b8b-41c3-9a0f-cf4ae5c8d976", "name": "Battery 1"},
                {"id": "ec66da9e-f4c8-4e35-b04c-d0f4052a6dd2", "name": "Battery 2"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let site = api.site_info("norwich-pear-tree").await.unwrap();

    assert_eq!(site.id, "norwich-pear-tree");
    assert_eq!(site.devices.len(), 2);
    assert_eq!(site.devices[0].name, "Battery 1");
}

#[tokio::test]
async fn test_submit_site_outages_posts_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/site-outages/norwich-pear-tree"))
        .and(header("x-api-key", TEST_API_KEY))
        .and(body_json(json!([
            {
                "id": "44a3e0d4-8b8b-41c3-9a0f-cf4ae5c8d976",
                "name": "Battery 1",
                "begin": "2022-05-23T12:21:27.377Z",
                "end": "2022-11-13T02:16:38.905Z"
            }
        ])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let outages = vec![EnhancedOutage {
        id: "44a3e0d4-8b8b-41c3-9a0f-cf4ae5c8d976".to_string(),
        name: "Battery 1".to_string(),
        begin: "2022-05-23T12:21:27.377Z".parse().unwrap(),
        end: "2022-11-13T02:16:38.905Z".parse().unwrap(),
    }];

    api.submit_site_outages("norwich-pear-tree", &outages)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_internal_server_error_is_retried_four_times() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/outages"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "Internal Server Error"})),
        )
        .expect(4)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.list_outages().await.unwrap_err();

    assert_eq!(
        err.classify(),
        FailureKind::Upstream {
            status: 500,
            message: "Internal Server Error".to_string(),
        }
    );
}

#[tokio::test]
async fn test_request_succeeds_after_transient_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/outages"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/outages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let outages = api.list_outages().await.unwrap();

    assert!(outages.is_empty());
}

#[tokio::test]
async fn test_other_statuses_are_not_retried() {
    for status in [403_u16, 404, 429, 502, 503] {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/outages"))
            .respond_with(
                ResponseTemplate::new(status).set_body_json(json!({"message": "request refused"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let api = api_for(&server);
        let err = api.list_outages().await.unwrap_err();

        match err {
            ApiError::Upstream {
                status: got,
                message,
            } => {
                assert_eq!(got, status);
                assert_eq!(message, "request refused");
            }
            other => panic!("Expected upstream error, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_non_json_error_body_falls_back_to_raw_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/site-info/no-such-site"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such site\n"))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.site_info("no-such-site").await.unwrap_err();

    match err {
        ApiError::Upstream { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "no such site");
        }
        other => panic!("Expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_success_body_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/outages"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.list_outages().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(err.classify(), FailureKind::Unknown);
}

#[tokio::test]
async fn test_transport_errors_classify_as_unknown() {
    // Nothing listens on the discard port, so the connection is refused.
    // The retry budget stays unused: only HTTP 500 responses are retried,
    // never transport faults.
    let config = ApiConfig::new(Url::parse("http://127.0.0.1:9").unwrap(), TEST_API_KEY)
        .with_timeout(Duration::from_secs(2));
    let client = ApiClient::with_retry(config, RetryPolicy::new(3)).unwrap();
    let api = OutageApi::new(client);

    let err = api.list_outages().await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.classify(), FailureKind::Unknown);
}
