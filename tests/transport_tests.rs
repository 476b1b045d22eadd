//! HTTP-level tests for `HttpTransport` using wiremock stubbing.
//!
//! These verify the wire details the facade relies on: the API key header,
//! the offset query parameter, verbatim body passthrough, and error mapping
//! for non-success statuses.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use propublica_congress::{Client, HttpTransport, RequestOptions, Transport, TransportError};

/// Test a successful fetch returns the body unparsed.
#[tokio::test]
async fn test_get_success() {
    let server = MockServer::start().await;

    let body = json!({"status": "OK", "results": [{"bill_id": "hres123-115"}]});
    Mock::given(method("GET"))
        .and(path("/115/bills/hres123"))
        .and(query_param("offset", "0"))
        .and(header("X-API-Key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(server.uri(), "test-api-key");

    let response = transport
        .get("115/bills/hres123", 0)
        .await
        .expect("should succeed");

    assert_eq!(response, body);
}

/// Test the offset travels as a query parameter, never in the path.
#[tokio::test]
async fn test_offset_sent_as_query_param() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/members/new"))
        .and(query_param("offset", "40"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(server.uri(), "test-api-key");

    transport
        .get("members/new", 40)
        .await
        .expect("should succeed");

    server.verify().await;
}

/// Test non-success statuses map to an API error carrying status and body.
#[tokio::test]
async fn test_error_status_mapped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/115/bills/hres123"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let transport = HttpTransport::new(server.uri(), "test-api-key");

    let result = transport.get("115/bills/hres123", 0).await;

    assert!(matches!(
        result,
        Err(TransportError::Api { status: 500, ref message }) if message == "internal error"
    ));
}

/// Test timeout handling using response delay.
#[tokio::test]
async fn test_request_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/members/new"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"results": []}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .expect("client build");

    let transport = HttpTransport::with_client(http_client, server.uri(), "test-api-key");

    let result = transport.get("members/new", 0).await;

    assert!(matches!(result, Err(TransportError::Request(_))));
}

/// Test a full facade query end to end over real HTTP.
#[tokio::test]
async fn test_client_end_to_end() {
    let server = MockServer::start().await;

    let body = json!({"status": "OK", "results": []});
    Mock::given(method("GET"))
        .and(path("/115/house/bills/passed"))
        .and(query_param("offset", "20"))
        .and(header("X-API-Key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::with_transport(
        HttpTransport::new(server.uri(), "test-api-key"),
        "test-api-key",
        115,
    )
    .expect("client should build");

    let response = client
        .get_recent_bills("house", "passed", RequestOptions::offset(20))
        .await
        .expect("should succeed");

    assert_eq!(response, body);
    server.verify().await;
}
