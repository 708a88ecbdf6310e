//! Behavior-driven tests for the fetch path.
//!
//! These tests verify what goes over the wire and how each failure stage is
//! reported, using a recording stub transport and a local mock server.

use std::sync::Arc;
use std::time::Duration;

use findkit_core::prelude::*;
use findkit_core::{FindingError, HttpError, HttpResponse, StubHttpClient};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VERSION_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<getVersionResponse xmlns="http://www.ebay.com/marketplace/search/v1/services">
  <ack>Success</ack>
  <version>1.13.0</version>
  <timestamp>2024-03-01T12:00:00.000Z</timestamp>
</getVersionResponse>"#;

const SEARCH_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<findItemsByKeywordsResponse xmlns="http://www.ebay.com/marketplace/search/v1/services">
  <ack>Success</ack>
  <version>1.13.0</version>
  <timestamp>2024-03-01T12:00:00.000Z</timestamp>
  <searchResult count="2">
    <item>
      <itemId>1</itemId>
      <title>The Hobbit</title>
    </item>
    <item>
      <itemId>2</itemId>
      <title>The Silmarillion</title>
    </item>
  </searchResult>
  <paginationOutput>
    <pageNumber>1</pageNumber>
    <entriesPerPage>2</entriesPerPage>
    <totalPages>10</totalPages>
    <totalEntries>20</totalEntries>
  </paginationOutput>
</findItemsByKeywordsResponse>"#;

fn service_with(client: Arc<StubHttpClient>, format: WireFormat) -> FindingService {
    let config = ServiceConfig::new("test-app")
        .expect("valid app id")
        .with_global_id(GlobalId::Gb)
        .with_timeout(Duration::from_secs(3))
        .with_wire_format(format);
    FindingService::with_config(config).with_http_client(client)
}

// =============================================================================
// Outgoing requests
// =============================================================================

#[tokio::test]
async fn when_a_request_executes_it_posts_the_body_with_service_headers() {
    // Given: A recording transport answering with a search response
    let client = Arc::new(StubHttpClient::responding(HttpResponse::ok(SEARCH_XML)));
    let service = service_with(client.clone(), WireFormat::Xml);
    let mut request = service
        .by_keywords_request()
        .with_keywords("tolkien")
        .with_page_limit(2);
    let expected_body = request.body().expect("body");

    // When: The first page is fetched
    let response = request.execute().await.expect("search succeeds");

    // Then: One call carried the body, headers and timeout
    let sent = client.requests();
    assert_eq!(sent.len(), 1);
    let call = &sent[0];
    assert_eq!(call.url, findkit_core::PRODUCTION_ENDPOINT);
    assert_eq!(call.body, expected_body);
    assert_eq!(call.timeout_ms, 3000);
    assert_eq!(call.header("X-EBAY-SOA-OPERATION-NAME"), Some("findItemsByKeywords"));
    assert_eq!(call.header("X-EBAY-SOA-SECURITY-APPNAME"), Some("test-app"));
    assert_eq!(call.header("X-EBAY-SOA-GLOBAL-ID"), Some("EBAY-GB"));
    assert_eq!(call.header("X-EBAY-SOA-REQUEST-DATA-FORMAT"), Some("XML"));
    assert_eq!(call.header("X-EBAY-SOA-RESPONSE-DATA-FORMAT"), Some("XML"));
    assert_eq!(call.header("X-EBAY-SOA-SERVICE-VERSION"), Some("1.13.0"));

    // And: The response is typed
    assert!(response.is_success());
    assert_eq!(response.items().len(), 2);
    assert_eq!(response.pagination_output.total_pages, 10);
}

#[tokio::test]
async fn get_page_clamps_and_sends_the_page_number() {
    let client = Arc::new(StubHttpClient::responding(HttpResponse::ok("{}")));
    let service = service_with(client.clone(), WireFormat::Json);
    let mut request = service.advanced_request().with_keywords("tolkien");

    request.get_page(3).await.expect("page 3");
    request.get_page(0).await.expect("page clamped to 1");
    request.get_page(250).await.expect("page clamped to 100");

    let pages: Vec<u64> = client
        .requests()
        .iter()
        .map(|call| {
            let body: serde_json::Value = serde_json::from_str(&call.body).expect("json body");
            body["paginationInput"]["pageNumber"]
                .as_u64()
                .expect("page number")
        })
        .collect();
    assert_eq!(pages, [3, 1, 100]);
}

#[tokio::test]
async fn each_operation_names_itself_in_the_header() {
    let client = Arc::new(StubHttpClient::responding(HttpResponse::ok("{}")));
    let service = service_with(client.clone(), WireFormat::Json);

    service.advanced_request().execute().await.expect("advanced");
    service.by_category_request().execute().await.expect("category");
    service.by_keywords_request().first().await.expect("keywords");
    service.by_product_request().execute().await.expect("product");
    service.in_stores_request().execute().await.expect("stores");
    service.histograms_request().execute().await.expect("histograms");
    service
        .keywords_recommendation_request()
        .execute()
        .await
        .expect("recommendation");
    service.version_request().execute().await.expect("version");

    let operations: Vec<String> = client
        .requests()
        .iter()
        .filter_map(|call| call.header("X-EBAY-SOA-OPERATION-NAME").map(str::to_owned))
        .collect();
    assert_eq!(
        operations,
        [
            "findItemsAdvanced",
            "findItemsByCategory",
            "findItemsByKeywords",
            "findItemsByProduct",
            "findItemsIneBayStores",
            "getHistograms",
            "getSearchKeywordsRecommendation",
            "getVersion",
        ]
    );
}

// =============================================================================
// Failure stages
// =============================================================================

#[tokio::test]
async fn when_the_service_returns_a_non_200_status_the_body_is_reported() {
    let client = Arc::new(StubHttpClient::responding(HttpResponse::new(
        500,
        "<errorMessage/>",
    )));
    let service = service_with(client, WireFormat::Xml);

    let error = service
        .version_request()
        .execute()
        .await
        .expect_err("status error");

    assert_eq!(error.status(), Some(500));
    assert!(error.to_string().contains("<errorMessage/>"));
}

#[tokio::test]
async fn when_the_transport_fails_the_error_carries_context() {
    let client = Arc::new(StubHttpClient::failing(HttpError::new("request timeout: 3s")));
    let service = service_with(client.clone(), WireFormat::Xml);

    let error = service
        .advanced_request()
        .with_keywords("tolkien")
        .execute()
        .await
        .expect_err("transport error");

    assert!(matches!(error, FindingError::Transport { .. }));
    assert_eq!(error.to_string(), "sending request: request timeout: 3s");
    assert_eq!(client.requests().len(), 1, "no retry");
}

#[tokio::test]
async fn when_the_body_does_not_parse_a_deserialization_error_is_returned() {
    let client = Arc::new(StubHttpClient::responding(HttpResponse::ok("not json")));
    let service = service_with(client, WireFormat::Json);

    let error = service
        .version_request()
        .execute()
        .await
        .expect_err("parse error");

    assert!(matches!(error, FindingError::Deserialization(_)));
    assert!(error.to_string().starts_with("parsing response: "));
}

// =============================================================================
// Real HTTP round trip
// =============================================================================

#[tokio::test]
async fn reqwest_transport_round_trip_against_mock_server() {
    // Given: A mock Finding endpoint expecting an XML keyword search
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/search/FindingService/v1"))
        .and(header("X-EBAY-SOA-OPERATION-NAME", "findItemsByKeywords"))
        .and(header("X-EBAY-SOA-SECURITY-APPNAME", "test-app"))
        .and(body_string_contains("<keywords>tolkien</keywords>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_XML))
        .expect(1)
        .mount(&server)
        .await;

    let config = ServiceConfig::new("test-app")
        .expect("valid app id")
        .with_endpoint(format!("{}/services/search/FindingService/v1", server.uri()));
    let service = FindingService::with_config(config);

    // When: The request executes over reqwest
    let response = service
        .by_keywords_request()
        .with_keywords("tolkien")
        .execute()
        .await
        .expect("search succeeds");

    // Then: The typed response comes back
    assert_eq!(response.items()[0].title, "The Hobbit");
    assert_eq!(response.search_result.count, 2);
}

#[tokio::test]
async fn reqwest_transport_reports_server_errors_as_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let config = ServiceConfig::new("test-app")
        .expect("valid app id")
        .with_endpoint(server.uri());
    let service = FindingService::with_config(config);

    let error = service
        .version_request()
        .execute()
        .await
        .expect_err("status error");

    assert_eq!(
        error,
        FindingError::Status {
            status: 503,
            body: String::from("maintenance"),
        }
    );
}

#[tokio::test]
async fn version_response_over_stub_parses_timestamp() {
    let client = Arc::new(StubHttpClient::responding(HttpResponse::ok(VERSION_XML)));
    let service = service_with(client, WireFormat::Xml);

    let response = service.version_request().execute().await.expect("version");

    assert_eq!(response.version, "1.13.0");
    assert!(response.processed_at().is_some());
}
