//! End-to-end tests against a wiremock server.

use std::time::Duration;

use assert2::{check, let_assert};
use sift::api::{document, indices, root, search};
use sift::{ApiClient, CancellationToken, Error, HyperClient};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string, header, method, path, query_param},
};

fn client_for(server: &MockServer) -> ApiClient<HyperClient> {
    ApiClient::new(HyperClient::new(), server.uri()).expect("valid url")
}

#[tokio::test]
async fn search_size_unset_versus_zero() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/a,b/_search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"took": 1})))
        .expect(2)
        .mount(&mock_server)
        .await;
    let client = client_for(&mock_server);

    search::Search::new()
        .index(["a", "b"])
        .send(&client)
        .await
        .expect("unset");
    search::Search::new()
        .index(["a", "b"])
        .size(0)
        .send(&client)
        .await
        .expect("zero");

    let requests = mock_server.received_requests().await.expect("recording");
    check!(requests.len() == 2);
    check!(!requests[0].url.query_pairs().any(|(k, _)| k == "size"));
    let sizes: Vec<_> = requests[1]
        .url
        .query_pairs()
        .filter(|(k, _)| k == "size")
        .map(|(_, v)| v.into_owned())
        .collect();
    check!(sizes == vec!["0".to_string()]);
}

#[tokio::test]
async fn json_body_and_caller_headers() {
    let mock_server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/logs-000001"))
        .and(header("content-type", "application/json"))
        .and(header("x-opaque-id", "bootstrap"))
        .and(query_param("wait_for_active_shards", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"acknowledged": true})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    let client = client_for(&mock_server);

    let response = indices::Create::new("logs-000001")
        .wait_for_active_shards("1")
        .opaque_id("bootstrap")
        .json(&serde_json::json!({"settings": {"number_of_replicas": 0}}))
        .expect("json")
        .send(&client)
        .await
        .expect("response");

    check!(response.is_success());
    let body: serde_json::Value = response.json().expect("json");
    check!(body["acknowledged"] == true);
}

#[tokio::test]
async fn bulk_sends_ndjson() {
    let mock_server = MockServer::start().await;
    let payload = "{\"index\":{\"_id\":\"1\"}}\n{\"message\":\"hello\"}\n";
    Mock::given(method("POST"))
        .and(path("/logs/_bulk"))
        .and(header("content-type", "application/x-ndjson"))
        .and(body_string(payload))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"errors": false})))
        .expect(1)
        .mount(&mock_server)
        .await;
    let client = client_for(&mock_server);

    let response = document::Bulk::new()
        .index("logs")
        .body(payload)
        .send(&client)
        .await
        .expect("response");
    check!(response.status() == 200);
}

#[tokio::test]
async fn error_statuses_are_responses() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/logs/_doc/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("x-elastic-product", "Elasticsearch")
                .set_body_json(serde_json::json!({"found": false})),
        )
        .mount(&mock_server)
        .await;
    let client = client_for(&mock_server);

    let response = document::Get::new("logs", "missing")
        .send(&client)
        .await
        .expect("404 is a response");

    check!(response.status() == 404);
    check!(response.is_client_error());
    check!(response.header("x-elastic-product") == Some("Elasticsearch"));
    let body: serde_json::Value = response.json().expect("json");
    check!(body["found"] == false);
}

#[tokio::test]
async fn ping_uses_head() {
    let mock_server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    let client = client_for(&mock_server);

    let response = root::Ping::new().send(&client).await.expect("response");
    check!(response.is_success());
    check!(response.body().is_empty());
}

#[tokio::test]
async fn triggered_token_fails_without_io() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;
    let client = client_for(&mock_server);

    let token = CancellationToken::new();
    token.cancel();

    let result = search::Search::new()
        .cancellation(token)
        .send(&client)
        .await;
    let_assert!(Err(err) = result);
    check!(err.is_cancelled());
    check!(err.is_transport());
}

#[tokio::test]
async fn token_aborts_in_flight_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/_reindex"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .mount(&mock_server)
        .await;
    let client = client_for(&mock_server);

    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let result = document::Reindex::new()
        .wait_for_completion(true)
        .cancellation(token)
        .send(&client)
        .await;
    let_assert!(Err(Error::Cancelled) = result);
}

#[tokio::test]
async fn slow_response_times_out() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .mount(&mock_server)
        .await;

    let http = HyperClient::builder()
        .timeout(Duration::from_millis(200))
        .build();
    let client = ApiClient::new(http, mock_server.uri()).expect("valid url");

    let result = sift::api::cluster::Health::new()
        .wait_for_status("green")
        .send(&client)
        .await;
    let_assert!(Err(err) = result);
    check!(err.is_timeout());
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // Bind then drop a listener so the port is known to be closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let address = listener.local_addr().expect("address");
    drop(listener);

    let client =
        ApiClient::new(HyperClient::new(), format!("http://{address}")).expect("valid url");
    let result = root::Info::new().send(&client).await;
    let_assert!(Err(err) = result);
    check!(err.is_connection());
}

#[tokio::test]
async fn construction_errors_before_dispatch() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;
    let client = client_for(&mock_server);

    let result = search::Search::new()
        .header("bad header name", "value")
        .send(&client)
        .await;
    let_assert!(Err(err) = result);
    check!(err.is_construction());
}
