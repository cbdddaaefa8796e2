mod common;

use std::time::Duration;

use common::*;
use mizan::config::EtherscanConfig;
use mizan::error::InputField;
use mizan::error::PipelineError;
use mizan::pipeline::datasource::EtherscanClient;
use mizan::pipeline::datasource::FetchRequest;
use mizan::pipeline::datasource::TransactionSource;
use serde_json::json;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::matchers::query_param;

fn config_for(server: &MockServer) -> EtherscanConfig {
    EtherscanConfig {
        base_url: format!("{}/v2/api", server.uri()),
        timeout_ms: 2_000,
        ..EtherscanConfig::default()
    }
}

fn records(count: usize) -> Vec<serde_json::Value> {
    (0..count)
        .map(|i| {
            raw_record(
                &format!("0x{:064x}", i + 1),
                WALLET,
                &counterparty(i),
                eth(1),
                1_700_000_000 - i as i64,
            )
        })
        .collect()
}

#[tokio::test]
async fn test_fetch_sends_txlist_query_and_returns_limit_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/api"))
        .and(query_param("chainid", "1"))
        .and(query_param("module", "account"))
        .and(query_param("action", "txlist"))
        .and(query_param("address", WALLET))
        .and(query_param("sort", "desc"))
        .and(query_param("offset", "5"))
        .and(query_param("page", "1"))
        .and(query_param("apikey", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(records(5))))
        .expect(1)
        .mount(&server)
        .await;

    let client = EtherscanClient::new(config_for(&server), API_KEY).expect("client");
    let outcome = client.fetch_transactions(&FetchRequest::new(WALLET, 5)).await.expect("fetch");

    assert_eq!(outcome.transactions.len(), 5);
    assert_eq!(outcome.skipped, 0);
    assert_eq!(outcome.transactions[0].hash, format!("0x{:064x}", 1));
    assert_eq!(outcome.transactions[0].to_address.as_deref(), Some(counterparty(0).as_str()));
    assert!((outcome.transactions[0].value_eth - 1.0).abs() < 1e-12);
}

#[tokio::test]
async fn test_fetch_returns_fewer_when_wallet_has_fewer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(records(3))))
        .mount(&server)
        .await;

    let client = EtherscanClient::new(config_for(&server), API_KEY).expect("client");
    let outcome = client.fetch_transactions(&FetchRequest::new(WALLET, 20)).await.expect("fetch");

    assert_eq!(outcome.transactions.len(), 3);
}

#[tokio::test]
async fn test_fetch_truncates_oversized_provider_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(records(8))))
        .mount(&server)
        .await;

    let client = EtherscanClient::new(config_for(&server), API_KEY).expect("client");
    let outcome = client.fetch_transactions(&FetchRequest::new(WALLET, 4)).await.expect("fetch");

    assert_eq!(outcome.transactions.len(), 4);
}

#[tokio::test]
async fn test_failure_status_surfaces_provider_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "0",
            "message": "No transactions found",
            "result": [],
        })))
        .mount(&server)
        .await;

    let client = EtherscanClient::new(config_for(&server), API_KEY).expect("client");
    let err = client.fetch_transactions(&FetchRequest::new(WALLET, 10)).await.unwrap_err();

    assert_eq!(err, PipelineError::ProviderError("No transactions found".to_string()));
}

#[tokio::test]
async fn test_invalid_key_is_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "0",
            "message": "NOTOK",
            "result": "Invalid API Key",
        })))
        .mount(&server)
        .await;

    let client = EtherscanClient::new(config_for(&server), API_KEY).expect("client");
    let err = client.fetch_transactions(&FetchRequest::new(WALLET, 10)).await.unwrap_err();

    match err {
        PipelineError::ProviderError(message) => assert!(message.contains("Invalid API Key")),
        other => panic!("expected ProviderError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_without_json_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>upstream down</html>"))
        .mount(&server)
        .await;

    let client = EtherscanClient::new(config_for(&server), API_KEY).expect("client");
    let err = client.fetch_transactions(&FetchRequest::new(WALLET, 10)).await.unwrap_err();

    assert!(matches!(err, PipelineError::NetworkError(_)));
    assert!(err.to_string().contains("try again later"));
}

#[tokio::test]
async fn test_unreadable_success_body_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = EtherscanClient::new(config_for(&server), API_KEY).expect("client");
    let err = client.fetch_transactions(&FetchRequest::new(WALLET, 10)).await.unwrap_err();

    assert!(matches!(err, PipelineError::NetworkError(_)));
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_envelope(records(1)))
                .set_delay(Duration::from_millis(1_500)),
        )
        .mount(&server)
        .await;

    let config = EtherscanConfig {
        timeout_ms: 100,
        ..config_for(&server)
    };
    let client = EtherscanClient::new(config, API_KEY).expect("client");
    let err = client.fetch_transactions(&FetchRequest::new(WALLET, 10)).await.unwrap_err();

    assert!(matches!(err, PipelineError::NetworkError(_)));
    assert!(!err.to_string().contains(API_KEY));
}

#[tokio::test]
async fn test_malformed_record_is_skipped_and_counted() {
    let server = MockServer::start().await;
    let mut body = records(3);
    body[1]["value"] = json!("not-a-number");
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(body)))
        .mount(&server)
        .await;

    let client = EtherscanClient::new(config_for(&server), API_KEY).expect("client");
    let outcome = client.fetch_transactions(&FetchRequest::new(WALLET, 10)).await.expect("fetch");

    assert_eq!(outcome.transactions.len(), 2);
    assert_eq!(outcome.skipped, 1);
}

#[tokio::test]
async fn test_invalid_input_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(records(1))))
        .expect(0)
        .mount(&server)
        .await;

    let client = EtherscanClient::new(config_for(&server), API_KEY).expect("client");

    let err = client.fetch_transactions(&FetchRequest::new("0x1234", 10)).await.unwrap_err();
    assert!(matches!(err, PipelineError::InvalidInput { field: InputField::Address, .. }));

    let err = client.fetch_transactions(&FetchRequest::new(WALLET, 0)).await.unwrap_err();
    assert!(matches!(
        err,
        PipelineError::InvalidInput {
            field: InputField::TransactionCount,
            ..
        }
    ));
}
