//! Gateway client request/response contract against a mock gateway.

use std::time::Duration;

use serde_json::json;

use kalp_airdrop::gateway::types::FALLBACK_ERROR_MESSAGE;
use kalp_airdrop::gateway::{GatewayClient, GatewayError};

mod common;
use common::{healthy_gateway, start_mock_gateway, start_slow_mock_gateway, TEST_API_KEY, TEST_CONTRACT};

#[tokio::test]
async fn test_claim_request_shape() {
    let gateway = start_mock_gateway(healthy_gateway).await;
    let client = GatewayClient::new(gateway.config()).unwrap();

    client.claim("alice").await.unwrap();

    let request = gateway.last_request();
    assert_eq!(request.path, format!("/invoke/{}/Claim", TEST_CONTRACT));
    assert_eq!(
        request.body,
        json!({
            "network": "TESTNET",
            "blockchain": "KALP",
            "walletAddress": "b14602f1289c43807a72115f1c902df695a1218d",
            "args": { "amount": 100, "address": "alice" }
        })
    );
    assert_eq!(request.headers["x-api-key"], TEST_API_KEY);
    assert_eq!(request.headers["content-type"], "application/json");
}

#[tokio::test]
async fn test_claim_uses_configured_amount() {
    let gateway = start_mock_gateway(healthy_gateway).await;
    let mut config = gateway.config();
    config.claim_amount = 250;
    let client = GatewayClient::new(config).unwrap();

    client.claim("bob").await.unwrap();
    assert_eq!(gateway.last_request().body["args"], json!({"amount": 250, "address": "bob"}));
}

#[tokio::test]
async fn test_balance_of_reads_nested_result() {
    let gateway = start_mock_gateway(healthy_gateway).await;
    let client = GatewayClient::new(gateway.config()).unwrap();

    let response = client.balance_of("alice").await.unwrap();
    assert_eq!(response.payload_u64().unwrap(), 250);

    let request = gateway.last_request();
    assert_eq!(request.path, format!("/query/{}/BalanceOf", TEST_CONTRACT));
    assert_eq!(request.body["args"], json!({"account": "alice"}));
}

#[tokio::test]
async fn test_total_supply_sends_empty_args() {
    let gateway = start_mock_gateway(healthy_gateway).await;
    let client = GatewayClient::new(gateway.config()).unwrap();

    let response = client.total_supply().await.unwrap();
    assert_eq!(response.payload_u64().unwrap(), 10_000);

    let request = gateway.last_request();
    assert!(request.path.ends_with("/query/contract-123/TotalSupply"));
    assert_eq!(request.body["args"], json!({}));
}

#[tokio::test]
async fn test_transfer_from_args_are_exact() {
    let gateway = start_mock_gateway(healthy_gateway).await;
    let client = GatewayClient::new(gateway.config()).unwrap();

    client.transfer_from("alice", "bob", 42).await.unwrap();

    let request = gateway.last_request();
    assert!(request.path.ends_with("/invoke/contract-123/TransferFrom"));
    assert_eq!(request.body["args"], json!({"from": "alice", "to": "bob", "value": 42}));
    assert!(request.body["args"]["value"].is_u64());
}

#[tokio::test]
async fn test_get_transactions() {
    let gateway = start_mock_gateway(healthy_gateway).await;
    let client = GatewayClient::new(gateway.config()).unwrap();

    let records = client.get_transactions().await.unwrap().transfers().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].value, 25);

    let request = gateway.last_request();
    assert!(request.path.ends_with("/query/contract-123/GetTransactions"));
    assert_eq!(request.body["args"], json!({}));
}

#[tokio::test]
async fn test_server_message_surfaces_verbatim() {
    let gateway = start_mock_gateway(|_| (400, r#"{"message":"insufficient funds"}"#.to_string())).await;
    let client = GatewayClient::new(gateway.config()).unwrap();

    let err = client.transfer_from("alice", "bob", 1_000_000).await.unwrap_err();
    assert_eq!(err.to_string(), "insufficient funds");
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_missing_message_uses_fallback() {
    let gateway = start_mock_gateway(|_| (500, String::new())).await;
    let client = GatewayClient::new(gateway.config()).unwrap();

    let err = client.total_supply().await.unwrap_err();
    assert_eq!(err.to_string(), FALLBACK_ERROR_MESSAGE);
    assert!(matches!(err, GatewayError::Api { status: 500, .. }));
}

#[tokio::test]
async fn test_success_with_non_json_body() {
    let gateway = start_mock_gateway(|_| (200, "not json".to_string())).await;
    let client = GatewayClient::new(gateway.config()).unwrap();

    let err = client.total_supply().await.unwrap_err();
    assert!(matches!(err, GatewayError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_configurable_key_header() {
    let gateway = start_mock_gateway(healthy_gateway).await;
    let mut config = gateway.config();
    config.api_key_header = "auth".to_string();
    let client = GatewayClient::new(config).unwrap();

    client.total_supply().await.unwrap();

    let request = gateway.last_request();
    assert_eq!(request.headers["auth"], TEST_API_KEY);
    assert!(request.headers.get("x-api-key").is_none());
}

#[tokio::test]
async fn test_each_call_is_a_single_request() {
    let gateway = start_mock_gateway(|_| (503, String::new())).await;
    let client = GatewayClient::new(gateway.config()).unwrap();

    assert!(client.claim("alice").await.is_err());
    assert_eq!(gateway.requests().len(), 1, "no retries");
}

#[tokio::test]
async fn test_configured_timeout() {
    let gateway = start_slow_mock_gateway(healthy_gateway, Duration::from_secs(3)).await;
    let mut config = gateway.config();
    config.request_timeout_secs = Some(1);
    let client = GatewayClient::new(config).unwrap();

    let err = client.total_supply().await.unwrap_err();
    match err {
        GatewayError::Network(e) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {:?}", other),
    }
}
