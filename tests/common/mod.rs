//! Shared utilities for integration testing: an in-process mock gateway.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, HeaderMap, StatusCode, Uri},
    response::Response,
    Router,
};
use serde_json::Value;
use tokio::net::TcpListener;

use kalp_airdrop::config::GatewayConfig;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_CONTRACT: &str = "contract-123";

/// One request as the mock gateway saw it.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RecordedRequest {
    pub path: String,
    pub headers: HeaderMap,
    pub body: Value,
}

type Responder = dyn Fn(&str) -> (u16, String) + Send + Sync;

#[derive(Clone)]
struct MockState {
    respond: Arc<Responder>,
    delay: Duration,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Handle to a running mock gateway.
pub struct MockGateway {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

#[allow(dead_code)]
impl MockGateway {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Gateway config pointing at this mock.
    pub fn config(&self) -> GatewayConfig {
        GatewayConfig {
            base_url: self.base_url(),
            contract_id: TEST_CONTRACT.to_string(),
            api_key: TEST_API_KEY.to_string(),
            ..GatewayConfig::default()
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("no request reached the mock gateway")
    }
}

/// Start a mock gateway. `respond` maps the contract method name (last path
/// segment) to a status code and body.
pub async fn start_mock_gateway<F>(respond: F) -> MockGateway
where
    F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
{
    start_slow_mock_gateway(respond, Duration::ZERO).await
}

/// Like `start_mock_gateway`, but every response is delayed.
pub async fn start_slow_mock_gateway<F>(respond: F, delay: Duration) -> MockGateway
where
    F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
{
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        respond: Arc::new(respond),
        delay,
        requests: requests.clone(),
    };

    let app = Router::new().fallback(handle).with_state(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockGateway { addr, requests }
}

async fn handle(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    let method = path.rsplit('/').next().unwrap_or_default().to_string();
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);

    state.requests.lock().unwrap().push(RecordedRequest {
        path,
        headers,
        body,
    });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    let (status, body) = (state.respond)(&method);
    Response::builder()
        .status(StatusCode::from_u16(status).unwrap())
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Gateway-style success body whose contract result is `value`.
#[allow(dead_code)]
pub fn result_body(value: Value) -> String {
    serde_json::json!({
        "message": "Transaction successful",
        "result": { "result": value }
    })
    .to_string()
}

/// Happy-path responder for every contract method.
#[allow(dead_code)]
pub fn healthy_gateway(method: &str) -> (u16, String) {
    let body = match method {
        "BalanceOf" => result_body(serde_json::json!(250)),
        "TotalSupply" => result_body(serde_json::json!(10_000)),
        "GetTransactions" => result_body(serde_json::json!([
            {"from": "0x0", "to": "alice", "value": 100},
            {"from": "alice", "to": "bob", "value": 25}
        ])),
        _ => result_body(Value::Null),
    };
    (200, body)
}
