//! Gateway response types and error definitions.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Message used when a failed response carries none.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

/// Errors that can occur during gateway operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Request could not be sent or the response could not be read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Gateway answered with a non-2xx status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Gateway answered 2xx with a body that is not JSON.
    #[error("malformed gateway response: {0}")]
    MalformedResponse(String),

    /// `result.result` is absent or has the wrong type.
    #[error("gateway response has no usable result payload")]
    MissingPayload,

    /// API key cannot be sent as a header value.
    #[error("invalid API key: {0}")]
    InvalidApiKey(String),

    /// HTTP client could not be constructed.
    #[error("client error: {0}")]
    Client(String),
}

impl GatewayError {
    /// Build an `Api` error from a failed response's status and raw body.
    pub fn from_failed_response(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|v| match v.get("message") {
                Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
                _ => None,
            })
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());

        GatewayError::Api { status, message }
    }

    /// Upstream status code for `Api` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Parsed JSON body of a successful gateway call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GatewayResponse(pub Value);

impl GatewayResponse {
    /// Contract return value, found at `result.result`.
    pub fn payload(&self) -> Option<&Value> {
        self.0.pointer("/result/result")
    }

    /// Contract return value as an unsigned integer.
    ///
    /// Accepts a JSON number or a decimal string.
    pub fn payload_u64(&self) -> GatewayResult<u64> {
        match self.payload() {
            Some(Value::Number(n)) => n.as_u64().ok_or(GatewayError::MissingPayload),
            Some(Value::String(s)) => s.trim().parse().map_err(|_| GatewayError::MissingPayload),
            _ => Err(GatewayError::MissingPayload),
        }
    }

    /// Contract return value as a list of transfer records.
    ///
    /// A `null` payload is an empty history.
    pub fn transfers(&self) -> GatewayResult<Vec<TransferRecord>> {
        match self.payload() {
            Some(Value::Null) => Ok(Vec::new()),
            Some(v) => serde_json::from_value(v.clone()).map_err(|_| GatewayError::MissingPayload),
            None => Err(GatewayError::MissingPayload),
        }
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

/// A successful transfer as recorded by the contract. Claims use `from = "0x0"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub from: String,
    pub to: String,
    pub value: u64,
}

impl TransferRecord {
    pub fn is_mint(&self) -> bool {
        self.from == "0x0"
    }
}
