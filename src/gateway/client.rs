//! Gateway HTTP client.
//!
//! # Responsibilities
//! - Build the request envelope for each contract method
//! - POST it with the API key header
//! - Normalize non-2xx responses and transport failures into `GatewayError`
//!
//! No retries and no backoff. A timeout applies only when configured.

use std::time::{Duration, Instant};

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Client;
use serde::Serialize;

use crate::config::GatewayConfig;
use crate::gateway::endpoint::ContractMethod;
use crate::gateway::envelope::{
    BalanceOfArgs, ClaimArgs, NoArgs, RequestEnvelope, TransferFromArgs,
};
use crate::gateway::types::{GatewayError, GatewayResponse, GatewayResult};
use crate::observability::metrics;

/// Client for the contract gateway. Cheap to clone; clones share a connection pool.
#[derive(Clone)]
pub struct GatewayClient {
    http: Client,
    config: GatewayConfig,
    api_key_header: HeaderName,
    api_key: HeaderValue,
}

impl GatewayClient {
    /// Create a client from an explicit configuration.
    pub fn new(config: GatewayConfig) -> GatewayResult<Self> {
        let api_key_header = HeaderName::from_bytes(config.api_key_header.as_bytes())
            .map_err(|e| GatewayError::InvalidApiKey(format!("header name: {}", e)))?;
        let mut api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| GatewayError::InvalidApiKey(e.to_string()))?;
        api_key.set_sensitive(true);

        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| GatewayError::Client(e.to_string()))?;

        tracing::info!(
            base_url = %config.base_url,
            contract_id = %config.contract_id,
            network = ?config.network,
            "Gateway client initialized"
        );

        Ok(Self {
            http,
            config,
            api_key_header,
            api_key,
        })
    }

    /// Mint the configured claim amount to `address`.
    pub async fn claim(&self, address: &str) -> GatewayResult<GatewayResponse> {
        let args = ClaimArgs {
            amount: self.config.claim_amount,
            address,
        };
        self.call(ContractMethod::Claim, args).await
    }

    /// Query the balance of `account`. The amount is at `result.result`.
    pub async fn balance_of(&self, account: &str) -> GatewayResult<GatewayResponse> {
        self.call(ContractMethod::BalanceOf, BalanceOfArgs { account }).await
    }

    /// Query the total supply. The amount is at `result.result`.
    pub async fn total_supply(&self) -> GatewayResult<GatewayResponse> {
        self.call(ContractMethod::TotalSupply, NoArgs {}).await
    }

    /// Move `value` tokens from `from` to `to`.
    pub async fn transfer_from(
        &self,
        from: &str,
        to: &str,
        value: u64,
    ) -> GatewayResult<GatewayResponse> {
        self.call(ContractMethod::TransferFrom, TransferFromArgs { from, to, value })
            .await
    }

    /// Query the contract's recorded transfers.
    pub async fn get_transactions(&self) -> GatewayResult<GatewayResponse> {
        self.call(ContractMethod::GetTransactions, NoArgs {}).await
    }

    /// Send one envelope to `method` and parse the reply.
    pub async fn call<A: Serialize>(
        &self,
        method: ContractMethod,
        args: A,
    ) -> GatewayResult<GatewayResponse> {
        let start = Instant::now();
        let result = self.send(method, args).await;

        let outcome = match &result {
            Ok(_) => "success",
            Err(GatewayError::Api { .. }) => "api_error",
            Err(GatewayError::Network(_)) => "network_error",
            Err(_) => "invalid_response",
        };
        metrics::record_gateway_call(method.name(), outcome, start);

        match &result {
            Ok(_) => tracing::debug!(
                method = %method,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Gateway call succeeded"
            ),
            Err(e) => tracing::warn!(
                method = %method,
                status = ?e.status(),
                error = %e,
                "Gateway call failed"
            ),
        }

        result
    }

    async fn send<A: Serialize>(
        &self,
        method: ContractMethod,
        args: A,
    ) -> GatewayResult<GatewayResponse> {
        let envelope = RequestEnvelope {
            network: self.config.network,
            blockchain: self.config.blockchain,
            wallet_address: &self.config.wallet_address,
            args,
        };
        let url = method.url(&self.config.base_url, &self.config.contract_id);

        let response = self
            .http
            .post(&url)
            .header(self.api_key_header.clone(), self.api_key.clone())
            .json(&envelope)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(GatewayError::from_failed_response(status.as_u16(), &body));
        }

        serde_json::from_slice(&body)
            .map(GatewayResponse)
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))
    }

    /// Get the configuration.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("base_url", &self.config.base_url)
            .field("contract_id", &self.config.contract_id)
            .field("api_key_header", &self.api_key_header)
            .finish()
    }
}
