//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::gateway::envelope::{Blockchain, Network};

/// Default gateway contract API root.
pub const DEFAULT_BASE_URL: &str = "https://gateway-api.kalp.studio/v1/contract/kalp";

/// Contract instance the airdrop dashboard was deployed against.
pub const DEFAULT_CONTRACT_ID: &str = "ckOkmFvxU22OgVIWkuWBre9C3VOTK03e1726825854629";

/// Wallet address sent in every envelope.
pub const DEFAULT_WALLET_ADDRESS: &str = "b14602f1289c43807a72115f1c902df695a1218d";

/// Environment variable that overrides `gateway.api_key`.
pub const API_KEY_ENV: &str = "KALP_API_KEY";

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Gateway connection settings.
    pub gateway: GatewayConfig,

    /// Listener configuration for the dashboard API.
    pub listener: ListenerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Gateway connection settings.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Contract API root, e.g. "https://gateway-api.kalp.studio/v1/contract/kalp".
    pub base_url: String,

    /// Deployed contract instance identifier.
    pub contract_id: String,

    /// Network sent in the envelope.
    pub network: Network,

    /// Blockchain sent in the envelope.
    pub blockchain: Blockchain,

    /// Wallet address sent in the envelope.
    pub wallet_address: String,

    /// Gateway API key. Usually supplied through `KALP_API_KEY`.
    #[serde(skip_serializing)]
    pub api_key: String,

    /// Header carrying the API key.
    pub api_key_header: String,

    /// Tokens minted per claim.
    pub claim_amount: u64,

    /// Per-request timeout in seconds. Unset means wait indefinitely.
    pub request_timeout_secs: Option<u64>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            contract_id: DEFAULT_CONTRACT_ID.to_string(),
            network: Network::Testnet,
            blockchain: Blockchain::Kalp,
            wallet_address: DEFAULT_WALLET_ADDRESS.to_string(),
            api_key: String::new(),
            api_key_header: "x-api-key".to_string(),
            claim_amount: 100,
            request_timeout_secs: None,
        }
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("base_url", &self.base_url)
            .field("contract_id", &self.contract_id)
            .field("network", &self.network)
            .field("blockchain", &self.blockchain)
            .field("wallet_address", &self.wallet_address)
            .field("api_key", &"<redacted>")
            .field("api_key_header", &self.api_key_header)
            .field("claim_amount", &self.claim_amount)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:3000").
    pub bind_address: String,

    /// Timeout for a whole dashboard API request in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            request_timeout_secs: 60,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Human-readable or JSON log lines.
    pub log_format: LogFormat,

    /// Enable the Prometheus exporter.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_deployed_dashboard() {
        let config = AppConfig::default();
        assert_eq!(config.gateway.network, Network::Testnet);
        assert_eq!(config.gateway.blockchain, Blockchain::Kalp);
        assert_eq!(config.gateway.claim_amount, 100);
        assert_eq!(config.gateway.api_key_header, "x-api-key");
        assert!(config.gateway.request_timeout_secs.is_none());
    }

    #[test]
    fn test_minimal_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [gateway]
            api_key = "secret"
            contract_id = "abc"
            "#,
        )
        .unwrap();
        assert_eq!(config.gateway.api_key, "secret");
        assert_eq!(config.gateway.contract_id, "abc");
        assert_eq!(config.gateway.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.listener.bind_address, "127.0.0.1:3000");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let mut config = GatewayConfig::default();
        config.api_key = "super-secret".to_string();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
