//! Configuration validation.
//!
//! Serde handles syntax; this module checks values. Every problem is
//! reported, not just the first.

use std::fmt;
use std::net::SocketAddr;

use reqwest::header::HeaderName;

use crate::config::schema::AppConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a deserialized configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let gateway = &config.gateway;

    match url::Url::parse(&gateway.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::new(
            "gateway.base_url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new(
            "gateway.base_url",
            format!("invalid URL '{}': {}", gateway.base_url, e),
        )),
    }

    if gateway.contract_id.trim().is_empty() {
        errors.push(ValidationError::new("gateway.contract_id", "must not be empty"));
    }
    if gateway.wallet_address.trim().is_empty() {
        errors.push(ValidationError::new("gateway.wallet_address", "must not be empty"));
    }
    if gateway.api_key.is_empty() {
        errors.push(ValidationError::new(
            "gateway.api_key",
            "must be set (or provide KALP_API_KEY)",
        ));
    }
    if HeaderName::from_bytes(gateway.api_key_header.as_bytes()).is_err() {
        errors.push(ValidationError::new(
            "gateway.api_key_header",
            format!("'{}' is not a valid header name", gateway.api_key_header),
        ));
    }
    if gateway.claim_amount == 0 {
        errors.push(ValidationError::new("gateway.claim_amount", "must be positive"));
    }
    if gateway.request_timeout_secs == Some(0) {
        errors.push(ValidationError::new("gateway.request_timeout_secs", "must be positive"));
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }
    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::new("listener.request_timeout_secs", "must be positive"));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", config.observability.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.gateway.api_key = "key".to_string();
        config
    }

    #[test]
    fn test_default_with_key_is_valid() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_missing_api_key() {
        let errors = validate_config(&AppConfig::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "gateway.api_key");
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = valid_config();
        config.gateway.base_url = "not a url".to_string();
        config.gateway.api_key_header = "bad header".to_string();
        config.gateway.claim_amount = 0;
        config.listener.bind_address = "nowhere".to_string();

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "gateway.base_url",
                "gateway.api_key_header",
                "gateway.claim_amount",
                "listener.bind_address",
            ]
        );
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = valid_config();
        config.gateway.base_url = "ftp://gateway.example".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].message.contains("ftp"));
    }

    #[test]
    fn test_zero_gateway_timeout() {
        let mut config = valid_config();
        config.gateway.request_timeout_secs = Some(0);
        assert!(validate_config(&config).is_err());
    }
}
