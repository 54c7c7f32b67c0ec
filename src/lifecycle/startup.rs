//! Startup orchestration.
//!
//! Config → logging → metrics → gateway client → dashboard. Any error is
//! fatal; the listener is bound by the caller once this succeeds.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::config::{load_config, AppConfig, ConfigError};
use crate::dashboard::Dashboard;
use crate::gateway::{GatewayClient, GatewayError};
use crate::observability::{logging, metrics};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("gateway client: {0}")]
    Gateway(#[from] GatewayError),
}

/// Everything the server binary needs once startup succeeds.
pub struct Startup {
    pub config: AppConfig,
    pub dashboard: Arc<Dashboard>,
}

/// Load configuration and initialize logging.
pub fn load(path: Option<&Path>) -> Result<AppConfig, StartupError> {
    let config = load_config(path)?;
    logging::init_logging(&config.observability);
    tracing::info!(
        gateway = %config.gateway.base_url,
        contract_id = %config.gateway.contract_id,
        bind_address = %config.listener.bind_address,
        "Configuration loaded"
    );
    Ok(config)
}

/// Initialize metrics and build the dashboard from a loaded config.
pub fn initialize(config: AppConfig) -> Result<Startup, StartupError> {
    if config.observability.metrics_enabled {
        // Validation guarantees this parses.
        if let Ok(addr) = config.observability.metrics_address.parse::<SocketAddr>() {
            metrics::init_metrics(addr);
        }
    }

    let client = GatewayClient::new(config.gateway.clone())?;
    let dashboard = Arc::new(Dashboard::new(client));

    Ok(Startup { config, dashboard })
}
