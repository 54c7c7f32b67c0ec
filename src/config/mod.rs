//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) + KALP_API_KEY
//!     → loader.rs (parse, deserialize, env override)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → GatewayConfig injected into the gateway client
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no runtime reconfiguration
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AppConfig, GatewayConfig, ListenerConfig, LogFormat, ObservabilityConfig};
