//! Kalp airdrop gateway client library.
//!
//! Talks to a token contract (claim, balance, total supply, transfer,
//! transfer history) through the Kalp gateway's HTTP API.

pub mod config;
pub mod dashboard;
pub mod gateway;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use dashboard::Dashboard;
pub use gateway::{GatewayClient, GatewayError, GatewayResponse};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
