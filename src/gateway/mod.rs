//! Contract gateway integration subsystem.
//!
//! # Data Flow
//! ```text
//! GatewayConfig (base URL, contract id, wallet, API key)
//!     → envelope.rs (network/blockchain/wallet + per-method args)
//!     → endpoint.rs ({base}/{invoke|query}/{contract}/{Method})
//!     → client.rs (POST, status check, JSON parse)
//!     → types.rs (GatewayResponse or GatewayError)
//! ```
//!
//! # Security Constraints
//! - API key is injected at construction, never read from ambient state here
//! - API key is never logged

pub mod client;
pub mod endpoint;
pub mod envelope;
pub mod types;

pub use client::GatewayClient;
pub use endpoint::{CallKind, ContractMethod};
pub use envelope::{Blockchain, Network};
pub use types::{GatewayError, GatewayResponse, GatewayResult, TransferRecord};
