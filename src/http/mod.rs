//! Dashboard JSON API subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP request
//!     → server.rs (Axum router, request ID, trace, timeout, metrics)
//!     → handlers.rs (input checks, dashboard call)
//!     → response.rs (gateway errors → status + JSON body)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{AppState, HttpServer};
