//! Dashboard subsystem.
//!
//! # Data Flow
//! ```text
//! front-end request (HTTP API / CLI)
//!     → session.rs (Dashboard handler: claim, balance, supply, transfer)
//!     → state.rs (CallState: loading on, error cleared)
//!     → gateway client call
//!     → state.rs (loading off, error recorded on failure)
//!     → session.rs (displayed values updated on success only)
//! ```
//!
//! Each operation owns its own `CallState`, so overlapping calls of
//! different operations never clobber one another's indicator.

pub mod session;
pub mod state;

pub use session::{Dashboard, DashboardSnapshot};
pub use state::{CallState, InFlight, OperationStatus};
