//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! gateway client, dashboard, HTTP API produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Prometheus scrape (optional)
//! ```

pub mod logging;
pub mod metrics;
