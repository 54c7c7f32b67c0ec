//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): gateway calls by method, outcome
//! - `gateway_request_duration_seconds` (histogram): gateway call latency
//! - `dashboard_requests_total` (counter): dashboard API calls by route, status

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus exporter on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one gateway call.
pub fn record_gateway_call(method: &'static str, outcome: &'static str, start: Instant) {
    metrics::counter!("gateway_requests_total", "method" => method, "outcome" => outcome)
        .increment(1);
    metrics::histogram!("gateway_request_duration_seconds", "method" => method)
        .record(start.elapsed().as_secs_f64());
}

/// Record one dashboard API response.
pub fn record_dashboard_request(route: String, status: u16) {
    metrics::counter!("dashboard_requests_total", "route" => route, "status" => status.to_string())
        .increment(1);
}
