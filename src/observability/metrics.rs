//! Metrics collection and exposition.
//!
//! # Metrics
//! - `wiki_requests_total` (counter): requests by action and status
//! - `wiki_request_duration_seconds` (histogram): handler latency by action
//! - `wiki_page_saves_total` (counter): successful saves
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - Exporter is opt-in and listens on its own address

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled request.
pub fn record_request(action: &'static str, status: u16, start: Instant) {
    ::metrics::counter!(
        "wiki_requests_total",
        "action" => action,
        "status" => status.to_string()
    )
    .increment(1);
    ::metrics::histogram!("wiki_request_duration_seconds", "action" => action)
        .record(start.elapsed().as_secs_f64());
}

/// Record a successful page save.
pub fn record_save() {
    ::metrics::counter!("wiki_page_saves_total").increment(1);
}
