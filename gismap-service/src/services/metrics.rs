//! Metrics collection for gismap-service.
//!
//! Counters go through the `metrics` facade; without an installed recorder
//! (tests) they are no-ops.

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use service_core::error::AppError;
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Call once per process.
pub fn init_metrics() -> Result<(), AppError> {
    let handle = PrometheusBuilder::new().install_recorder().map_err(|e| {
        AppError::InternalError(anyhow::anyhow!("failed to install Prometheus recorder: {}", e))
    })?;

    METRICS_HANDLE
        .set(handle)
        .map_err(|_| AppError::InternalError(anyhow::anyhow!("metrics already initialized")))
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

pub fn record_user_created() {
    counter!("gismap_users_created_total").increment(1);
}

pub fn record_notifications_sent(count: usize) {
    counter!("gismap_notifications_sent_total").increment(count as u64);
}

pub fn record_dropped_receivers(count: usize) {
    counter!("gismap_notifications_dropped_receivers_total").increment(count as u64);
}

pub fn record_notification_read() {
    counter!("gismap_notifications_read_total").increment(1);
}

pub fn record_open_page(outcome: &'static str) {
    counter!("gismap_open_pages_total", "outcome" => outcome).increment(1);
}
