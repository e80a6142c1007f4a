use std::net::SocketAddr;

use crate::engine::RegistryError;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: total HTTP requests handled. Labels: route, status.
pub const REQUESTS_TOTAL: &str = "bookd_requests_total";

/// Counter: bookings successfully created.
pub const BOOKINGS_CREATED_TOTAL: &str = "bookd_bookings_created_total";

/// Counter: creation requests rejected by the pipeline. Labels: reason.
pub const BOOKINGS_REJECTED_TOTAL: &str = "bookd_bookings_rejected_total";

// ── USE metrics (resource utilization) ──────────────────────────

/// Gauge: bookings currently stored (monotonic — the store is append-only).
pub const BOOKINGS_STORED: &str = "bookd_bookings_stored";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
pub fn init(port: Option<u16>) {
    let Some(port) = port else { return };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .expect("failed to install Prometheus metrics exporter");
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
}

/// Map a rejection to a short label for metrics.
pub fn rejection_label(err: &RegistryError) -> &'static str {
    match err {
        RegistryError::MissingFields => "missing_fields",
        RegistryError::InvalidDateFormat => "invalid_date_format",
        RegistryError::StartAfterEnd => "start_after_end",
        RegistryError::PastBooking => "past_booking",
        RegistryError::Conflict(_) => "conflict",
        RegistryError::NotFound(_) => "not_found",
    }
}
