//! Prometheus metrics & middleware helper.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use once_cell::sync::Lazy;
use prometheus::{IntCounterVec, Opts};

/// Global Prometheus handle reused in tests. Shares the default registry so
/// the counters below show up on the same `/metrics` endpoint.
pub static METRICS: Lazy<PrometheusMetrics> = Lazy::new(|| {
    PrometheusMetricsBuilder::new("sweep")
        .registry(prometheus::default_registry().clone())
        .endpoint("/metrics") // exposed URL
        .build()
        .expect("metrics builder")
});

/// Successful submission locks, per competition.
pub static SUBMISSIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    let counter = IntCounterVec::new(
        Opts::new("sweep_submissions_total", "Successful submission locks"),
        &["competition"],
    )
    .expect("submissions counter");
    prometheus::default_registry()
        .register(Box::new(counter.clone()))
        .expect("register submissions counter");
    counter
});
