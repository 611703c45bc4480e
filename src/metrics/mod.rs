// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

pub use registry::{
    gather_metrics,
    EXTRACTION_STRATEGY,
    TRANSLATIONS_TOTAL,
    UPSTREAM_ATTEMPTS,
    UPSTREAM_DURATION,
};

/// Helper to record the outcome of a translation call
pub fn record_translation(outcome: &str) {
    TRANSLATIONS_TOTAL.with_label_values(&[outcome]).inc();
}

/// Helper to record a single HTTP attempt against the endpoint
pub fn record_upstream_attempt(result: &str) {
    UPSTREAM_ATTEMPTS.with_label_values(&[result]).inc();
}

pub fn record_upstream_duration(duration_secs: f64) {
    UPSTREAM_DURATION.observe(duration_secs);
}

pub fn record_extraction(strategy: &str) {
    EXTRACTION_STRATEGY.with_label_values(&[strategy]).inc();
}
