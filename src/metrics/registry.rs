// Prometheus metrics registry and collectors
// Author: kelexine (https://github.com/kelexine)

use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec_with_registry, register_histogram_with_registry, CounterVec, Encoder,
    Histogram, HistogramOpts, Opts, Registry, TextEncoder,
};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // PIPELINE METRICS
    // ============================================================================

    /// Completed translation calls
    pub static ref TRANSLATIONS_TOTAL: CounterVec = register_counter_vec_with_registry!(
        Opts::new("translations_total", "Total translation calls"),
        &["outcome"], // outcome: success, invalid_input, transport, parse, internal
        REGISTRY
    ).unwrap();

    /// Which extraction strategy located the JSON payload
    pub static ref EXTRACTION_STRATEGY: CounterVec = register_counter_vec_with_registry!(
        Opts::new("extraction_strategy_total", "JSON candidates located per extraction strategy"),
        &["strategy"], // strategy: fenced, whole, embedded, verbatim
        REGISTRY
    ).unwrap();

    // ============================================================================
    // UPSTREAM METRICS
    // ============================================================================

    /// Individual HTTP attempts, retries included
    pub static ref UPSTREAM_ATTEMPTS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("upstream_attempts_total", "Total chat-completion HTTP attempts"),
        &["result"], // result: response, timeout, error
        REGISTRY
    ).unwrap();

    /// Wall time of a send, retries and pauses included
    pub static ref UPSTREAM_DURATION: Histogram = register_histogram_with_registry!(
        HistogramOpts::new("upstream_duration_seconds", "Chat-completion call duration")
            .buckets(vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0, 120.0]),
        REGISTRY
    ).unwrap();
}

/// Gather all metrics and return as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return String::new();
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_registration() {
        TRANSLATIONS_TOTAL.with_label_values(&["success"]).inc();
        EXTRACTION_STRATEGY.with_label_values(&["fenced"]).inc();
        UPSTREAM_ATTEMPTS.with_label_values(&["response"]).inc();
        UPSTREAM_DURATION.observe(0.2);

        let metrics = gather_metrics();
        assert!(metrics.contains("translations_total"));
        assert!(metrics.contains("extraction_strategy_total"));
        assert!(metrics.contains("upstream_attempts_total"));
        assert!(metrics.contains("upstream_duration_seconds"));
    }
}
