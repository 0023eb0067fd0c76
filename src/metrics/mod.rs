// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

pub use registry::{
    gather_metrics,
    REQUESTS_TOTAL,
    REQUEST_DURATION,
    GEMINI_API_CALLS,
    GEMINI_API_DURATION,
};

/// Helper to record request metrics
pub fn record_request(method: &str, path: &str, status_code: u16, duration_secs: f64) {
    let status = status_code.to_string();
    REQUESTS_TOTAL
        .with_label_values(&[method, path, &status])
        .inc();

    REQUEST_DURATION
        .with_label_values(&[method, path, &status])
        .observe(duration_secs);
}

/// Helper to record Gemini API call metrics
pub fn record_gemini_call(model: &str, outcome: &str, duration_secs: f64) {
    GEMINI_API_CALLS
        .with_label_values(&[model, outcome])
        .inc();

    GEMINI_API_DURATION
        .with_label_values(&[model])
        .observe(duration_secs);
}
