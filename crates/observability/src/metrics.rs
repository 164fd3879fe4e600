//! Per-process HTTP meters.
//!
//! Meters live in a dedicated `prometheus::Registry` owned by [`HttpMetrics`]
//! rather than the global default registry, so every app instance (and every
//! test) starts from zero.

use std::time::Duration;

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("prometheus: {0}")]
    Prometheus(#[from] prometheus::Error),

    #[error("metrics text is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Request counters and latency histograms, labelled like
/// `method="GET", uri="/api/tutorials/:id", status="200"`.
#[derive(Debug, Clone)]
pub struct HttpMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration: HistogramVec,
}

impl HttpMetrics {
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new("http_server_requests_total", "Total HTTP requests handled"),
            &["method", "uri", "status"],
        )?;
        let request_duration = HistogramVec::new(
            HistogramOpts::new("http_server_requests_seconds", "HTTP request duration in seconds")
                .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),
            &["method", "uri"],
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            request_duration,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn observe(&self, method: &str, uri: &str, status: u16, elapsed: Duration) {
        let status = status.to_string();
        self.requests_total
            .with_label_values(&[method, uri, status.as_str()])
            .inc();
        self.request_duration
            .with_label_values(&[method, uri])
            .observe(elapsed.as_secs_f64());
    }

    /// Prometheus text exposition of every registered meter.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_line<'a>(text: &'a str, name: &str, labels: &[&str]) -> Option<&'a str> {
        text.lines()
            .filter(|l| l.starts_with(&format!("{name}{{")))
            .find(|l| labels.iter().all(|label| l.contains(label)))
    }

    #[test]
    fn fresh_metrics_have_no_series() {
        let metrics = HttpMetrics::new().unwrap();

        let text = metrics.encode().unwrap();
        assert!(series_line(&text, "http_server_requests_total", &[]).is_none());
    }

    #[test]
    fn observe_records_counter_and_histogram() {
        let metrics = HttpMetrics::new().unwrap();

        metrics.observe("GET", "/api/tutorials", 200, Duration::from_millis(3));
        metrics.observe("GET", "/api/tutorials", 200, Duration::from_millis(4));
        metrics.observe("GET", "/api/tutorials/:id", 404, Duration::from_millis(1));

        let text = metrics.encode().unwrap();
        let ok = series_line(
            &text,
            "http_server_requests_total",
            &[r#"method="GET""#, r#"uri="/api/tutorials""#, r#"status="200""#],
        )
        .unwrap();
        assert!(ok.ends_with(" 2"));

        let count = series_line(&text, "http_server_requests_seconds_count", &[r#"uri="/api/tutorials""#]).unwrap();
        assert!(count.ends_with(" 2"));

        assert!(series_line(&text, "http_server_requests_total", &[r#"status="404""#]).is_some());
    }

    #[test]
    fn instances_do_not_share_state() {
        let a = HttpMetrics::new().unwrap();
        let b = HttpMetrics::new().unwrap();

        a.observe("POST", "/api/orders", 201, Duration::from_millis(1));

        let text_a = a.encode().unwrap();
        let text_b = b.encode().unwrap();
        assert!(series_line(&text_a, "http_server_requests_total", &[r#"method="POST""#]).is_some());
        assert!(series_line(&text_b, "http_server_requests_total", &[r#"method="POST""#]).is_none());
    }
}
