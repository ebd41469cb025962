//! Process-wide request metrics.
//!
//! A single [`MetricsAggregator`] is built at startup and shared through
//! [`crate::state::AppState`]. It owns a private Prometheus registry holding three
//! counters and one latency histogram. Values live for the process lifetime and are
//! lost on restart.

use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, Registry, TextEncoder};
use serde::Serialize;
use std::time::Instant;

pub const URLS_SHORTENED_TOTAL: &str = "urls_shortened_total";
pub const SUCCESSFUL_REDIRECTS_TOTAL: &str = "successful_redirects_total";
pub const FAILED_LOOKUPS_TOTAL: &str = "failed_lookups_total";
pub const REQUEST_LATENCY_MS: &str = "request_latency_ms";

/// Upper bounds of the latency histogram buckets, in milliseconds.
pub const LATENCY_BUCKETS_MS: [f64; 7] = [10.0, 50.0, 100.0, 200.0, 500.0, 1000.0, 2000.0];

/// Errors raised while building or exporting metrics.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),

    #[error("metrics output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Mean latency and number of observations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramStats {
    pub average: f64,
    pub count: u64,
}

/// JSON summary served by `GET /api/metrics`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub urls_shortened: u64,
    pub successful_redirects: u64,
    pub failed_lookups: u64,
    pub average_latency: f64,
    pub p95_latency: f64,
}

/// Counters and latency histogram for the shortener.
///
/// All operations are lock-free atomic updates inside the Prometheus metric types,
/// so concurrent handlers never lose increments.
pub struct MetricsAggregator {
    registry: Registry,
    urls_shortened: IntCounter,
    successful_redirects: IntCounter,
    failed_lookups: IntCounter,
    latency: Histogram,
}

impl MetricsAggregator {
    /// Creates the aggregator and registers its metrics.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::Prometheus`] if a metric definition is rejected.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let urls_shortened =
            IntCounter::new(URLS_SHORTENED_TOTAL, "Total number of URLs shortened")?;
        let successful_redirects = IntCounter::new(
            SUCCESSFUL_REDIRECTS_TOTAL,
            "Total number of successful redirects",
        )?;
        let failed_lookups =
            IntCounter::new(FAILED_LOOKUPS_TOTAL, "Total number of failed lookups (404s)")?;
        let latency = Histogram::with_opts(
            HistogramOpts::new(REQUEST_LATENCY_MS, "Request latency in milliseconds")
                .buckets(LATENCY_BUCKETS_MS.to_vec()),
        )?;

        registry.register(Box::new(urls_shortened.clone()))?;
        registry.register(Box::new(successful_redirects.clone()))?;
        registry.register(Box::new(failed_lookups.clone()))?;
        registry.register(Box::new(latency.clone()))?;

        Ok(Self {
            registry,
            urls_shortened,
            successful_redirects,
            failed_lookups,
            latency,
        })
    }

    pub fn increment_urls_shortened(&self) {
        self.urls_shortened.inc();
    }

    pub fn increment_successful_redirects(&self) {
        self.successful_redirects.inc();
    }

    pub fn increment_failed_lookups(&self) {
        self.failed_lookups.inc();
    }

    /// Records one latency observation. Negative or non-finite values are ignored.
    pub fn record_latency(&self, duration_ms: f64) {
        if !duration_ms.is_finite() || duration_ms < 0.0 {
            return;
        }
        self.latency.observe(duration_ms);
    }

    /// Returns the current value of a counter by its exposition name.
    ///
    /// Unknown names and non-counter metrics read as `0`.
    pub fn counter_value(&self, name: &str) -> f64 {
        self.registry
            .gather()
            .iter()
            .find(|family| family.get_name() == name)
            .and_then(|family| family.get_metric().first())
            .map(|metric| metric.get_counter().get_value())
            .unwrap_or(0.0)
    }

    pub fn histogram_stats(&self) -> HistogramStats {
        let count = self.latency.get_sample_count();
        let sum = self.latency.get_sample_sum();

        HistogramStats {
            average: if count > 0 { sum / count as f64 } else { 0.0 },
            count,
        }
    }

    /// Estimates a latency quantile (`0.0..=1.0`) from the histogram buckets.
    pub fn latency_quantile(&self, q: f64) -> f64 {
        let buckets: Vec<(f64, u64)> = self
            .registry
            .gather()
            .iter()
            .find(|family| family.get_name() == REQUEST_LATENCY_MS)
            .and_then(|family| family.get_metric().first())
            .map(|metric| {
                metric
                    .get_histogram()
                    .get_bucket()
                    .iter()
                    .map(|b| (b.get_upper_bound(), b.get_cumulative_count()))
                    .collect()
            })
            .unwrap_or_default();

        estimate_quantile(q, &buckets, self.latency.get_sample_count())
    }

    /// Renders all metrics in the Prometheus text exposition format.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError`] if encoding fails.
    pub fn export_text(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Content type of [`Self::export_text`] output.
    pub fn text_content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }

    pub fn export_summary(&self) -> MetricsSummary {
        let stats = self.histogram_stats();

        MetricsSummary {
            urls_shortened: self.urls_shortened.get(),
            successful_redirects: self.successful_redirects.get(),
            failed_lookups: self.failed_lookups.get(),
            average_latency: stats.average,
            p95_latency: self.latency_quantile(0.95),
        }
    }
}

/// Milliseconds elapsed since `started`.
pub fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}

/// Histogram quantile estimation over cumulative buckets.
///
/// `buckets` holds `(upper_bound, cumulative_count)` pairs in ascending order and
/// `total` the number of observations (including those above the last bound).
/// The quantile is linearly interpolated inside the bucket that contains the
/// target rank, with `0` as the lower edge of the first bucket. A rank that falls
/// past the last finite bucket reports that bucket's bound.
fn estimate_quantile(q: f64, buckets: &[(f64, u64)], total: u64) -> f64 {
    if total == 0 || buckets.is_empty() {
        return 0.0;
    }

    let q = q.clamp(0.0, 1.0);
    let rank = q * total as f64;

    let mut lower_bound = 0.0;
    let mut count_below = 0u64;

    for &(upper_bound, cumulative) in buckets {
        if !upper_bound.is_finite() {
            break;
        }

        if cumulative as f64 >= rank && cumulative > count_below {
            let in_bucket = (cumulative - count_below) as f64;
            let position = (rank - count_below as f64) / in_bucket;
            return lower_bound + (upper_bound - lower_bound) * position;
        }

        lower_bound = upper_bound;
        count_below = cumulative;
    }

    lower_bound
}
