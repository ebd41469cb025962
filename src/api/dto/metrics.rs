//! DTOs for the JSON metrics endpoint.

use serde::Serialize;

use crate::infrastructure::metrics::MetricsSummary;

/// In-process metric summary plus persistent totals from the store.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsResponse {
    #[serde(flatten)]
    pub summary: MetricsSummary,
    pub total_urls: i64,
    pub total_clicks: i64,
}
