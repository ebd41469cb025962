//! Handlers for metrics exposition.

use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::metrics::MetricsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Prometheus text exposition of all counters and the latency histogram.
///
/// # Endpoint
///
/// `GET /metrics`, `GET /metric`
pub async fn metrics_text_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let body = state.metrics.export_text().map_err(|e| {
        AppError::internal("Failed to export metrics", json!({ "reason": e.to_string() }))
    })?;

    Ok((
        [(header::CONTENT_TYPE, state.metrics.text_content_type())],
        body,
    )
        .into_response())
}

/// JSON summary of the in-process metrics plus store totals.
///
/// # Endpoint
///
/// `GET /api/metrics`
///
/// # Response
///
/// ```json
/// {
///   "urlsShortened": 12,
///   "successfulRedirects": 40,
///   "failedLookups": 3,
///   "averageLatency": 4.2,
///   "p95Latency": 9.5,
///   "totalUrls": 120,
///   "totalClicks": 981
/// }
/// ```
pub async fn metrics_json_handler(
    State(state): State<AppState>,
) -> Result<Json<MetricsResponse>, AppError> {
    let total_urls = state.link_service.count().await?;
    let total_clicks = state.link_service.total_clicks().await?;

    Ok(Json(MetricsResponse {
        summary: state.metrics.export_summary(),
        total_urls,
        total_clicks,
    }))
}
