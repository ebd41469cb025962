//! Handler for per-mapping click statistics.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde_json::json;

use crate::api::dto::history::HistoryParams;
use crate::api::dto::clicks::ClickInfo;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a mapping's recent click events, newest first.
///
/// # Endpoint
///
/// `GET /api/stats/{code}?limit=100`
///
/// # Query Parameters
///
/// - `limit` - Maximum number of click events (default: 100, max: 1000)
///
/// # Response
///
/// ```json
/// [
///   { "clicked_at": "2025-01-02T08:00:00Z", "user_agent": "curl/8.0", "referrer": "" },
///   { "clicked_at": "2025-01-01T19:30:00Z", "user_agent": "Mozilla/5.0", "referrer": "https://news.example" }
/// ]
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid `limit`.
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    params: Result<Query<HistoryParams>, QueryRejection>,
) -> Result<Json<Vec<ClickInfo>>, AppError> {
    let Query(params) = params.map_err(|rejection| {
        AppError::bad_request(
            "Invalid query parameters",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let limit = params
        .validated_limit()
        .map_err(|msg| AppError::bad_request(msg, json!({ "limit": params.limit })))?;

    let history = state.click_service.history(&code, limit).await?;

    Ok(Json(
        history.clicks.into_iter().map(ClickInfo::from).collect(),
    ))
}
