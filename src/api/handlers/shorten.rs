//! Handler for the link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, Uri},
};
use serde_json::json;
use std::time::Instant;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::infrastructure::metrics::elapsed_ms;
use crate::state::AppState;
use crate::utils::base_url::{resolve_base_url, short_url};

/// Creates a short link for one URL.
///
/// # Endpoint
///
/// `POST /shorten`, `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "originalUrl": "https://example.com/some/long/path",
///   "shortCode": "aB3dE5fG",
///   "shortUrl": "http://sho.rt/aB3dE5fG",
///   "createdAt": "2025-01-01T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body or a URL that is not absolute
/// `http`/`https`. Nothing is stored in that case.
/// Returns 500 Internal Server Error on storage failure.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let started = Instant::now();
    let result = shorten(&state, &headers, &uri, payload).await;
    state.metrics.record_latency(elapsed_ms(started));
    result
}

async fn shorten(
    state: &AppState,
    headers: &HeaderMap,
    uri: &Uri,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let url = payload
        .url
        .ok_or_else(|| AppError::bad_request("Invalid URL provided", json!({})))?;

    let base = resolve_base_url(state.base_url.as_deref(), headers, uri)?;

    let mapping = state.link_service.shorten(&url).await?;
    state.metrics.increment_urls_shortened();

    tracing::info!(short_code = %mapping.short_code, "Short link created");

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: short_url(&base, &mapping.short_code),
            original_url: mapping.original_url,
            short_code: mapping.short_code,
            created_at: mapping.created_at,
        }),
    ))
}
