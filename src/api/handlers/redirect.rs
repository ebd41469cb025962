//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::time::Instant;
use tracing::{debug, warn};
use url::Url;

use crate::domain::entities::UrlMapping;
use crate::error::AppError;
use crate::infrastructure::metrics::elapsed_ms;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`, `GET /go/{code}`
///
/// # Request Flow
///
/// 1. Resolve the code (malformed codes never reach the database)
/// 2. Increment the mapping's click counter
/// 3. Append a click event with `User-Agent` and `Referer`
/// 4. Return 302 Found
///
/// Steps 2 and 3 are best-effort: their failures are logged at `warn` and the
/// redirect still succeeds. Latency is recorded for every outcome.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error if the lookup itself fails.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let started = Instant::now();
    let result = redirect(&state, &code, &headers).await;
    state.metrics.record_latency(elapsed_ms(started));
    result
}

async fn redirect(state: &AppState, code: &str, headers: &HeaderMap) -> Result<Response, AppError> {
    let Some(mapping) = state.link_service.resolve(code).await? else {
        state.metrics.increment_failed_lookups();
        debug!(short_code = %code, "Short code not found");
        return Err(AppError::not_found(
            "Short URL not found",
            json!({ "short_code": code }),
        ));
    };

    let location = location_header(&mapping.original_url)?;

    record_click(state, &mapping, headers).await;
    state.metrics.increment_successful_redirects();

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

async fn record_click(state: &AppState, mapping: &UrlMapping, headers: &HeaderMap) {
    if let Err(e) = state.click_service.increment_clicks(&mapping.short_code).await {
        warn!(short_code = %mapping.short_code, error = %e, "Failed to increment click counter");
    }

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok());
    let referrer = headers.get(header::REFERER).and_then(|v| v.to_str().ok());

    if let Err(e) = state
        .click_service
        .log_click(mapping.id, user_agent, referrer)
        .await
    {
        warn!(error = %e, "Click logging failed");
    }
}

/// Builds a `Location` value, percent-encoding non-ASCII URLs.
fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(original_url) {
        return Ok(value);
    }

    Url::parse(original_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            AppError::internal(
                "Stored URL cannot be used as a redirect target",
                json!({ "original_url": original_url }),
            )
        })
}
