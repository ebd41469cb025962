//! JSON API route configuration, mounted under `/api`.

use crate::api::handlers::{
    list_urls_handler, metrics_json_handler, shorten_handler, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All `/api` routes.
///
/// # Endpoints
///
/// - `POST /shorten`       - Create a short link
/// - `GET  /urls`          - List all mappings, newest first
/// - `GET  /stats/{code}`  - Click history for one mapping, newest first
/// - `GET  /metrics`       - JSON metrics summary
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(list_urls_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/metrics", get(metrics_json_handler))
}
