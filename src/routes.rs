//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`, `/go/{code}` - Short link redirect
//! - `POST /shorten`              - Create a short link
//! - `GET  /urls`                 - List all mappings
//! - `GET  /metrics`, `/metric`   - Prometheus text exposition
//! - `GET  /health`               - Liveness
//! - `GET  /health/ready`         - Readiness (database check)
//! - `/api/*`                     - JSON API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, for the cross-origin dashboard
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{
    health_handler, list_urls_handler, metrics_text_handler, readiness_handler,
    redirect_handler, shorten_handler,
};
use crate::api::middleware::{cors, trace};
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/go/{code}", get(redirect_handler))
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(list_urls_handler))
        .route("/metrics", get(metrics_text_handler))
        .route("/metric", get(metrics_text_handler))
        .route("/health", get(health_handler))
        .route("/health/ready", get(readiness_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(trace::request_spans())
}

/// [`app_router`] wrapped with trailing-slash normalization.
///
/// Normalization must wrap the router (not be a router layer) so it runs before
/// route matching.
pub fn app_service(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app_router(state))
}
