//! Handler for listing all mappings.

use axum::{Json, extract::State};

use crate::api::dto::urls::UrlItem;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every mapping, newest first.
///
/// # Endpoint
///
/// `GET /urls`, `GET /api/urls`
///
/// # Response
///
/// ```json
/// [
///   {
///     "id": 2,
///     "original_url": "https://example.com",
///     "short_code": "aB3dE5fG",
///     "created_at": "2025-01-01T12:00:00Z",
///     "clicks": 5
///   }
/// ]
/// ```
pub async fn list_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlItem>>, AppError> {
    let mappings = state.link_service.list_all().await?;

    Ok(Json(mappings.into_iter().map(UrlItem::from).collect()))
}
