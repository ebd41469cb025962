//! Click counting, best-effort click logging and click history.

use std::sync::Arc;

use crate::domain::entities::{ClickEvent, NewClickEvent, UrlMapping};
use crate::domain::repositories::{ClickRepository, UrlRepository};
use crate::error::{AppError, ClickLogError, StoreError};
use serde_json::json;

/// A mapping together with its most recent clicks.
#[derive(Debug, Clone)]
pub struct ClickHistory {
    pub mapping: UrlMapping,
    pub clicks: Vec<ClickEvent>,
}

/// Service for the side effects of a successful redirect and for click history.
///
/// Both redirect side effects return their error instead of swallowing it; the
/// redirect handler logs and discards them so a failing click table never turns
/// a hit into an error response.
pub struct ClickService {
    urls: Arc<dyn UrlRepository>,
    clicks: Arc<dyn ClickRepository>,
}

impl ClickService {
    /// Creates a new click service.
    pub fn new(urls: Arc<dyn UrlRepository>, clicks: Arc<dyn ClickRepository>) -> Self {
        Self { urls, clicks }
    }

    /// Atomically adds one to the mapping's click counter.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the code vanished, [`StoreError::Storage`]
    /// on database errors.
    pub async fn increment_clicks(&self, short_code: &str) -> Result<(), StoreError> {
        self.urls.increment_clicks(short_code).await
    }

    /// Appends a click event for a mapping.
    ///
    /// Missing `User-Agent` / `Referer` values are stored as empty strings.
    ///
    /// # Errors
    ///
    /// Returns [`ClickLogError`] if the event could not be stored.
    pub async fn log_click(
        &self,
        mapping_id: i64,
        user_agent: Option<&str>,
        referrer: Option<&str>,
    ) -> Result<(), ClickLogError> {
        let new_click = NewClickEvent::from_headers(mapping_id, user_agent, referrer);

        self.clicks
            .append(new_click)
            .await
            .map(|_| ())
            .map_err(|source| ClickLogError { mapping_id, source })
    }

    /// Returns a mapping and up to `limit` of its clicks, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping has this code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn history(&self, short_code: &str, limit: i64) -> Result<ClickHistory, AppError> {
        let mapping = self
            .urls
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "short_code": short_code }))
            })?;

        let clicks = self.clicks.list_for_mapping(mapping.id, limit).await?;

        Ok(ClickHistory { mapping, clicks })
    }
}
