//! DTOs for the mapping listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlMapping;

/// One mapping as listed by `GET /urls`.
#[derive(Debug, Serialize)]
pub struct UrlItem {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl From<UrlMapping> for UrlItem {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            id: mapping.id,
            original_url: mapping.original_url,
            short_code: mapping.short_code,
            created_at: mapping.created_at,
            clicks: mapping.clicks,
        }
    }
}
