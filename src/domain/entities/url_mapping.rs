//! Url mapping entity: an original URL and the short code that resolves to it.

use chrono::{DateTime, Utc};

/// A stored mapping between a short code and an original URL.
///
/// `short_code` is unique across all mappings. `clicks` only grows, one step per
/// successful redirect.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlMapping {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        created_at: DateTime<Utc>,
        clicks: i64,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
            clicks,
        }
    }
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUrlMapping {
    pub original_url: String,
    pub short_code: String,
}
