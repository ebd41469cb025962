//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click recorded when a short code is successfully redirected.
///
/// Append-only: click events are never updated. Missing request headers are
/// stored as empty strings.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickEvent {
    pub id: i64,
    pub mapping_id: i64,
    pub user_agent: String,
    pub referrer: String,
    pub clicked_at: DateTime<Utc>,
}

impl ClickEvent {
    /// Creates a new ClickEvent instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let click = ClickEvent::new(
    ///     1,
    ///     42,
    ///     "Mozilla/5.0".to_string(),
    ///     "https://google.com".to_string(),
    ///     Utc::now(),
    /// );
    /// ```
    pub fn new(
        id: i64,
        mapping_id: i64,
        user_agent: String,
        referrer: String,
        clicked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            mapping_id,
            user_agent,
            referrer,
            clicked_at,
        }
    }
}

/// Input data for appending a click event.
///
/// The timestamp is set by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClickEvent {
    pub mapping_id: i64,
    pub user_agent: String,
    pub referrer: String,
}

impl NewClickEvent {
    /// Builds a click from optional header values, defaulting missing ones to `""`.
    pub fn from_headers(mapping_id: i64, user_agent: Option<&str>, referrer: Option<&str>) -> Self {
        Self {
            mapping_id,
            user_agent: user_agent.unwrap_or_default().to_string(),
            referrer: referrer.unwrap_or_default().to_string(),
        }
    }
}
