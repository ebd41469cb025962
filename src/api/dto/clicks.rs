//! DTOs for click event data.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ClickEvent;

/// One row of a mapping's click history.
///
/// Header fields are always present; a request without the header stores `""`.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub clicked_at: DateTime<Utc>,
    pub user_agent: String,
    pub referrer: String,
}

impl From<ClickEvent> for ClickInfo {
    fn from(click: ClickEvent) -> Self {
        Self {
            clicked_at: click.clicked_at,
            user_agent: click.user_agent,
            referrer: click.referrer,
        }
    }
}
