//! Query parameters for click history.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// Default number of click events returned.
pub const DEFAULT_HISTORY_LIMIT: i64 = 100;

/// Upper bound for the `limit` parameter.
pub const MAX_HISTORY_LIMIT: i64 = 1000;

/// History query parameters.
///
/// Uses `serde_with` to parse the limit from the query string as an integer.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct HistoryParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i64>,
}

impl HistoryParams {
    /// Validates the limit and applies the default.
    ///
    /// # Validation
    ///
    /// - `limit` must be between 1 and 1000
    pub fn validated_limit(&self) -> Result<i64, String> {
        let limit = self.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);

        if !(1..=MAX_HISTORY_LIMIT).contains(&limit) {
            return Err(format!(
                "Limit must be between 1 and {}",
                MAX_HISTORY_LIMIT
            ));
        }

        Ok(limit)
    }
}
