//! Repository trait for the click log.

use crate::domain::entities::{ClickEvent, NewClickEvent};
use crate::error::StoreError;
use async_trait::async_trait;

/// Repository interface for click events.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends a click event.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on database errors, including a
    /// reference to a mapping that no longer exists.
    async fn append(&self, new_click: NewClickEvent) -> Result<ClickEvent, StoreError>;

    /// Lists the most recent clicks of a mapping, newest first.
    async fn list_for_mapping(
        &self,
        mapping_id: i64,
        limit: i64,
    ) -> Result<Vec<ClickEvent>, StoreError>;
}
