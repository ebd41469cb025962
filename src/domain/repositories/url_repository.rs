//! Repository trait for the mapping store.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::StoreError;
use async_trait::async_trait;

/// Repository interface for url mappings.
///
/// Concurrency safety is delegated to the storage engine: uniqueness of
/// `short_code` is enforced by a unique constraint and click increments are
/// single-statement atomic updates.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateCode`] if the short code already exists.
    /// Returns [`StoreError::Storage`] on any other database error.
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, StoreError>;

    /// Point lookup by short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>, StoreError>;

    /// Atomically increments the click counter of a mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no mapping has this code.
    async fn increment_clicks(&self, short_code: &str) -> Result<(), StoreError>;

    /// Returns every mapping, newest first.
    async fn list_all(&self) -> Result<Vec<UrlMapping>, StoreError>;

    /// Number of stored mappings.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Sum of the click counters of all mappings.
    async fn total_clicks(&self) -> Result<i64, StoreError>;
}
