//! Short link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::{AppError, StoreError};
use crate::utils::code_generator::{CodeGenerator, is_valid_short_code};
use crate::utils::url_validator::validate_url;
use serde_json::json;
use tracing::{debug, warn};

/// Default bound on code regeneration after a collision.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Service for creating and resolving short links.
///
/// Validation happens before any store mutation. Uniqueness of generated codes is
/// enforced by the store; a collision triggers regeneration up to `max_attempts`.
pub struct LinkService {
    urls: Arc<dyn UrlRepository>,
    generator: CodeGenerator,
    max_attempts: u32,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(urls: Arc<dyn UrlRepository>, generator: CodeGenerator, max_attempts: u32) -> Self {
        Self {
            urls,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Shortens `original_url`, storing it unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is not an absolute `http`/`https` URL.
    /// Returns [`AppError::Internal`] on storage errors or when every generated code
    /// collided with an existing one.
    pub async fn shorten(&self, original_url: &str) -> Result<UrlMapping, AppError> {
        validate_url(original_url).map_err(|e| {
            AppError::bad_request("Invalid URL provided", json!({ "reason": e.to_string() }))
        })?;

        for attempt in 1..=self.max_attempts {
            let new_mapping = NewUrlMapping {
                original_url: original_url.to_string(),
                short_code: self.generator.generate(),
            };

            match self.urls.create(new_mapping).await {
                Ok(mapping) => {
                    debug!(short_code = %mapping.short_code, attempt, "Created short link");
                    return Ok(mapping);
                }
                Err(StoreError::DuplicateCode(code)) => {
                    warn!(short_code = %code, attempt, "Short code collision, regenerating");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "attempts": self.max_attempts }),
        ))
    }

    /// Resolves a short code to its mapping.
    ///
    /// Codes that cannot have been generated (wrong length or alphabet) resolve to
    /// `None` without touching the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        if !is_valid_short_code(short_code) {
            return Ok(None);
        }

        Ok(self.urls.find_by_code(short_code).await?)
    }

    /// Returns every mapping, newest first.
    pub async fn list_all(&self) -> Result<Vec<UrlMapping>, AppError> {
        Ok(self.urls.list_all().await?)
    }

    /// Number of stored mappings.
    pub async fn count(&self) -> Result<i64, AppError> {
        Ok(self.urls.count().await?)
    }

    /// Sum of all click counters.
    pub async fn total_clicks(&self) -> Result<i64, AppError> {
        Ok(self.urls.total_clicks().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use chrono::Utc;
    use mockall::Sequence;

    fn mapping_from(new_mapping: &NewUrlMapping) -> UrlMapping {
        UrlMapping::new(
            10,
            new_mapping.original_url.clone(),
            new_mapping.short_code.clone(),
            Utc::now(),
            0,
        )
    }

    fn service(mock: MockUrlRepository) -> LinkService {
        LinkService::new(Arc::new(mock), CodeGenerator::default(), DEFAULT_MAX_ATTEMPTS)
    }

    #[tokio::test]
    async fn test_shorten_success() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_create()
            .withf(|m| m.original_url == "https://example.com" && m.short_code.len() == 8)
            .times(1)
            .returning(|m| Ok(mapping_from(&m)));

        let result = service(mock_repo).shorten("https://example.com").await;

        assert!(result.is_ok());
        let mapping = result.unwrap();
        assert_eq!(mapping.original_url, "https://example.com");
        assert!(is_valid_short_code(&mapping.short_code));
    }

    #[tokio::test]
    async fn test_shorten_stores_url_unchanged() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_create()
            .withf(|m| m.original_url == "https://EXAMPLE.com:443/Path#frag")
            .times(1)
            .returning(|m| Ok(mapping_from(&m)));

        let result = service(mock_repo)
            .shorten("https://EXAMPLE.com:443/Path#frag")
            .await;

        assert_eq!(result.unwrap().original_url, "https://EXAMPLE.com:443/Path#frag");
    }

    #[tokio::test]
    async fn test_shorten_invalid_url_does_not_touch_store() {
        for input in ["", "not-a-url", "ftp://example.com", "javascript:alert(1)"] {
            let mut mock_repo = MockUrlRepository::new();
            mock_repo.expect_create().times(0);

            let result = service(mock_repo).shorten(input).await;

            assert!(
                matches!(result, Err(AppError::Validation { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_shorten_retries_on_collision() {
        let mut mock_repo = MockUrlRepository::new();
        let mut seq = Sequence::new();

        mock_repo
            .expect_create()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|m| Err(StoreError::DuplicateCode(m.short_code)));
        mock_repo
            .expect_create()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|m| Ok(mapping_from(&m)));

        let result = service(mock_repo).shorten("https://example.com").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_shorten_gives_up_after_max_attempts() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_create()
            .times(3)
            .returning(|m| Err(StoreError::DuplicateCode(m.short_code)));

        let service = LinkService::new(Arc::new(mock_repo), CodeGenerator::default(), 3);
        let result = service.shorten("https://example.com").await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_shorten_storage_error_is_not_retried() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(StoreError::Storage(sqlx::Error::PoolTimedOut)));

        let result = service(mock_repo).shorten("https://example.com").await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_resolve_found() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_by_code()
            .withf(|code| code == "abc12345")
            .times(1)
            .returning(|code| {
                Ok(Some(UrlMapping::new(
                    1,
                    "https://example.com".to_string(),
                    code.to_string(),
                    Utc::now(),
                    3,
                )))
            });

        let result = service(mock_repo).resolve("abc12345").await.unwrap();

        let mapping = result.unwrap();
        assert_eq!(mapping.original_url, "https://example.com");
        assert_eq!(mapping.clicks, 3);
    }

    #[tokio::test]
    async fn test_resolve_missing() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(mock_repo).resolve("zzzzzz99").await;

        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_resolve_malformed_code_skips_store() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_find_by_code().times(0);

        let service = service(mock_repo);

        assert!(service.resolve("doesnotexist").await.unwrap().is_none());
        assert!(service.resolve("favicon.ico").await.unwrap().is_none());
        assert!(service.resolve("abc").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_resolve_storage_error() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_by_code()
            .times(1)
            .returning(|_| Err(StoreError::Storage(sqlx::Error::PoolClosed)));

        let result = service(mock_repo).resolve("abc12345").await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_counts() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo.expect_count().times(1).returning(|| Ok(42));
        mock_repo.expect_total_clicks().times(1).returning(|| Ok(314));

        let service = service(mock_repo);

        assert_eq!(service.count().await.unwrap(), 42);
        assert_eq!(service.total_clicks().await.unwrap(), 314);
    }
}
