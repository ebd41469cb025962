//! PostgreSQL implementation of the mapping store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::StoreError;
use crate::utils::db_error::is_unique_violation_on_code;

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    original_url: String,
    short_code: String,
    created_at: DateTime<Utc>,
    clicks: i64,
}

impl From<UrlRow> for UrlMapping {
    fn from(r: UrlRow) -> Self {
        UrlMapping::new(r.id, r.original_url, r.short_code, r.created_at, r.clicks)
    }
}

/// PostgreSQL repository for url mappings.
///
/// Uses bound parameters for SQL injection protection.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, StoreError> {
        let result = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (original_url, short_code)
            VALUES ($1, $2)
            RETURNING id, original_url, short_code, created_at, clicks
            "#,
        )
        .bind(&new_mapping.original_url)
        .bind(&new_mapping.short_code)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(row) => Ok(row.into()),
            Err(e) if is_unique_violation_on_code(&e) => {
                Err(StoreError::DuplicateCode(new_mapping.short_code))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>, StoreError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_code, created_at, clicks
            FROM urls
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn increment_clicks(&self, short_code: &str) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE urls SET clicks = clicks + 1 WHERE short_code = $1")
            .bind(short_code)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(short_code.to_string()));
        }

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<UrlMapping>, StoreError> {
        let rows = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_code, created_at, clicks
            FROM urls
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn total_clicks(&self) -> Result<i64, StoreError> {
        let total =
            sqlx::query_scalar::<_, i64>("SELECT COALESCE(SUM(clicks), 0)::BIGINT FROM urls")
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(total)
    }
}
