//! PostgreSQL implementation of the click log.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ClickEvent, NewClickEvent};
use crate::domain::repositories::ClickRepository;
use crate::error::StoreError;

#[derive(sqlx::FromRow)]
struct ClickRow {
    id: i64,
    url_id: i64,
    user_agent: String,
    referer: String,
    clicked_at: DateTime<Utc>,
}

impl From<ClickRow> for ClickEvent {
    fn from(r: ClickRow) -> Self {
        ClickEvent::new(r.id, r.url_id, r.user_agent, r.referer, r.clicked_at)
    }
}

/// PostgreSQL repository for click events.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn append(&self, new_click: NewClickEvent) -> Result<ClickEvent, StoreError> {
        let row = sqlx::query_as::<_, ClickRow>(
            r#"
            INSERT INTO clicks (url_id, user_agent, referer)
            VALUES ($1, $2, $3)
            RETURNING id, url_id, user_agent, referer, clicked_at
            "#,
        )
        .bind(new_click.mapping_id)
        .bind(&new_click.user_agent)
        .bind(&new_click.referrer)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_for_mapping(
        &self,
        mapping_id: i64,
        limit: i64,
    ) -> Result<Vec<ClickEvent>, StoreError> {
        let rows = sqlx::query_as::<_, ClickRow>(
            r#"
            SELECT id, url_id, user_agent, referer, clicked_at
            FROM clicks
            WHERE url_id = $1
            ORDER BY clicked_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(mapping_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
