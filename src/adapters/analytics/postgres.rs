//! PostgreSQL implementation of PageViewRecorder.
//!
//! Schema:
//!
//! ```sql
//! CREATE TABLE page_views (
//!     id         UUID PRIMARY KEY,
//!     path       TEXT NOT NULL,
//!     viewed_at  TIMESTAMPTZ NOT NULL
//! );
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;

use crate::domain::analytics::PageView;
use crate::ports::{AnalyticsError, PageViewRecorder};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS page_views (
        id         UUID PRIMARY KEY,
        path       TEXT NOT NULL,
        viewed_at  TIMESTAMPTZ NOT NULL
    )
"#;

const CREATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS page_views_viewed_at_idx ON page_views (viewed_at)";

#[derive(Clone)]
pub struct PostgresPageViewStore {
    pool: PgPool,
}

impl PostgresPageViewStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a lazily-connecting pool; no connection is made until first use.
    pub fn connect_lazy(
        url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, AnalyticsError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect_lazy(url)?;
        Ok(Self::new(pool))
    }

    /// Creates the table and index if missing.
    pub async fn ensure_schema(&self) -> Result<(), AnalyticsError> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_INDEX).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl PageViewRecorder for PostgresPageViewStore {
    async fn record(&self, view: &PageView) -> Result<(), AnalyticsError> {
        sqlx::query("INSERT INTO page_views (id, path, viewed_at) VALUES ($1, $2, $3)")
            .bind(view.id.as_uuid())
            .bind(&view.path)
            .bind(view.viewed_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn views_since(&self, since: DateTime<Utc>) -> Result<Vec<DateTime<Utc>>, AnalyticsError> {
        let rows = sqlx::query("SELECT viewed_at FROM page_views WHERE viewed_at >= $1")
            .bind(since)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| row.try_get::<DateTime<Utc>, _>("viewed_at"))
            .collect::<Result<Vec<_>, _>>()
            .map_err(AnalyticsError::from)
    }

    async fn total(&self) -> Result<u64, AnalyticsError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM page_views")
            .fetch_one(&self.pool)
            .await?;
        let total: i64 = row.try_get("total")?;
        Ok(total.max(0) as u64)
    }
}
