use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::UserId;
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{
    Result, StoreError, Webinar, WebinarId, WebinarProps, repository::WebinarRepository,
};

/// PostgreSQL-backed webinar repository.
#[derive(Clone)]
pub struct PostgresWebinarRepository {
    pool: PgPool,
}

impl PostgresWebinarRepository {
    /// Creates a new PostgreSQL webinar repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    fn row_to_webinar(row: PgRow) -> Result<Webinar> {
        let seats: i32 = row.try_get("seats")?;
        let seats = u32::try_from(seats)
            .map_err(|_| StoreError::InvalidRecord(format!("negative seat count {seats}")))?;

        Ok(Webinar::new(WebinarProps {
            id: WebinarId::new(row.try_get::<String, _>("id")?),
            organizer_id: UserId::new(row.try_get::<String, _>("organizer_id")?),
            title: row.try_get("title")?,
            start_date: row.try_get::<DateTime<Utc>, _>("start_date")?,
            end_date: row.try_get::<DateTime<Utc>, _>("end_date")?,
            seats,
        }))
    }

    fn seats_column(webinar: &Webinar) -> Result<i32> {
        i32::try_from(webinar.seats()).map_err(|_| {
            StoreError::InvalidRecord(format!("seat count {} out of range", webinar.seats()))
        })
    }
}

#[async_trait]
impl WebinarRepository for PostgresWebinarRepository {
    #[tracing::instrument(skip(self, webinar), fields(webinar_id = %webinar.id()))]
    async fn create(&self, webinar: &Webinar) -> Result<()> {
        let seats = Self::seats_column(webinar)?;

        sqlx::query(
            r#"
            INSERT INTO webinars (id, organizer_id, title, start_date, end_date, seats)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(webinar.id().as_str())
        .bind(webinar.organizer_id().as_str())
        .bind(webinar.title())
        .bind(webinar.start_date())
        .bind(webinar.end_date())
        .bind(seats)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return StoreError::Conflict(webinar.id().clone());
            }
            StoreError::Database(e)
        })?;

        tracing::debug!("webinar row inserted");
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(webinar_id = %id))]
    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>> {
        let row: Option<PgRow> = sqlx::query(
            r#"
            SELECT id, organizer_id, title, start_date, end_date, seats
            FROM webinars
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_webinar).transpose()
    }

    #[tracing::instrument(skip(self, webinar), fields(webinar_id = %webinar.id()))]
    async fn update(&self, webinar: &Webinar) -> Result<()> {
        let seats = Self::seats_column(webinar)?;

        let result = sqlx::query(
            r#"
            UPDATE webinars
            SET title = $2, start_date = $3, end_date = $4, seats = $5
            WHERE id = $1
            "#,
        )
        .bind(webinar.id().as_str())
        .bind(webinar.title())
        .bind(webinar.start_date())
        .bind(webinar.end_date())
        .bind(seats)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(webinar.id().clone()));
        }

        tracing::debug!("webinar row updated");
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(webinar_id = %id))]
    async fn delete(&self, id: &WebinarId) -> Result<()> {
        sqlx::query("DELETE FROM webinars WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
