use crate::domain::{models::location::LocationSlot, ports::LocationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

pub struct PostgresLocationRepo {
    pool: PgPool,
}

impl PostgresLocationRepo {
    pub fn new(pool: PgPool) -> Self { Self { pool } }
}

#[async_trait]
impl LocationRepository for PostgresLocationRepo {
    async fn create(&self, slot: &LocationSlot) -> Result<LocationSlot, AppError> {
        sqlx::query_as::<_, LocationSlot>(
            r#"INSERT INTO locations (id, name, description, date, start_time, end_time, latitude, longitude, what3words, is_active, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
               RETURNING *"#
        )
            .bind(&slot.id)
            .bind(&slot.name)
            .bind(&slot.description)
            .bind(slot.date)
            .bind(slot.start_time)
            .bind(slot.end_time)
            .bind(slot.latitude)
            .bind(slot.longitude)
            .bind(&slot.what3words)
            .bind(slot.is_active)
            .bind(slot.created_at)
            .bind(slot.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<LocationSlot>, AppError> {
        sqlx::query_as::<_, LocationSlot>("SELECT * FROM locations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_active_by_date(&self, date: NaiveDate) -> Result<Option<LocationSlot>, AppError> {
        sqlx::query_as::<_, LocationSlot>(
            "SELECT * FROM locations WHERE date = $1 AND is_active ORDER BY id ASC LIMIT 1"
        )
            .bind(date)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn exists_for_date(&self, date: NaiveDate) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM locations WHERE date = $1")
            .bind(date)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(count > 0)
    }

    async fn list_active_in_range(&self, start: NaiveDate, end: NaiveDate, limit: i64) -> Result<Vec<LocationSlot>, AppError> {
        sqlx::query_as::<_, LocationSlot>(
            r#"SELECT * FROM locations
               WHERE is_active AND date >= $1 AND date < $2
               ORDER BY date ASC, start_time ASC
               LIMIT $3"#
        )
            .bind(start)
            .bind(end)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, from: Option<NaiveDate>, to: Option<NaiveDate>, limit: i64, offset: i64) -> Result<Vec<LocationSlot>, AppError> {
        match (from, to) {
            (Some(from), Some(to)) => {
                sqlx::query_as::<_, LocationSlot>(
                    r#"SELECT * FROM locations
                       WHERE date >= $1 AND date <= $2
                       ORDER BY date ASC, start_time ASC
                       LIMIT $3 OFFSET $4"#
                )
                    .bind(from)
                    .bind(to)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(AppError::Database)
            }
            _ => {
                sqlx::query_as::<_, LocationSlot>(
                    "SELECT * FROM locations ORDER BY date ASC, start_time ASC LIMIT $1 OFFSET $2"
                )
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(AppError::Database)
            }
        }
    }

    async fn count(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<i64, AppError> {
        match (from, to) {
            (Some(from), Some(to)) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM locations WHERE date >= $1 AND date <= $2")
                    .bind(from)
                    .bind(to)
                    .fetch_one(&self.pool)
                    .await
                    .map_err(AppError::Database)
            }
            _ => {
                sqlx::query_scalar("SELECT COUNT(*) FROM locations")
                    .fetch_one(&self.pool)
                    .await
                    .map_err(AppError::Database)
            }
        }
    }

    async fn update(&self, slot: &LocationSlot) -> Result<LocationSlot, AppError> {
        sqlx::query_as::<_, LocationSlot>(
            r#"UPDATE locations SET
               name = $1, description = $2, date = $3, start_time = $4, end_time = $5,
               latitude = $6, longitude = $7, what3words = $8, is_active = $9, updated_at = $10
               WHERE id = $11
               RETURNING *"#
        )
            .bind(&slot.name)
            .bind(&slot.description)
            .bind(slot.date)
            .bind(slot.start_time)
            .bind(slot.end_time)
            .bind(slot.latitude)
            .bind(slot.longitude)
            .bind(&slot.what3words)
            .bind(slot.is_active)
            .bind(slot.updated_at)
            .bind(&slot.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let res = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if res.rows_affected() == 0 {
            return Err(AppError::NotFound("Location not found".into()));
        }
        Ok(())
    }
}
