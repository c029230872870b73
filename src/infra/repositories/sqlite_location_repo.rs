use crate::domain::{models::location::LocationSlot, ports::LocationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

pub struct SqliteLocationRepo {
    pool: SqlitePool,
}

impl SqliteLocationRepo {
    pub fn new(pool: SqlitePool) -> Self { Self { pool } }
}

#[async_trait]
impl LocationRepository for SqliteLocationRepo {
    async fn create(&self, slot: &LocationSlot) -> Result<LocationSlot, AppError> {
        sqlx::query_as::<_, LocationSlot>(
            r#"INSERT INTO locations (id, name, description, date, start_time, end_time, latitude, longitude, what3words, is_active, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
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
        sqlx::query_as::<_, LocationSlot>("SELECT * FROM locations WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_active_by_date(&self, date: NaiveDate) -> Result<Option<LocationSlot>, AppError> {
        sqlx::query_as::<_, LocationSlot>(
            "SELECT * FROM locations WHERE date = ? AND is_active = 1 ORDER BY id ASC LIMIT 1"
        )
            .bind(date)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn exists_for_date(&self, date: NaiveDate) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM locations WHERE date = ?")
            .bind(date)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(count > 0)
    }

    async fn list_active_in_range(&self, start: NaiveDate, end: NaiveDate, limit: i64) -> Result<Vec<LocationSlot>, AppError> {
        sqlx::query_as::<_, LocationSlot>(
            r#"SELECT * FROM locations
               WHERE is_active = 1 AND date >= ? AND date < ?
               ORDER BY date ASC, start_time ASC
               LIMIT ?"#
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
                       WHERE date >= ? AND date <= ?
                       ORDER BY date ASC, start_time ASC
                       LIMIT ? OFFSET ?"#
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
                    "SELECT * FROM locations ORDER BY date ASC, start_time ASC LIMIT ? OFFSET ?"
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
                sqlx::query_scalar("SELECT COUNT(*) FROM locations WHERE date >= ? AND date <= ?")
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
               name = ?, description = ?, date = ?, start_time = ?, end_time = ?,
               latitude = ?, longitude = ?, what3words = ?, is_active = ?, updated_at = ?
               WHERE id = ?
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
        let res = sqlx::query("DELETE FROM locations WHERE id = ?")
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
