use crate::domain::{models::exception::ScheduleException, ports::ExceptionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

pub struct SqliteExceptionRepo {
    pool: SqlitePool,
}

impl SqliteExceptionRepo {
    pub fn new(pool: SqlitePool) -> Self { Self { pool } }
}

#[async_trait]
impl ExceptionRepository for SqliteExceptionRepo {
    async fn upsert(&self, exception: &ScheduleException) -> Result<ScheduleException, AppError> {
        sqlx::query_as::<_, ScheduleException>(
            r#"INSERT INTO schedule_exceptions (date, kind, description, created_at)
               VALUES (?, ?, ?, ?)
               ON CONFLICT(date) DO UPDATE SET
               kind=excluded.kind,
               description=excluded.description
               RETURNING *"#
        )
            .bind(exception.date)
            .bind(&exception.kind)
            .bind(&exception.description)
            .bind(exception.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<ScheduleException>, AppError> {
        sqlx::query_as::<_, ScheduleException>(
            "SELECT * FROM schedule_exceptions ORDER BY date ASC"
        )
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, date: NaiveDate) -> Result<(), AppError> {
        let res = sqlx::query("DELETE FROM schedule_exceptions WHERE date = ?")
            .bind(date)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if res.rows_affected() == 0 {
            return Err(AppError::NotFound("Exception not found".into()));
        }
        Ok(())
    }
}
