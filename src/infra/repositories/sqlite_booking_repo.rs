use crate::domain::{models::booking::EventBooking, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self { Self { pool } }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create(&self, booking: &EventBooking) -> Result<EventBooking, AppError> {
        sqlx::query_as::<_, EventBooking>(
            r#"INSERT INTO event_bookings (id, event_type, event_date, location, guest_count, name, email, notes, status, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&booking.id)
            .bind(&booking.event_type)
            .bind(booking.event_date)
            .bind(&booking.location)
            .bind(&booking.guest_count)
            .bind(&booking.name)
            .bind(&booking.email)
            .bind(&booking.notes)
            .bind(&booking.status)
            .bind(booking.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<EventBooking>, AppError> {
        sqlx::query_as::<_, EventBooking>("SELECT * FROM event_bookings WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, status: Option<&str>, limit: i64, offset: i64) -> Result<Vec<EventBooking>, AppError> {
        match status {
            Some(status) => {
                sqlx::query_as::<_, EventBooking>(
                    r#"SELECT * FROM event_bookings
                       WHERE status = ?
                       ORDER BY created_at DESC
                       LIMIT ? OFFSET ?"#
                )
                    .bind(status)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(AppError::Database)
            }
            None => {
                sqlx::query_as::<_, EventBooking>(
                    "SELECT * FROM event_bookings ORDER BY created_at DESC LIMIT ? OFFSET ?"
                )
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(AppError::Database)
            }
        }
    }

    async fn count(&self, status: Option<&str>) -> Result<i64, AppError> {
        match status {
            Some(status) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM event_bookings WHERE status = ?")
                    .bind(status)
                    .fetch_one(&self.pool)
                    .await
                    .map_err(AppError::Database)
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM event_bookings")
                    .fetch_one(&self.pool)
                    .await
                    .map_err(AppError::Database)
            }
        }
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<EventBooking, AppError> {
        sqlx::query_as::<_, EventBooking>(
            "UPDATE event_bookings SET status = ? WHERE id = ? RETURNING *"
        )
            .bind(status)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Booking not found".into()))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let res = sqlx::query("DELETE FROM event_bookings WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if res.rows_affected() == 0 {
            return Err(AppError::NotFound("Booking not found".into()));
        }
        Ok(())
    }
}
