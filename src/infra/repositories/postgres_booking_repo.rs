use crate::domain::{models::booking::EventBooking, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self { Self { pool } }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepo {
    async fn create(&self, booking: &EventBooking) -> Result<EventBooking, AppError> {
        sqlx::query_as::<_, EventBooking>(
            r#"INSERT INTO event_bookings (id, event_type, event_date, location, guest_count, name, email, notes, status, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
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
        sqlx::query_as::<_, EventBooking>("SELECT * FROM event_bookings WHERE id = $1")
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
                       WHERE status = $1
                       ORDER BY created_at DESC
                       LIMIT $2 OFFSET $3"#
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
                    "SELECT * FROM event_bookings ORDER BY created_at DESC LIMIT $1 OFFSET $2"
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
                sqlx::query_scalar("SELECT COUNT(*) FROM event_bookings WHERE status = $1")
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
            "UPDATE event_bookings SET status = $1 WHERE id = $2 RETURNING *"
        )
            .bind(status)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Booking not found".into()))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let res = sqlx::query("DELETE FROM event_bookings WHERE id = $1")
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
