use crate::domain::{models::enquiry::ContactEnquiry, ports::EnquiryRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresEnquiryRepo {
    pool: PgPool,
}

impl PostgresEnquiryRepo {
    pub fn new(pool: PgPool) -> Self { Self { pool } }
}

#[async_trait]
impl EnquiryRepository for PostgresEnquiryRepo {
    async fn create(&self, enquiry: &ContactEnquiry) -> Result<ContactEnquiry, AppError> {
        sqlx::query_as::<_, ContactEnquiry>(
            r#"INSERT INTO contact_enquiries (id, name, email, enquiry_type, message, status, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING *"#
        )
            .bind(&enquiry.id)
            .bind(&enquiry.name)
            .bind(&enquiry.email)
            .bind(&enquiry.enquiry_type)
            .bind(&enquiry.message)
            .bind(&enquiry.status)
            .bind(enquiry.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ContactEnquiry>, AppError> {
        sqlx::query_as::<_, ContactEnquiry>("SELECT * FROM contact_enquiries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self, status: Option<&str>, limit: i64, offset: i64) -> Result<Vec<ContactEnquiry>, AppError> {
        match status {
            Some(status) => {
                sqlx::query_as::<_, ContactEnquiry>(
                    r#"SELECT * FROM contact_enquiries
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
                sqlx::query_as::<_, ContactEnquiry>(
                    "SELECT * FROM contact_enquiries ORDER BY created_at DESC LIMIT $1 OFFSET $2"
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
                sqlx::query_scalar("SELECT COUNT(*) FROM contact_enquiries WHERE status = $1")
                    .bind(status)
                    .fetch_one(&self.pool)
                    .await
                    .map_err(AppError::Database)
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM contact_enquiries")
                    .fetch_one(&self.pool)
                    .await
                    .map_err(AppError::Database)
            }
        }
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<ContactEnquiry, AppError> {
        sqlx::query_as::<_, ContactEnquiry>(
            "UPDATE contact_enquiries SET status = $1 WHERE id = $2 RETURNING *"
        )
            .bind(status)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Enquiry not found".into()))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let res = sqlx::query("DELETE FROM contact_enquiries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if res.rows_affected() == 0 {
            return Err(AppError::NotFound("Enquiry not found".into()));
        }
        Ok(())
    }
}
