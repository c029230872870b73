use crate::domain::{models::admin::AdminUser, ports::SessionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteSessionRepo {
    pool: SqlitePool,
}

impl SqliteSessionRepo {
    pub fn new(pool: SqlitePool) -> Self { Self { pool } }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepo {
    async fn find_user_by_token_hash(&self, token_hash: &str) -> Result<Option<AdminUser>, AppError> {
        sqlx::query_as::<_, AdminUser>(
            r#"SELECT u.id, u.name, u.email, u.role, u.banned, u.created_at
               FROM admin_sessions s
               JOIN admin_users u ON s.user_id = u.id
               WHERE s.token_hash = ?
                 AND s.expires_at > ?
                 AND u.banned = 0"#
        )
            .bind(token_hash)
            .bind(chrono::Utc::now())
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
