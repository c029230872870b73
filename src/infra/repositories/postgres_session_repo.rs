use crate::domain::{models::admin::AdminUser, ports::SessionRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresSessionRepo {
    pool: PgPool,
}

impl PostgresSessionRepo {
    pub fn new(pool: PgPool) -> Self { Self { pool } }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepo {
    async fn find_user_by_token_hash(&self, token_hash: &str) -> Result<Option<AdminUser>, AppError> {
        sqlx::query_as::<_, AdminUser>(
            r#"SELECT u.id, u.name, u.email, u.role, u.banned, u.created_at
               FROM admin_sessions s
               JOIN admin_users u ON s.user_id = u.id
               WHERE s.token_hash = $1
                 AND s.expires_at > NOW()
                 AND NOT u.banned"#
        )
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
