use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Admin identity as provisioned by the external auth provider.
/// This service never creates these rows; it only validates sessions.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub banned: bool,
    pub created_at: DateTime<Utc>,
}
