use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

pub const ENQUIRY_TYPES: [&str; 4] = ["general", "private-hire", "event", "feedback"];
pub const ENQUIRY_STATUSES: [&str; 3] = ["new", "read", "archived"];

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ContactEnquiry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub enquiry_type: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl ContactEnquiry {
    pub fn new(name: String, email: String, enquiry_type: String, message: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            enquiry_type,
            message,
            status: "new".to_string(),
            created_at: Utc::now(),
        }
    }
}
