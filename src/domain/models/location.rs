use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// A single dated trading appearance of the trailer at a named pitch.
/// Times are civil wall-clock values at the pitch, never UTC instants.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct LocationSlot {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub latitude: f64,
    pub longitude: f64,
    pub what3words: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LocationSlot {
    pub fn new(name: String, date: NaiveDate, start_time: NaiveTime, end_time: NaiveTime, latitude: f64, longitude: f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description: None,
            date,
            start_time,
            end_time,
            latitude,
            longitude,
            what3words: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
