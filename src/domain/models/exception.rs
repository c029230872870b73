use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

pub const EXCEPTION_KINDS: [&str; 2] = ["not-trading", "private-event"];

/// Sparse per-date override consulted by the rotation and the seed
/// generator: a matching date is never seeded. Already-persisted slots are
/// unaffected; closing a seeded day means deactivating its slot. Keyed by
/// date.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ScheduleException {
    pub date: NaiveDate,
    pub kind: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ScheduleException {
    pub fn new(date: NaiveDate, kind: String) -> Self {
        Self {
            date,
            kind,
            description: None,
            created_at: Utc::now(),
        }
    }
}
