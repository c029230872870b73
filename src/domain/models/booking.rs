use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

pub const EVENT_TYPES: [&str; 4] = ["wedding", "corporate", "party", "other"];
pub const GUEST_COUNTS: [&str; 6] = ["30-50", "50-75", "75-100", "100-150", "150-200", "200+"];
pub const BOOKING_STATUSES: [&str; 4] = ["new", "replied", "booked", "declined"];

/// A private-hire booking enquiry submitted through the public site.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct EventBooking {
    pub id: String,
    pub event_type: String,
    pub event_date: NaiveDate,
    pub location: String,
    pub guest_count: String,
    pub name: String,
    pub email: String,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl EventBooking {
    pub fn new(event_type: String, event_date: NaiveDate, location: String, guest_count: String, name: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_type,
            event_date,
            location,
            guest_count,
            name,
            email,
            notes: None,
            status: "new".to_string(),
            created_at: Utc::now(),
        }
    }
}
