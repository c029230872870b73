use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};
use std::sync::Arc;

use crate::domain::models::location::LocationSlot;
use crate::domain::ports::LocationRepository;
use crate::error::AppError;

/// Hard ceilings for upcoming-schedule queries. Both the look-ahead window and
/// the row count are bounded so a public read can never balloon.
pub const MAX_HORIZON_DAYS: i64 = 90;
pub const MAX_UPCOMING_RESULTS: i64 = 30;
pub const DEFAULT_HORIZON_DAYS: i64 = 14;

/// The three resolved states a calendar date can be in.
#[derive(Debug, Clone, PartialEq)]
pub enum DayResolution {
    /// No active slot (or never seeded): the trailer is not out.
    Closed,
    /// Active slot on a past date: retained for history, hidden from upcoming views.
    Past(LocationSlot),
    /// Active slot today or in the future.
    Scheduled(LocationSlot),
}

/// Strategy A: the persisted schedule is the single source of truth for the
/// live read path. The rotation only ever backfills it offline.
pub struct ScheduleService {
    locations: Arc<dyn LocationRepository>,
}

impl ScheduleService {
    pub fn new(locations: Arc<dyn LocationRepository>) -> Self {
        Self { locations }
    }

    pub async fn today_location(&self, today: NaiveDate) -> Result<Option<LocationSlot>, AppError> {
        self.locations.find_active_by_date(today).await
    }

    /// "Not trading" is a normal outcome, never an error.
    pub async fn schedule_for_date(&self, date: NaiveDate) -> Result<Option<LocationSlot>, AppError> {
        self.locations.find_active_by_date(date).await
    }

    pub async fn resolve(&self, date: NaiveDate, today: NaiveDate) -> Result<DayResolution, AppError> {
        match self.locations.find_active_by_date(date).await? {
            None => Ok(DayResolution::Closed),
            Some(slot) if slot.date < today => Ok(DayResolution::Past(slot)),
            Some(slot) => Ok(DayResolution::Scheduled(slot)),
        }
    }

    /// Active slots in `[today, today + horizon)`, (date, start_time) asc.
    /// Horizon and result count are clamped to the service ceilings.
    pub async fn upcoming(&self, today: NaiveDate, horizon_days: i64, max_results: i64) -> Result<Vec<LocationSlot>, AppError> {
        let horizon = horizon_days.clamp(1, MAX_HORIZON_DAYS);
        let limit = max_results.clamp(1, MAX_UPCOMING_RESULTS);
        let end = today + Duration::days(horizon);

        self.locations.list_active_in_range(today, end, limit).await
    }
}

/// Renders a stored civil time as a 12-hour clock string ("6:00 PM").
/// Pure string shaping: the wall-clock value is never shifted across zones.
pub fn format_time_12h(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    format!("{}:{:02} {}", hour, time.minute(), if is_pm { "PM" } else { "AM" })
}

pub fn format_time_range(start: NaiveTime, end: NaiveTime) -> String {
    format!("{} - {}", format_time_12h(start), format_time_12h(end))
}

/// Long-form display date, e.g. "Wednesday, 5 June 2024".
pub fn format_display_date(date: NaiveDate) -> String {
    format!(
        "{}, {} {} {}",
        date.format("%A"),
        date.day(),
        date.format("%B"),
        date.year()
    )
}
