use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use crate::domain::models::{exception::ScheduleException, location::LocationSlot};

/// Reference Monday the fortnightly rotation counts from.
pub const ROTATION_EPOCH: (i32, u32, u32) = (2024, 1, 1);

/// Default backfill horizon for the seed generator, in days.
pub const DEFAULT_SEED_HORIZON_DAYS: i64 = 90;

const START_TIME: &str = "18:00";
const END_TIME: &str = "21:00";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationEntry {
    pub location: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

// Monday..Sunday. Both tables cover every weekday, so the rotation is
// total: every date has a default pitch unless an exception suppresses it.
pub static WEEK_A: [RotationEntry; 7] = [
    RotationEntry { location: "Chipping Campden Village Green", latitude: 52.0497, longitude: -1.7798 },
    RotationEntry { location: "Bourton-on-the-Water High Street", latitude: 51.8854, longitude: -1.7593 },
    RotationEntry { location: "Stow-on-the-Wold Market Square", latitude: 51.9296, longitude: -1.7235 },
    RotationEntry { location: "Moreton-in-Marsh Fire Station Car Park", latitude: 51.9906, longitude: -1.7020 },
    RotationEntry { location: "Winchcombe Abbey Grounds", latitude: 51.9527, longitude: -1.9668 },
    RotationEntry { location: "Cirencester Market Place", latitude: 51.7188, longitude: -1.9687 },
    RotationEntry { location: "Broadway Village Green", latitude: 52.0347, longitude: -1.8587 },
];

pub static WEEK_B: [RotationEntry; 7] = [
    RotationEntry { location: "Tetbury Market House", latitude: 51.6390, longitude: -2.1593 },
    RotationEntry { location: "Painswick Village Centre", latitude: 51.7850, longitude: -2.1950 },
    RotationEntry { location: "Chipping Norton Market Square", latitude: 51.9403, longitude: -1.5456 },
    RotationEntry { location: "Burford High Street", latitude: 51.8090, longitude: -1.6365 },
    RotationEntry { location: "Woodstock Market Street", latitude: 51.8480, longitude: -1.3531 },
    RotationEntry { location: "Charlbury Station Car Park", latitude: 51.8720, longitude: -1.4904 },
    RotationEntry { location: "Fairford Market Place", latitude: 51.7086, longitude: -1.7823 },
];

fn epoch() -> NaiveDate {
    let (y, m, d) = ROTATION_EPOCH;
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Whole weeks elapsed since the epoch. Euclidean so that dates before the
/// epoch keep the 14-day period intact.
pub fn week_index(date: NaiveDate) -> i64 {
    (date - epoch()).num_days().div_euclid(7)
}

pub fn is_week_a(date: NaiveDate) -> bool {
    week_index(date).rem_euclid(2) == 0
}

/// The fixed default pitch for a date, ignoring exceptions.
pub fn rotation_entry(date: NaiveDate) -> &'static RotationEntry {
    let table = if is_week_a(date) { &WEEK_A } else { &WEEK_B };
    // Monday = 0 .. Sunday = 6
    &table[date.weekday().num_days_from_monday() as usize]
}

/// Strategy B resolution: the rotation's entry for `date`, unless an exception
/// suppresses it. Both exception kinds close the day.
pub fn resolve(date: NaiveDate, exceptions: &[ScheduleException]) -> Option<&'static RotationEntry> {
    if exceptions.iter().any(|ex| ex.date == date) {
        return None;
    }
    Some(rotation_entry(date))
}

pub fn default_window() -> (NaiveTime, NaiveTime) {
    (
        NaiveTime::parse_from_str(START_TIME, "%H:%M").unwrap(),
        NaiveTime::parse_from_str(END_TIME, "%H:%M").unwrap(),
    )
}

/// Materialises the rotation into concrete `LocationSlot` rows for a bounded
/// horizon so the persisted schedule has data to serve. Exception dates are
/// skipped; callers also skip dates that already have a persisted row.
pub fn generate_seed_slots(from: NaiveDate, horizon_days: i64, exceptions: &[ScheduleException]) -> Vec<LocationSlot> {
    let (start, end) = default_window();
    let mut slots = Vec::new();

    for offset in 0..horizon_days {
        let date = from + Duration::days(offset);
        if let Some(entry) = resolve(date, exceptions) {
            slots.push(LocationSlot::new(
                entry.location.to_string(),
                date,
                start,
                end,
                entry.latitude,
                entry.longitude,
            ));
        }
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_week_parity() {
        assert!(is_week_a(date(2024, 1, 1)));
        assert!(!is_week_a(date(2024, 1, 8)));
        assert!(is_week_a(date(2024, 1, 15)));
    }

    #[test]
    fn parity_has_period_fourteen() {
        let mut d = date(2023, 6, 1);
        for _ in 0..100 {
            assert_eq!(is_week_a(d), is_week_a(d + Duration::days(14)));
            d += Duration::days(3);
        }
    }

    #[test]
    fn parity_holds_before_epoch() {
        // 2023-12-25 is the Monday one week before the epoch.
        assert!(!is_week_a(date(2023, 12, 25)));
        assert!(is_week_a(date(2023, 12, 18)));
    }

    #[test]
    fn every_date_has_a_default_pitch() {
        let mut d = date(2024, 1, 1);
        for _ in 0..28 {
            assert!(!rotation_entry(d).location.is_empty());
            d += Duration::days(1);
        }
    }

    #[test]
    fn sunday_maps_to_last_entry() {
        let sunday = date(2024, 1, 7);
        assert_eq!(sunday.weekday(), Weekday::Sun);
        assert_eq!(rotation_entry(sunday).location, "Broadway Village Green");
    }

    #[test]
    fn wednesday_week_a_is_stow() {
        // 2024-06-05 falls in a Week A (week index 22).
        let d = date(2024, 6, 5);
        assert_eq!(d.weekday(), Weekday::Wed);
        assert!(is_week_a(d));
        assert_eq!(rotation_entry(d).location, "Stow-on-the-Wold Market Square");
    }

    #[test]
    fn exception_suppresses_rotation() {
        let d = date(2024, 6, 5);
        let exceptions = vec![ScheduleException::new(d, "not-trading".to_string())];
        assert!(resolve(d, &exceptions).is_none());
        assert!(resolve(d + Duration::days(1), &exceptions).is_some());

        let private = vec![ScheduleException::new(d, "private-event".to_string())];
        assert!(resolve(d, &private).is_none());
    }

    #[test]
    fn seed_skips_exception_dates() {
        let from = date(2024, 6, 3);
        let exceptions = vec![ScheduleException::new(date(2024, 6, 5), "not-trading".to_string())];
        let slots = generate_seed_slots(from, 7, &exceptions);

        assert_eq!(slots.len(), 6);
        assert!(slots.iter().all(|s| s.date != date(2024, 6, 5)));
        assert!(slots.iter().all(|s| s.is_active));
        assert!(slots.iter().all(|s| s.start_time < s.end_time));
    }

    #[test]
    fn seed_covers_the_whole_horizon() {
        let slots = generate_seed_slots(date(2024, 1, 1), 14, &[]);
        assert_eq!(slots.len(), 14);
        assert_eq!(slots[0].name, "Chipping Campden Village Green");
        assert_eq!(slots[7].name, "Tetbury Market House");
        assert_eq!(slots[13].name, "Fairford Market Place");
    }
}
