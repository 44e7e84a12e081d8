//! Calendar-day and date-range boundaries.
//!
//! Day views and reports take plain dates (`YYYY-MM-DD`) at the API edge;
//! these helpers turn them into half-open UTC timestamp windows for the
//! repository layer (`start <= t < end`).

use chrono::{Days, NaiveDate};

use crate::types::Timestamp;

/// Half-open UTC window covering one calendar day.
pub fn day_bounds(date: NaiveDate) -> (Timestamp, Timestamp) {
    let start = date.and_hms_opt(0, 0, 0).expect("midnight is always valid");
    let end = start + chrono::Duration::days(1);
    (start.and_utc(), end.and_utc())
}

/// Half-open UTC window covering `from..=to` as whole calendar days.
///
/// `to` is inclusive at the day level: the window ends at the midnight
/// following `to`.
pub fn range_bounds(from: NaiveDate, to: NaiveDate) -> (Timestamp, Timestamp) {
    let start = from.and_hms_opt(0, 0, 0).expect("midnight is always valid");
    let end_day = to.checked_add_days(Days::new(1)).unwrap_or(to);
    let end = end_day.and_hms_opt(0, 0, 0).expect("midnight is always valid");
    (start.and_utc(), end.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_bounds_cover_exactly_one_day() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let (start, end) = day_bounds(date);

        assert_eq!(start.to_rfc3339(), "2025-01-05T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2025-01-06T00:00:00+00:00");
    }

    #[test]
    fn range_bounds_include_the_last_day() {
        let from = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let (start, end) = range_bounds(from, to);

        assert_eq!(start.to_rfc3339(), "2025-01-01T00:00:00+00:00");
        // An appointment at 23:59 on Jan 31 falls inside the window.
        assert_eq!(end.to_rfc3339(), "2025-02-01T00:00:00+00:00");
    }

    #[test]
    fn single_day_range_equals_day_bounds() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(range_bounds(date, date), day_bounds(date));
    }
}
