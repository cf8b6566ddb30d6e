//! Calendar helpers for embedded seed data.

use chrono::{NaiveDate, NaiveDateTime};

/// Builds a date from literal parts; invalid parts fall back to the epoch.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Builds a timestamp from literal parts; invalid parts fall back to the epoch.
pub fn ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, min, sec))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parts_fall_back_to_epoch() {
        assert_eq!(ymd(2024, 2, 30), NaiveDate::default());
        assert_eq!(ymd_hms(2024, 1, 1, 25, 0, 0), NaiveDateTime::default());
        assert_eq!(ymd(2024, 2, 29).to_string(), "2024-02-29");
    }
}
