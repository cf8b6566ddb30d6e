/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{NaiveDate, NaiveDateTime};

/// Format a date for tables
/// Example: 2024-01-15 -> "Jan 15, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format a timestamp for tables
/// Example: 2024-01-15 16:40:00 -> "2024-01-15 16:40"
pub fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format("%Y-%m-%d %H:%M").to_string()
}

/// Last-login style column: `None` renders as "Never".
pub fn format_datetime_opt(datetime: Option<NaiveDateTime>) -> String {
    datetime
        .map(format_datetime)
        .unwrap_or_else(|| "Never".to_string())
}

/// Parse the value of an `<input type="date">`. Empty or malformed input
/// means "no bound".
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Inverse of [`parse_date_input`].
pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::dates::{ymd, ymd_hms};

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(ymd(2024, 1, 5)), "Jan 5, 2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime(ymd_hms(2024, 1, 15, 16, 40, 0)),
            "2024-01-15 16:40"
        );
        assert_eq!(format_datetime_opt(None), "Never");
    }

    #[test]
    fn test_date_input_round_trip() {
        assert_eq!(parse_date_input("2024-01-14"), Some(ymd(2024, 1, 14)));
        assert_eq!(date_input_value(Some(ymd(2024, 1, 14))), "2024-01-14");
    }

    #[test]
    fn test_invalid_date_input() {
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("14.01.2024"), None);
        assert_eq!(date_input_value(None), "");
    }
}
