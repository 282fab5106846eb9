/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Utc};

/// Format a timestamp as "Mar 15, 2024"
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y").to_string()
}

/// Format a timestamp as "Mar 15, 2024 14:02"
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y %H:%M").to_string()
}

/// Optional timestamp; missing value renders as "-"
pub fn format_date_opt(dt: Option<&DateTime<Utc>>) -> String {
    dt.map(format_date).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 5, 14, 2, 26).unwrap();
        assert_eq!(format_date(&dt), "Mar 5, 2024");
        assert_eq!(format_datetime(&dt), "Mar 5, 2024 14:02");
    }

    #[test]
    fn test_missing_date() {
        assert_eq!(format_date_opt(None), "-");
        let dt = Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(format_date_opt(Some(&dt)), "Dec 31, 2023");
    }
}
