//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across admin lists
use chrono::{DateTime, Utc};

/// Format a timestamp as DD.MM.YYYY HH:MM:SS
/// Example: 2024-03-15T14:02:26.123Z -> "15.03.2024 14:02:26"
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        let dt: DateTime<Utc> = "2024-03-15T14:02:26.123Z".parse().unwrap();
        assert_eq!(format_datetime(&dt), "15.03.2024 14:02:26");
    }

    #[test]
    fn test_format_datetime_pads_fields() {
        let dt: DateTime<Utc> = "2024-01-05T03:04:05Z".parse().unwrap();
        assert_eq!(format_datetime(&dt), "05.01.2024 03:04:05");
    }
}
