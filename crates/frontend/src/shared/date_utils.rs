/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Format a date as YYYY-MM-DD
/// Example: 2024-12-17 -> "2024-12-17"
pub fn format_date_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a time of day in 12-hour clock notation
/// Example: 09:30 -> "09:30 AM", 14:00 -> "02:00 PM"
pub fn format_time_12h(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// Describe how long ago an instant was, relative to `now`
/// Example: 10 minutes back -> "10 mins ago"
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let mins = elapsed.num_minutes();
    if mins < 1 {
        return "just now".to_string();
    }
    if mins < 60 {
        return if mins == 1 {
            "1 min ago".to_string()
        } else {
            format!("{} mins ago", mins)
        };
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{} hours ago", hours)
        };
    }
    let days = elapsed.num_days();
    if days == 1 {
        "Yesterday".to_string()
    } else {
        format!("{} days ago", days)
    }
}

/// Whole days from `today` until `date` (negative when already past)
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 14, h, m, 0).unwrap()
    }

    #[test]
    fn test_format_time_12h() {
        assert_eq!(
            format_time_12h(NaiveTime::from_hms_opt(9, 30, 0).unwrap()),
            "09:30 AM"
        );
        assert_eq!(
            format_time_12h(NaiveTime::from_hms_opt(14, 0, 0).unwrap()),
            "02:00 PM"
        );
    }

    #[test]
    fn test_relative_time() {
        let now = at(12, 0);
        assert_eq!(relative_time(at(11, 50), now), "10 mins ago");
        assert_eq!(relative_time(at(11, 59), now), "1 min ago");
        assert_eq!(relative_time(at(11, 0), now), "1 hour ago");
        assert_eq!(relative_time(at(10, 0), now), "2 hours ago");
        assert_eq!(relative_time(now, now), "just now");
    }

    #[test]
    fn test_relative_time_days() {
        let now = at(12, 0);
        assert_eq!(relative_time(now - Duration::days(1), now), "Yesterday");
        assert_eq!(relative_time(now - Duration::days(3), now), "3 days ago");
    }

    #[test]
    fn test_days_until() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 14).unwrap();
        let expiry = NaiveDate::from_ymd_opt(2024, 12, 17).unwrap();
        assert_eq!(days_until(expiry, today), 3);
        assert_eq!(days_until(today, today), 0);
        let past = NaiveDate::from_ymd_opt(2024, 12, 10).unwrap();
        assert_eq!(days_until(past, today), -4);
    }

    #[test]
    fn test_format_date_iso() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_date_iso(date), "2025-01-05");
    }
}
