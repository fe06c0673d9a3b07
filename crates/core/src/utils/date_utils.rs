//! Display helpers for the `createdAt` timestamps sent by the server.
//!
//! Timestamps stay strings in the models; these helpers parse them on demand.
//! Formatting helpers return the input unchanged when it does not parse.

use chrono::{DateTime, FixedOffset, Local, TimeZone};

pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value.trim()).ok()
}

/// "Jan 1, 2024"
pub fn format_date(value: &str) -> String {
    parse_timestamp(value)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// "Jan 1, 2024, 08:30 AM"
pub fn format_date_time(value: &str) -> String {
    parse_timestamp(value)
        .map(|date| date.format("%b %-d, %Y, %I:%M %p").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Whole calendar days between the timestamp and `now`, in `now`'s timezone.
fn days_before<Tz: TimeZone>(value: &str, now: &DateTime<Tz>) -> Option<i64> {
    let date = parse_timestamp(value)?
        .with_timezone(&now.timezone())
        .date_naive();
    Some((now.date_naive() - date).num_days())
}

pub fn is_today<Tz: TimeZone>(value: &str, now: &DateTime<Tz>) -> bool {
    days_before(value, now) == Some(0)
}

pub fn is_yesterday<Tz: TimeZone>(value: &str, now: &DateTime<Tz>) -> bool {
    days_before(value, now) == Some(1)
}

/// "Today", "Yesterday", or the formatted date.
pub fn relative_time<Tz: TimeZone>(value: &str, now: &DateTime<Tz>) -> String {
    match days_before(value, now) {
        Some(0) => "Today".to_string(),
        Some(1) => "Yesterday".to_string(),
        _ => format_date(value),
    }
}

/// [`relative_time`] against the local clock.
pub fn relative_time_now(value: &str) -> String {
    relative_time(value, &Local::now())
}
