//! Calendar date formatting and relative "time ago" phrases.
//!
//! ## Token substitution
//!
//! [`format_date`] replaces only the *first* occurrence of each of `YYYY`,
//! `MM` and `DD`, in that order. A format such as `"YYYY/YYYY"` therefore
//! keeps its second `YYYY` verbatim. Existing bindings depend on this exact
//! output, so it is kept as is.
//!
//! ## Normalizing input
//!
//! Binding layers tend to hand over dates as epoch milliseconds or as
//! strings. [`from_millis`] and [`parse_date`] turn those into a
//! `DateTime<Utc>` that the formatters accept.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::{Error, Result};

/// Format used by [`format_date_default`] and the `time_ago` fallback.
pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD";

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_DAY: i64 = 86_400;
const SECS_PER_MONTH: i64 = 2_592_000;

/// Substitute `YYYY`, `MM` and `DD` in `format` with the date's year,
/// zero-padded month and zero-padded day.
///
/// Only the first occurrence of each token is replaced.
///
/// # Examples
///
/// ```
/// use bindkit_core::date::format_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// assert_eq!(format_date(&date, "YYYY-MM-DD"), "2024-03-07");
/// assert_eq!(format_date(&date, "DD.MM.YYYY"), "07.03.2024");
/// assert_eq!(format_date(&date, "YYYY YYYY"), "2024 YYYY");
/// ```
#[must_use]
pub fn format_date<D: Datelike>(date: &D, format: &str) -> String {
    let year = date.year().to_string();
    let month = format!("{:02}", date.month());
    let day = format!("{:02}", date.day());

    format
        .replacen("YYYY", &year, 1)
        .replacen("MM", &month, 1)
        .replacen("DD", &day, 1)
}

/// [`format_date`] with [`DEFAULT_DATE_FORMAT`].
#[must_use]
pub fn format_date_default<D: Datelike>(date: &D) -> String {
    format_date(date, DEFAULT_DATE_FORMAT)
}

/// Describe how long ago `date` was, relative to the system clock.
///
/// See [`time_ago_at`] for the buckets.
#[must_use]
pub fn time_ago<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    time_ago_at(date, SystemClock.now())
}

/// Describe how long ago `date` was, relative to `now`.
///
/// | Elapsed            | Output              |
/// |--------------------|---------------------|
/// | under a minute     | `just now`          |
/// | under an hour      | `{n} minutes ago`   |
/// | under a day        | `{n} hours ago`     |
/// | under 30 days      | `{n} days ago`      |
/// | anything older     | `YYYY-MM-DD`        |
///
/// Dates in the future count as `just now`. Counts are not pluralization
/// aware (`1 minutes ago`).
///
/// # Examples
///
/// ```
/// use bindkit_core::date::time_ago_at;
/// use chrono::{TimeDelta, TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
/// assert_eq!(time_ago_at(&(now - TimeDelta::seconds(30)), now), "just now");
/// assert_eq!(time_ago_at(&(now - TimeDelta::minutes(5)), now), "5 minutes ago");
/// assert_eq!(time_ago_at(&(now - TimeDelta::days(45)), now), "2024-04-17");
/// ```
#[must_use]
pub fn time_ago_at<Tz: TimeZone>(date: &DateTime<Tz>, now: DateTime<Utc>) -> String {
    time_ago_with_format(date, now, DEFAULT_DATE_FORMAT)
}

/// [`time_ago_at`] with a custom fallback format for dates older than 30 days.
#[must_use]
pub fn time_ago_with_format<Tz: TimeZone>(
    date: &DateTime<Tz>,
    now: DateTime<Utc>,
    fallback_format: &str,
) -> String {
    let seconds = now
        .signed_duration_since(date.with_timezone(&Utc))
        .num_seconds();

    if seconds < SECS_PER_MINUTE {
        "just now".to_string()
    } else if seconds < SECS_PER_HOUR {
        format!("{} minutes ago", seconds / SECS_PER_MINUTE)
    } else if seconds < SECS_PER_DAY {
        format!("{} hours ago", seconds / SECS_PER_HOUR)
    } else if seconds < SECS_PER_MONTH {
        format!("{} days ago", seconds / SECS_PER_DAY)
    } else {
        format_date(date, fallback_format)
    }
}

/// Convert epoch milliseconds into a UTC instant.
pub fn from_millis(millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| Error::InvalidDate(format!("timestamp {millis}ms is out of range")))
}

/// Normalize a timestamp-like string into a UTC instant.
///
/// Supports:
/// - `1718000000000` (epoch milliseconds)
/// - `2024-01-15` (date only, midnight UTC)
/// - `2024-01-15T10:30:00Z` / `2024-01-15T10:30:00+02:00` (RFC 3339)
/// - `2024-01-15T10:30:00` and `2024-01-15T10:30:00.250` (assumed UTC)
pub fn parse_date(input: &str) -> Result<DateTime<Utc>> {
    let s = input.trim();

    if let Ok(millis) = s.parse::<i64>() {
        return from_millis(millis);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.and_utc());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.and_utc());
    }

    debug!(date_str = %s, "Could not parse date");
    Err(Error::InvalidDate(format!("unrecognized date '{s}'")))
}
