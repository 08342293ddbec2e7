//! Time and date handling for the rail providers.
//!
//! Callers pass times as "HH:MM" and dates as "DD/MM/YYYY". Route providers
//! return full timestamps, either as "DD/MM/YYYY HH:MM:SS" or in ISO 8601
//! form. Everything is local time; no time zone is attached.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Format used for caller-facing times.
pub const CLOCK_TIME_FORMAT: &str = "%H:%M";

/// Format used for caller-facing dates.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Timestamp forms accepted from route providers, tried in order.
const TIMESTAMP_FORMATS: [&str; 2] = ["%d/%m/%Y %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Error returned when parsing an invalid time, date or timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Parse a time of day from "HH:MM" format.
///
/// # Examples
///
/// ```
/// use rail_client::domain::parse_clock_time;
///
/// assert!(parse_clock_time("00:00").is_ok());
/// assert!(parse_clock_time("23:59").is_ok());
///
/// assert!(parse_clock_time("1430").is_err());
/// assert!(parse_clock_time("14:3").is_err());
/// assert!(parse_clock_time("25:00").is_err());
/// ```
pub fn parse_clock_time(s: &str) -> Result<NaiveTime, TimeError> {
    // Must be exactly 5 characters: HH:MM
    if s.len() != 5 {
        return Err(TimeError::new("expected HH:MM format"));
    }

    let bytes = s.as_bytes();

    if bytes[2] != b':' {
        return Err(TimeError::new("expected colon at position 2"));
    }

    let hour =
        parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
    if hour > 23 {
        return Err(TimeError::new("hour must be 0-23"));
    }

    let minute =
        parse_two_digits(&bytes[3..5]).ok_or_else(|| TimeError::new("invalid minute digits"))?;
    if minute > 59 {
        return Err(TimeError::new("minute must be 0-59"));
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| TimeError::new("invalid time"))
}

/// Format a time of day as "HH:MM".
pub fn format_clock_time(time: NaiveTime) -> String {
    time.format(CLOCK_TIME_FORMAT).to_string()
}

/// Parse a date from "DD/MM/YYYY" format.
///
/// # Examples
///
/// ```
/// use rail_client::domain::parse_date;
/// use chrono::NaiveDate;
///
/// let date = parse_date("03/01/2026").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2026, 1, 3).unwrap());
///
/// assert!(parse_date("2026-01-03").is_err());
/// assert!(parse_date("31/02/2026").is_err());
/// ```
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    // chrono accepts unpadded fields; the providers do not
    if s.len() != 10 {
        return Err(TimeError::new("expected DD/MM/YYYY format"));
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| TimeError::new("expected a valid DD/MM/YYYY date"))
}

/// Format a date as "DD/MM/YYYY".
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a provider timestamp.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, TimeError> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| TimeError::new("expected DD/MM/YYYY HH:MM:SS or ISO 8601 timestamp"))
}

/// Elapsed time from `start` to `end` as "HH:MM".
///
/// The elapsed time is reduced modulo one day, so an `end` earlier than
/// `start` wraps around rather than going negative. Seconds are dropped.
///
/// # Examples
///
/// ```
/// use rail_client::domain::{format_duration, parse_timestamp};
///
/// let start = parse_timestamp("03/01/2026 23:30:00").unwrap();
/// let end = parse_timestamp("04/01/2026 00:15:00").unwrap();
/// assert_eq!(format_duration(start, end), "00:45");
/// ```
pub fn format_duration(start: NaiveDateTime, end: NaiveDateTime) -> String {
    let secs = end
        .signed_duration_since(start)
        .num_seconds()
        .rem_euclid(SECONDS_PER_DAY);
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    format!("{hours:02}:{minutes:02}")
}

/// Whole minutes from `earlier` to `later`, rounded towards negative infinity.
pub fn minutes_between(later: NaiveDateTime, earlier: NaiveDateTime) -> i64 {
    later
        .signed_duration_since(earlier)
        .num_seconds()
        .div_euclid(60)
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
