//! Time argument parsing: wall-clock times on a given day or full instants.

use crate::core::calendar::Calendar;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

/// `HH:MM[:SS]` on `date` in the organization timezone, or an RFC 3339
/// instant.
pub fn parse_instant(cal: &Calendar, date: NaiveDate, s: &str) -> AppResult<DateTime<Utc>> {
    let s = s.trim();
    if let Some(t) = parse_time(s) {
        return cal.local_instant(date, t);
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTime(s.to_string()))
}

pub fn parse_optional_instant(
    cal: &Calendar,
    date: NaiveDate,
    input: Option<&String>,
) -> AppResult<Option<DateTime<Utc>>> {
    input.map(|s| parse_instant(cal, date, s)).transpose()
}
