//! Calendar/week model in the organization timezone.
//!
//! This is the only place that decides which civil day an instant belongs
//! to and where a week begins. Everything that compares dates goes through
//! [`Calendar::canonical_key`] or [`Calendar::date_of`].

use crate::core::clock::Clock;
use crate::errors::{AppError, AppResult};
use chrono::{
    DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc,
};
use chrono_tz::Tz;

/// Default organization timezone.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Chicago;

/// The shapes a stored or incoming date can take.
#[derive(Debug, Clone, Copy)]
pub enum DateValue<'a> {
    Date(NaiveDate),
    Instant(DateTime<Utc>),
    Text(&'a str),
}

impl From<NaiveDate> for DateValue<'_> {
    fn from(d: NaiveDate) -> Self {
        DateValue::Date(d)
    }
}

impl From<DateTime<Utc>> for DateValue<'_> {
    fn from(i: DateTime<Utc>) -> Self {
        DateValue::Instant(i)
    }
}

impl<'a> From<&'a str> for DateValue<'a> {
    fn from(s: &'a str) -> Self {
        DateValue::Text(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    tz: Tz,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE)
    }
}

impl Calendar {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Parse an IANA zone name such as `America/Chicago`.
    pub fn from_name(name: &str) -> AppResult<Self> {
        name.trim()
            .parse::<Tz>()
            .map(Self::new)
            .map_err(|_| AppError::InvalidTimezone(name.to_string()))
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Today in the organization timezone.
    pub fn current_date(&self, clock: &dyn Clock) -> NaiveDate {
        self.date_of(clock.now())
    }

    /// Civil day an event instant falls on.
    pub fn date_of(&self, at: DateTime<Utc>) -> NaiveDate {
        at.with_timezone(&self.tz).date_naive()
    }

    /// Monday on or before `date` (ISO weeks).
    pub fn week_start_for(date: NaiveDate) -> NaiveDate {
        date - Duration::days(date.weekday().num_days_from_monday() as i64)
    }

    pub fn days_of_week(monday: NaiveDate) -> [NaiveDate; 7] {
        std::array::from_fn(|i| monday + Duration::days(i as i64))
    }

    /// Normalize any stored representation of a date to the civil day it
    /// names.
    ///
    /// Instants are read as *stored date values*: an instant sitting exactly
    /// on UTC midnight is the legacy "date at UTC midnight" encoding and
    /// names its UTC date; any other instant (including organization-local
    /// midnight) names its date in the organization timezone. Text may be a
    /// bare `YYYY-MM-DD`, an RFC 3339 timestamp, or a zone-less ISO
    /// date-time.
    pub fn canonical_key<'a>(&self, value: impl Into<DateValue<'a>>) -> AppResult<NaiveDate> {
        match value.into() {
            DateValue::Date(d) => Ok(d),
            DateValue::Instant(i) => Ok(self.stored_instant_date(i)),
            DateValue::Text(s) => {
                let s = s.trim();
                if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                    return Ok(d);
                }
                if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                    return Ok(self.stored_instant_date(dt.with_timezone(&Utc)));
                }
                if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
                    return Ok(ndt.date());
                }
                Err(AppError::InvalidDate(s.to_string()))
            }
        }
    }

    fn stored_instant_date(&self, i: DateTime<Utc>) -> NaiveDate {
        if i.num_seconds_from_midnight() == 0 && i.nanosecond() == 0 {
            i.date_naive()
        } else {
            self.date_of(i)
        }
    }

    /// Instant of a wall-clock time on `date` in the organization timezone.
    /// Ambiguous times (DST fall-back) resolve to the earlier instant; times
    /// skipped by a DST jump are rejected.
    pub fn local_instant(&self, date: NaiveDate, time: NaiveTime) -> AppResult<DateTime<Utc>> {
        self.tz
            .from_local_datetime(&date.and_time(time))
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| {
                AppError::InvalidTime(format!(
                    "{} {} does not exist in {}",
                    date,
                    time.format("%H:%M"),
                    self.tz.name()
                ))
            })
    }
}
