//! Administrative corrections and cleanup of abandoned shifts.

use crate::core::calendar::Calendar;
use crate::core::ledger;
use crate::errors::{AppError, AppResult};
use crate::models::{Day, Timecard};
use chrono::{DateTime, Days, NaiveDate, Utc};

/// Owner override of one day.
///
/// With `clear` the day goes back to `NotStarted` and any supplied times
/// are ignored. Otherwise a supplied time replaces the stored one and an
/// omitted time keeps it.
#[derive(Debug, Clone, Default)]
pub struct DayCorrection {
    pub clock_in: Option<DateTime<Utc>>,
    pub clock_out: Option<DateTime<Utc>>,
    pub clear: bool,
}

impl DayCorrection {
    pub fn clear() -> Self {
        Self {
            clear: true,
            ..Self::default()
        }
    }

    pub fn times(clock_in: Option<DateTime<Utc>>, clock_out: Option<DateTime<Utc>>) -> Self {
        Self {
            clock_in,
            clock_out,
            clear: false,
        }
    }
}

/// Apply a correction to `day`. The corrected day is never live: its
/// `clock_in_status` ends up false and a running break is closed at the
/// clock-out, or dropped when there is none.
///
/// A supplied clock-in must fall on `day.date`; a supplied clock-out on
/// `day.date` or the day after (overnight shift).
pub fn correct_day(cal: &Calendar, day: &mut Day, correction: &DayCorrection) -> AppResult<()> {
    if correction.clear {
        day.reset();
        return Ok(());
    }

    if let Some(at) = correction.clock_in
        && cal.date_of(at) != day.date
    {
        return Err(AppError::Validation(format!(
            "clock-in {} is not on {}",
            at.to_rfc3339(),
            day.date
        )));
    }
    if let Some(at) = correction.clock_out {
        let on = cal.date_of(at);
        if on != day.date && Some(on) != day.date.checked_add_days(Days::new(1)) {
            return Err(AppError::Validation(format!(
                "clock-out {} is not on {} or the morning after",
                at.to_rfc3339(),
                day.date
            )));
        }
    }

    let clock_in = correction.clock_in.or(day.clock_in);
    let clock_out = correction.clock_out.or(day.clock_out);

    if clock_out.is_some() && clock_in.is_none() {
        return Err(AppError::Validation(format!(
            "cannot set a clock-out on {} without a clock-in",
            day.date
        )));
    }

    day.clock_in = clock_in;
    day.clock_out = clock_out;
    day.clock_in_status = false;

    match clock_out {
        Some(out) => {
            ledger::close_open_break(day, out);
        }
        None => day.breaks.retain(|b| !b.is_open()),
    }

    Ok(())
}

/// Clear every day before `as_of` that was clocked in and never clocked
/// out. Returns the dates that were cleared.
pub fn clear_stale_sessions(timecard: &mut Timecard, as_of: NaiveDate) -> Vec<NaiveDate> {
    timecard
        .days
        .iter_mut()
        .filter(|d| d.is_stale(as_of))
        .map(|d| {
            d.reset();
            d.date
        })
        .collect()
}
