//! Per-day clock state machine:
//! `NotStarted → ClockedIn (⇄ OnBreak) → ClockedOut`.
//!
//! Pure transitions over a single [`Day`]; persistence and week lookup live
//! in the engine.

use crate::core::ledger;
use crate::errors::{AppError, AppResult};
use crate::models::Day;
use chrono::{DateTime, Utc};

/// A day may be clocked in at most once. A day that already carries a
/// clock-out (for instance from a correction) is terminal as well.
pub fn clock_in(day: &mut Day, at: DateTime<Utc>) -> AppResult<()> {
    if day.clock_in.is_some() {
        return Err(AppError::AlreadyClockedIn);
    }
    if day.clock_out.is_some() {
        return Err(AppError::AlreadyClockedOut);
    }

    day.clock_in = Some(at);
    day.clock_in_status = true;
    Ok(())
}

/// Sign-off. A running break ends at the clock-out instant.
pub fn clock_out(day: &mut Day, at: DateTime<Utc>) -> AppResult<()> {
    if day.clock_in.is_none() {
        return Err(AppError::NotClockedIn);
    }
    if day.clock_out.is_some() {
        return Err(AppError::AlreadyClockedOut);
    }

    ledger::close_open_break(day, at);
    day.clock_out = Some(at);
    day.clock_in_status = false;
    Ok(())
}
