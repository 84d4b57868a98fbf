//! Break ledger: append-only break intervals nested inside a clocked-in day.

use crate::errors::{AppError, AppResult};
use crate::models::{Break, Day};
use chrono::{DateTime, Duration, Utc};

pub fn start_break(day: &mut Day, at: DateTime<Utc>) -> AppResult<()> {
    if !day.clock_in_status {
        return Err(AppError::NotClockedIn);
    }
    if day.open_break().is_some() {
        return Err(AppError::BreakAlreadyActive);
    }
    if let Some(clock_in) = day.clock_in
        && at < clock_in
    {
        return Err(AppError::InvalidTime(format!(
            "break cannot start at {} before clock-in at {}",
            at.to_rfc3339(),
            clock_in.to_rfc3339()
        )));
    }

    day.breaks.push(Break::open(at));
    Ok(())
}

pub fn end_break(day: &mut Day, at: DateTime<Utc>) -> AppResult<()> {
    let open = day.open_break_mut().ok_or(AppError::NoActiveBreak)?;

    if at < open.start_time {
        return Err(AppError::InvalidTime(format!(
            "break cannot end at {} before it started at {}",
            at.to_rfc3339(),
            open.start_time.to_rfc3339()
        )));
    }

    open.end_time = Some(at);
    Ok(())
}

/// Close a running break at `at` (never earlier than its start).
/// Returns whether a break was closed.
pub fn close_open_break(day: &mut Day, at: DateTime<Utc>) -> bool {
    match day.open_break_mut() {
        Some(open) => {
            open.end_time = Some(at.max(open.start_time));
            true
        }
        None => false,
    }
}

/// Closed breaks plus the running one measured up to `now`.
pub fn total_break_duration(day: &Day, now: DateTime<Utc>) -> Duration {
    day.breaks
        .iter()
        .fold(Duration::zero(), |acc, b| acc + b.duration_until(now))
}
