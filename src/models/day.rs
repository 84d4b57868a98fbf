use super::breaks::Break;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a single day. `OnBreak` is a sub-state of clocked in,
/// derived from the break list rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayState {
    NotStarted,
    ClockedIn,
    OnBreak,
    ClockedOut,
}

impl DayState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayState::NotStarted => "not started",
            DayState::ClockedIn => "clocked in",
            DayState::OnBreak => "on break",
            DayState::ClockedOut => "clocked out",
        }
    }
}

impl fmt::Display for DayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,                  // ⇔ days.date (TEXT "YYYY-MM-DD")
    pub clock_in: Option<DateTime<Utc>>,  // ⇔ days.clock_in
    pub clock_out: Option<DateTime<Utc>>, // ⇔ days.clock_out
    pub clock_in_status: bool,            // on the clock right now
    pub breaks: Vec<Break>,
    pub hours_worked: f64,
    pub pay: f64,
}

impl Day {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            clock_in: None,
            clock_out: None,
            clock_in_status: false,
            breaks: Vec::new(),
            hours_worked: 0.0,
            pay: 0.0,
        }
    }

    pub fn state(&self) -> DayState {
        if self.clock_out.is_some() {
            DayState::ClockedOut
        } else if self.clock_in_status && self.open_break().is_some() {
            DayState::OnBreak
        } else if self.clock_in_status || self.clock_in.is_some() {
            DayState::ClockedIn
        } else {
            DayState::NotStarted
        }
    }

    pub fn open_break(&self) -> Option<&Break> {
        self.breaks.iter().find(|b| b.is_open())
    }

    pub fn open_break_mut(&mut self) -> Option<&mut Break> {
        self.breaks.iter_mut().find(|b| b.is_open())
    }

    pub fn completed_breaks(&self) -> usize {
        self.breaks.iter().filter(|b| !b.is_open()).count()
    }

    /// A shift opened on an earlier day that never got a clock-out.
    pub fn is_stale(&self, as_of: NaiveDate) -> bool {
        self.date < as_of && self.clock_in.is_some() && self.clock_out.is_none()
    }

    /// Back to `NotStarted`, dropping breaks and derived values.
    pub fn reset(&mut self) {
        self.clock_in = None;
        self.clock_out = None;
        self.clock_in_status = false;
        self.breaks.clear();
        self.hours_worked = 0.0;
        self.pay = 0.0;
    }
}
