//! Unified application error type.
//! Engine, store, CLI and utils all return AppError so that every failure
//! carries a category and a stable code the caller can render.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

/// Coarse error category used by callers to decide how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed input.
    Validation,
    /// No timecard or day for the requested key.
    NotFound,
    /// A state-machine precondition did not hold. Recoverable: re-read and retry.
    Conflict,
    /// Persistence or environment failure.
    Internal,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Validation
    // ---------------------------
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    // ---------------------------
    // Not found
    // ---------------------------
    #[error("No timecard for employee '{employee_id}' at company '{company_id}' in week of {week_start}")]
    TimecardNotFound {
        employee_id: String,
        company_id: String,
        week_start: NaiveDate,
    },

    #[error("Day {0} is not part of the timecard")]
    DayNotFound(NaiveDate),

    // ---------------------------
    // Clock conflicts
    // ---------------------------
    #[error("Already clocked in today")]
    AlreadyClockedIn,

    #[error("Already clocked out today")]
    AlreadyClockedOut,

    #[error("Not clocked in")]
    NotClockedIn,

    #[error("A break is already in progress")]
    BreakAlreadyActive,

    #[error("No break in progress")]
    NoActiveBreak,

    #[error("Timecard was modified concurrently, reload and try again")]
    StaleWrite,

    // ---------------------------
    // Internal
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Corrupt timecard: {0}")]
    Corrupt(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_)
            | AppError::InvalidDate(_)
            | AppError::InvalidTime(_)
            | AppError::InvalidTimezone(_) => ErrorKind::Validation,

            AppError::TimecardNotFound { .. } | AppError::DayNotFound(_) => ErrorKind::NotFound,

            AppError::AlreadyClockedIn
            | AppError::AlreadyClockedOut
            | AppError::NotClockedIn
            | AppError::BreakAlreadyActive
            | AppError::NoActiveBreak
            | AppError::StaleWrite => ErrorKind::Conflict,

            AppError::Io(_)
            | AppError::Db(_)
            | AppError::Corrupt(_)
            | AppError::Config(_)
            | AppError::Export(_)
            | AppError::Other(_) => ErrorKind::Internal,
        }
    }

    /// Stable machine-readable code, one per case.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "invalid_input",
            AppError::InvalidDate(_) => "invalid_date",
            AppError::InvalidTime(_) => "invalid_time",
            AppError::InvalidTimezone(_) => "invalid_timezone",
            AppError::TimecardNotFound { .. } => "timecard_not_found",
            AppError::DayNotFound(_) => "day_not_found",
            AppError::AlreadyClockedIn => "already_clocked_in",
            AppError::AlreadyClockedOut => "already_clocked_out",
            AppError::NotClockedIn => "not_clocked_in",
            AppError::BreakAlreadyActive => "break_already_active",
            AppError::NoActiveBreak => "no_active_break",
            AppError::StaleWrite => "stale_write",
            AppError::Io(_) => "io",
            AppError::Db(_) => "database",
            AppError::Corrupt(_) => "corrupt_timecard",
            AppError::Config(_) => "config",
            AppError::Export(_) => "export",
            AppError::Other(_) => "internal",
        }
    }

    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::Conflict
    }
}

pub type AppResult<T> = Result<T, AppError>;
