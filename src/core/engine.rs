//! Timecard engine: the operations the outer API layer calls.
//!
//! Each operation is one read-modify-write against a single timecard:
//! load, apply a pure transition, recompute totals, conditionally save.
//! A concurrent writer makes the save fail with `StaleWrite` instead of
//! being overwritten; nothing is retried here.

use crate::core::aggregator;
use crate::core::calendar::{Calendar, DateValue};
use crate::core::clock::Clock;
use crate::core::ledger;
use crate::core::reconcile::{self, DayCorrection};
use crate::core::state;
use crate::errors::{AppError, AppResult};
use crate::models::{Day, DayState, Timecard, WeekKey};
use crate::rates::RateProvider;
use crate::store::TimecardStore;
use crate::ui::messages::warning;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Default stale-session lookback.
pub const DEFAULT_LOOKBACK_DAYS: i64 = 365;

/// Upper bound for the lookback window (about a century).
pub const MAX_LOOKBACK_DAYS: i64 = 36_500;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockInReceipt {
    pub date: NaiveDate,
    pub clock_in_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockOutReceipt {
    pub date: NaiveDate,
    pub clock_out_time: DateTime<Utc>,
    pub hours_worked: f64,
    pub pay_for_day: f64,
    pub week_total_pay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakReceipt {
    pub date: NaiveDate,
    pub at: DateTime<Utc>,
    /// Completed breaks for the day.
    pub break_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrectionReceipt {
    pub day: Day,
    pub pay_for_day: f64,
    pub week_total_pay: f64,
}

/// Live view of today, derived and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayStatus {
    pub date: NaiveDate,
    pub state: DayState,
    pub clock_in: Option<DateTime<Utc>>,
    pub clock_out: Option<DateTime<Utc>>,
    pub break_count: usize,
    pub on_break: bool,
    pub break_minutes: i64,
    pub hours_worked: f64,
}

pub struct TimecardEngine<S: TimecardStore, R: RateProvider> {
    store: S,
    rates: R,
    clock: Arc<dyn Clock>,
    calendar: Calendar,
    lookback_days: i64,
}

fn require_id(value: &str, what: &str) -> AppResult<String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::Validation(format!("{} is required", what)));
    }
    Ok(v.to_string())
}

/// Trimmed, non-empty employee and company ids.
pub(crate) fn require_ids(employee_id: &str, company_id: &str) -> AppResult<(String, String)> {
    Ok((
        require_id(employee_id, "employee id")?,
        require_id(company_id, "company id")?,
    ))
}

impl<S: TimecardStore, R: RateProvider> TimecardEngine<S, R> {
    pub fn new(store: S, rates: R, clock: Arc<dyn Clock>, calendar: Calendar) -> Self {
        Self {
            store,
            rates,
            clock,
            calendar,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }

    pub fn with_lookback_days(mut self, days: i64) -> Self {
        self.lookback_days = days.clamp(0, MAX_LOOKBACK_DAYS);
        self
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn today(&self) -> NaiveDate {
        self.calendar.current_date(self.clock.as_ref())
    }

    fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.store.record(operation, target, message) {
            warning(format!("Failed to write audit log: {}", e));
        }
    }

    fn current_week_key(&self, employee_id: &str, company_id: &str, at: DateTime<Utc>) -> (WeekKey, NaiveDate) {
        let date = self.calendar.date_of(at);
        (WeekKey::containing(employee_id, company_id, date), date)
    }

    // ------------------------------------------------
    // Clock in / out
    // ------------------------------------------------

    pub fn clock_in(
        &self,
        employee_id: &str,
        company_id: &str,
        at: Option<DateTime<Utc>>,
    ) -> AppResult<ClockInReceipt> {
        let (emp, comp) = require_ids(employee_id, company_id)?;
        let at = at.unwrap_or_else(|| self.clock.now());
        let (key, date) = self.current_week_key(&emp, &comp, at);

        self.reconcile_stale_sessions(&emp, &comp, date)?;

        let mut tc = self.store.find_or_create(&key)?;
        let day = tc.day_mut(date).ok_or(AppError::DayNotFound(date))?;
        state::clock_in(day, at)?;

        self.store.save(&mut tc)?;
        self.audit("clock_in", &key.to_string(), &format!("clocked in at {}", at.to_rfc3339()));

        Ok(ClockInReceipt {
            date,
            clock_in_time: at,
        })
    }

    pub fn clock_out(
        &self,
        employee_id: &str,
        company_id: &str,
        at: Option<DateTime<Utc>>,
    ) -> AppResult<ClockOutReceipt> {
        let (emp, comp) = require_ids(employee_id, company_id)?;
        let at = at.unwrap_or_else(|| self.clock.now());
        let (key, date) = self.current_week_key(&emp, &comp, at);

        self.reconcile_stale_sessions(&emp, &comp, date)?;

        // No timecard this week means nobody clocked in.
        let mut tc = self.store.find(&key)?.ok_or(AppError::NotClockedIn)?;
        let rate = self.rates.hourly_rate(&emp, &comp)?;

        let day = tc.day_mut(date).ok_or(AppError::DayNotFound(date))?;
        state::clock_out(day, at)?;

        aggregator::recompute(&mut tc, rate);
        let day = tc.day(date).ok_or(AppError::DayNotFound(date))?;
        let receipt = ClockOutReceipt {
            date,
            clock_out_time: at,
            hours_worked: day.hours_worked,
            pay_for_day: day.pay,
            week_total_pay: tc.total_pay,
        };

        self.store.save(&mut tc)?;
        self.audit(
            "clock_out",
            &key.to_string(),
            &format!(
                "clocked out at {} ({:.2}h, {:.2})",
                at.to_rfc3339(),
                receipt.hours_worked,
                receipt.pay_for_day
            ),
        );

        Ok(receipt)
    }

    // ------------------------------------------------
    // Breaks
    // ------------------------------------------------

    pub fn start_break(
        &self,
        employee_id: &str,
        company_id: &str,
        at: Option<DateTime<Utc>>,
    ) -> AppResult<BreakReceipt> {
        self.apply_break(employee_id, company_id, at, true)
    }

    pub fn end_break(
        &self,
        employee_id: &str,
        company_id: &str,
        at: Option<DateTime<Utc>>,
    ) -> AppResult<BreakReceipt> {
        self.apply_break(employee_id, company_id, at, false)
    }

    fn apply_break(
        &self,
        employee_id: &str,
        company_id: &str,
        at: Option<DateTime<Utc>>,
        starting: bool,
    ) -> AppResult<BreakReceipt> {
        let (emp, comp) = require_ids(employee_id, company_id)?;
        let at = at.unwrap_or_else(|| self.clock.now());
        let (key, date) = self.current_week_key(&emp, &comp, at);

        let missing = if starting {
            AppError::NotClockedIn
        } else {
            AppError::NoActiveBreak
        };
        let mut tc = self.store.find(&key)?.ok_or(missing)?;

        let day = tc.day_mut(date).ok_or(AppError::DayNotFound(date))?;
        if starting {
            ledger::start_break(day, at)?;
        } else {
            ledger::end_break(day, at)?;
        }
        let break_count = day.completed_breaks();

        self.store.save(&mut tc)?;
        self.audit(
            if starting { "break_start" } else { "break_end" },
            &key.to_string(),
            &format!("at {} ({} completed)", at.to_rfc3339(), break_count),
        );

        Ok(BreakReceipt {
            date,
            at,
            break_count,
        })
    }

    // ------------------------------------------------
    // Reads
    // ------------------------------------------------

    /// This week's timecard, created on first access.
    pub fn get_current_week(&self, employee_id: &str, company_id: &str) -> AppResult<Timecard> {
        let (emp, comp) = require_ids(employee_id, company_id)?;
        let key = WeekKey::containing(&emp, &comp, self.today());
        self.store.find_or_create(&key)
    }

    /// The week containing `date`. Never creates.
    pub fn find_week_containing<'a>(
        &self,
        employee_id: &str,
        company_id: &str,
        date: impl Into<DateValue<'a>>,
    ) -> AppResult<Timecard> {
        let (emp, comp) = require_ids(employee_id, company_id)?;
        let date = self.calendar.canonical_key(date)?;
        let key = WeekKey::containing(&emp, &comp, date);

        self.store.find(&key)?.ok_or(AppError::TimecardNotFound {
            employee_id: key.employee_id,
            company_id: key.company_id,
            week_start: key.week_start,
        })
    }

    /// All weeks, newest first.
    pub fn list_weeks(&self, employee_id: &str, company_id: &str) -> AppResult<Vec<Timecard>> {
        let (emp, comp) = require_ids(employee_id, company_id)?;
        self.store.list(&emp, &comp, None)
    }

    /// Today's state with break time measured up to now.
    pub fn day_status(&self, employee_id: &str, company_id: &str) -> AppResult<DayStatus> {
        let (emp, comp) = require_ids(employee_id, company_id)?;
        let now = self.clock.now();
        let (key, date) = self.current_week_key(&emp, &comp, now);

        let day = self
            .store
            .find(&key)?
            .and_then(|tc| tc.day(date).cloned())
            .unwrap_or_else(|| Day::empty(date));

        let measured_to = day.clock_out.unwrap_or(now);
        Ok(DayStatus {
            date,
            state: day.state(),
            clock_in: day.clock_in,
            clock_out: day.clock_out,
            break_count: day.completed_breaks(),
            on_break: day.state() == DayState::OnBreak,
            break_minutes: ledger::total_break_duration(&day, measured_to).num_minutes(),
            hours_worked: day.hours_worked,
        })
    }

    // ------------------------------------------------
    // Corrections
    // ------------------------------------------------

    pub fn correct_day<'a>(
        &self,
        employee_id: &str,
        company_id: &str,
        date: impl Into<DateValue<'a>>,
        correction: &DayCorrection,
    ) -> AppResult<CorrectionReceipt> {
        let (emp, comp) = require_ids(employee_id, company_id)?;
        let date = self.calendar.canonical_key(date)?;
        let key = WeekKey::containing(&emp, &comp, date);

        let mut tc = self.store.find_or_create(&key)?;
        let rate = self.rates.hourly_rate(&emp, &comp)?;

        let day = tc.day_mut(date).ok_or(AppError::DayNotFound(date))?;
        reconcile::correct_day(&self.calendar, day, correction)?;
        aggregator::recompute(&mut tc, rate);

        let day = tc.day(date).cloned().ok_or(AppError::DayNotFound(date))?;
        let receipt = CorrectionReceipt {
            pay_for_day: day.pay,
            week_total_pay: tc.total_pay,
            day,
        };

        self.store.save(&mut tc)?;
        self.audit(
            "correct",
            &key.to_string(),
            &if correction.clear {
                format!("cleared {}", date)
            } else {
                format!("corrected {} ({:.2}h)", date, receipt.day.hours_worked)
            },
        );

        Ok(receipt)
    }

    /// Remove the week containing `date`.
    pub fn delete_week<'a>(
        &self,
        employee_id: &str,
        company_id: &str,
        date: impl Into<DateValue<'a>>,
    ) -> AppResult<WeekKey> {
        let (emp, comp) = require_ids(employee_id, company_id)?;
        let date = self.calendar.canonical_key(date)?;
        let key = WeekKey::containing(&emp, &comp, date);

        if !self.store.delete(&key)? {
            return Err(AppError::TimecardNotFound {
                employee_id: key.employee_id,
                company_id: key.company_id,
                week_start: key.week_start,
            });
        }

        self.audit("delete", &key.to_string(), "timecard deleted");
        Ok(key)
    }

    /// Clear shifts left open on days before `as_of` within the lookback
    /// window. Returns the dates that were cleared.
    pub fn reconcile_stale_sessions(
        &self,
        employee_id: &str,
        company_id: &str,
        as_of: NaiveDate,
    ) -> AppResult<Vec<NaiveDate>> {
        let (emp, comp) = require_ids(employee_id, company_id)?;
        let since = Duration::try_days(self.lookback_days)
            .and_then(|window| as_of.checked_sub_signed(window))
            .map(Calendar::week_start_for)
            .unwrap_or(NaiveDate::MIN);

        let mut cleared = Vec::new();
        let mut rate = None;

        for mut tc in self.store.list(&emp, &comp, Some(since))? {
            let dates = reconcile::clear_stale_sessions(&mut tc, as_of);
            if dates.is_empty() {
                continue;
            }

            let r = match rate {
                Some(r) => r,
                None => *rate.insert(self.rates.hourly_rate(&emp, &comp)?),
            };
            aggregator::recompute(&mut tc, r);
            self.store.save(&mut tc)?;

            let list: Vec<String> = dates.iter().map(|d| d.to_string()).collect();
            self.audit(
                "reconcile",
                &tc.key().to_string(),
                &format!("cleared abandoned shift(s): {}", list.join(", ")),
            );
            cleared.extend(dates);
        }

        cleared.sort();
        Ok(cleared)
    }
}
