//! Hours and pay. Totals are always rebuilt from the clock fields, never
//! patched incrementally.

use crate::core::ledger::total_break_duration;
use crate::models::{Day, Timecard};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Net hours between clock-in and clock-out minus breaks, never negative.
/// Zero while either end is missing.
pub fn hours_worked(day: &Day) -> f64 {
    let (Some(clock_in), Some(clock_out)) = (day.clock_in, day.clock_out) else {
        return 0.0;
    };

    let gross = clock_out - clock_in;
    let net = gross - total_break_duration(day, clock_out);

    let secs = net.num_milliseconds() as f64 / 1000.0;
    if secs <= 0.0 { 0.0 } else { secs / SECONDS_PER_HOUR }
}

/// Nudge applied in cent units so binary near-halves like 1.005 round up.
const HALF_CENT_TOLERANCE: f64 = 1e-7;

/// Round half away from zero to two decimals.
pub fn round_cents(amount: f64) -> f64 {
    let cents = amount * 100.0;
    let whole = (cents.abs() + HALF_CENT_TOLERANCE).round();
    whole.copysign(cents) / 100.0
}

pub fn pay(day: &Day, hourly_rate: f64) -> f64 {
    round_cents(hours_worked(day) * hourly_rate)
}

pub fn weekly_total_pay(timecard: &Timecard, hourly_rate: f64) -> f64 {
    round_cents(timecard.days.iter().map(|d| pay(d, hourly_rate)).sum())
}

pub fn recompute_day(day: &mut Day, hourly_rate: f64) {
    day.hours_worked = hours_worked(day);
    day.pay = pay(day, hourly_rate);
}

/// Refresh every day and the weekly total.
pub fn recompute(timecard: &mut Timecard, hourly_rate: f64) {
    for day in timecard.days.iter_mut() {
        recompute_day(day, hourly_rate);
    }
    timecard.total_pay = weekly_total_pay(timecard, hourly_rate);
}
