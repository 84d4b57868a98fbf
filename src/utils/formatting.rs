//! Formatting utilities used for CLI and export outputs.

use crate::core::calendar::Calendar;
use chrono::{DateTime, Utc};

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// 8.5 → "08h 30m"
pub fn hours2readable(hours: f64) -> String {
    let total = (hours * 60.0).round().max(0.0) as i64;
    format!("{:02}h {:02}m", total / 60, total % 60)
}

pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Wall-clock time in the organization timezone, `--:--` when missing.
pub fn local_hm(cal: &Calendar, at: Option<DateTime<Utc>>) -> String {
    match at {
        Some(i) => i.with_timezone(&cal.timezone()).format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}
