pub mod brk;
pub mod clock;
pub mod config;
pub mod correct;
pub mod del;
pub mod export;
pub mod init;
pub mod log;
pub mod rate;
pub mod status;
pub mod week;

use crate::config::Config;
use crate::core::{SystemClock, TimecardEngine};
use crate::db::{SqliteRates, SqliteStore};
use crate::errors::AppResult;
use crate::models::Timecard;
use crate::ui::messages::header;
use crate::utils::formatting::{local_hm, pad_left, pad_right};
use crate::utils::{format_money, hours2readable};
use std::sync::Arc;

pub type Engine = TimecardEngine<SqliteStore, SqliteRates>;

/// Engine over the configured database, timezone and wall clock.
pub fn open_engine(cfg: &Config) -> AppResult<Engine> {
    let store = SqliteStore::open(&cfg.database)?;
    let rates = SqliteRates::open(&cfg.database, cfg.default_hourly_rate)?;

    Ok(
        TimecardEngine::new(store, rates, Arc::new(SystemClock), cfg.calendar()?)
            .with_lookback_days(cfg.lookback_days),
    )
}

/// One line per day plus the weekly total.
pub(crate) fn print_timecard(engine: &Engine, tc: &Timecard) {
    let cal = engine.calendar();

    header(format!(
        "{} @ {} | week of {}",
        tc.employee_id, tc.company_id, tc.week_start
    ));

    println!(
        "{} {} {} {} {} {} {}",
        pad_right("DATE", 10),
        pad_right("DAY", 3),
        pad_right("IN", 5),
        pad_right("OUT", 5),
        pad_left("BRK", 3),
        pad_left("WORKED", 8),
        pad_left("PAY", 10),
    );

    for day in &tc.days {
        println!(
            "{} {} {} {} {} {} {}",
            day.date.format("%Y-%m-%d"),
            day.date.format("%a"),
            local_hm(cal, day.clock_in),
            local_hm(cal, day.clock_out),
            pad_left(&day.breaks.len().to_string(), 3),
            pad_left(&hours2readable(day.hours_worked), 8),
            pad_left(&format_money(day.pay), 10),
        );
    }

    let hours: f64 = tc.days.iter().map(|d| d.hours_worked).sum();
    println!();
    println!(
        "{} {} {}",
        pad_right("TOTAL", 32),
        pad_left(&hours2readable(hours), 8),
        pad_left(&format_money(tc.total_pay), 10),
    );
}
