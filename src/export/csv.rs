use crate::core::calendar::Calendar;
use crate::core::ledger::total_break_duration;
use crate::errors::{AppError, AppResult};
use crate::models::Timecard;
use crate::utils::formatting::format_money;
use chrono::{DateTime, SecondsFormat, Utc};
use csv::Writer;
use std::path::Path;

fn csv_err(e: csv::Error) -> AppError {
    AppError::Export(format!("CSV write failed: {}", e))
}

/// One row per day of the week.
pub(super) fn write_csv(path: &Path, cal: &Calendar, timecard: &Timecard) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(csv_err)?;

    wtr.write_record([
        "employee_id",
        "company_id",
        "date",
        "weekday",
        "clock_in",
        "clock_out",
        "breaks",
        "break_minutes",
        "hours_worked",
        "pay",
    ])
    .map_err(csv_err)?;

    for day in &timecard.days {
        let break_minutes = match day.clock_out {
            Some(out) => total_break_duration(day, out).num_minutes(),
            None => 0,
        };
        let local = |i: Option<DateTime<Utc>>| {
            i.map(|i| {
                i.with_timezone(&cal.timezone())
                    .to_rfc3339_opts(SecondsFormat::Secs, true)
            })
            .unwrap_or_default()
        };

        wtr.write_record(&[
            timecard.employee_id.clone(),
            timecard.company_id.clone(),
            day.date.format("%Y-%m-%d").to_string(),
            day.date.format("%a").to_string(),
            local(day.clock_in),
            local(day.clock_out),
            day.breaks.len().to_string(),
            break_minutes.to_string(),
            format!("{:.2}", day.hours_worked),
            format_money(day.pay),
        ])
        .map_err(csv_err)?;
    }

    wtr.write_record(&[
        timecard.employee_id.clone(),
        timecard.company_id.clone(),
        String::new(),
        "total".to_string(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format!(
            "{:.2}",
            timecard.days.iter().map(|d| d.hours_worked).sum::<f64>()
        ),
        format_money(timecard.total_pay),
    ])
    .map_err(csv_err)?;

    wtr.flush()?;
    Ok(())
}
