use crate::core::calendar::Calendar;
use crate::errors::{AppError, AppResult};
use crate::models::{Break, Day, Timecard, WeekKey};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn fmt_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Instants are stored as RFC 3339 UTC text with full precision.
pub fn fmt_instant(i: DateTime<Utc>) -> String {
    i.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

fn date_col(row: &Row, col: usize) -> Result<NaiveDate> {
    let s: String = row.get(col)?;
    NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| conversion_error(col, AppError::InvalidDate(s)))
}

fn instant_col(row: &Row, col: usize) -> Result<Option<DateTime<Utc>>> {
    let s: Option<String> = row.get(col)?;
    match s {
        None => Ok(None),
        Some(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|_| conversion_error(col, AppError::InvalidTime(s))),
    }
}

fn timecard_id(conn: &Connection, key: &WeekKey) -> Result<Option<i64>> {
    conn.query_row(
        "SELECT id FROM timecards
         WHERE employee_id = ?1 AND company_id = ?2 AND week_start = ?3",
        params![key.employee_id, key.company_id, fmt_date(key.week_start)],
        |row| row.get(0),
    )
    .optional()
}

fn load_breaks(conn: &Connection, day_id: i64) -> Result<Vec<Break>> {
    let mut stmt = conn.prepare_cached(
        "SELECT start_time, end_time FROM breaks
         WHERE day_id = ?1
         ORDER BY position ASC",
    )?;

    let rows = stmt.query_map([day_id], |row| {
        let start_time = instant_col(row, 0)?
            .ok_or_else(|| conversion_error(0, AppError::InvalidTime("NULL".into())))?;
        Ok(Break {
            start_time,
            end_time: instant_col(row, 1)?,
        })
    })?;

    rows.collect()
}

fn load_days(conn: &Connection, timecard_id: i64) -> Result<Vec<Day>> {
    let rows: Vec<(i64, Day)> = {
        let mut stmt = conn.prepare_cached(
            "SELECT id, date, clock_in, clock_out, clock_in_status, hours_worked, pay
             FROM days
             WHERE timecard_id = ?1
             ORDER BY day_index ASC",
        )?;

        stmt.query_map([timecard_id], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                Day {
                    date: date_col(row, 1)?,
                    clock_in: instant_col(row, 2)?,
                    clock_out: instant_col(row, 3)?,
                    clock_in_status: row.get(4)?,
                    breaks: Vec::new(),
                    hours_worked: row.get(5)?,
                    pay: row.get(6)?,
                },
            ))
        })?
        .collect::<Result<_>>()?
    };

    let mut days = Vec::with_capacity(rows.len());
    for (day_id, mut day) in rows {
        day.breaks = load_breaks(conn, day_id)?;
        days.push(day);
    }
    Ok(days)
}

pub fn load_timecard(conn: &Connection, key: &WeekKey) -> AppResult<Option<Timecard>> {
    let head: Option<(i64, f64, i64)> = conn
        .query_row(
            "SELECT id, total_pay, version FROM timecards
             WHERE employee_id = ?1 AND company_id = ?2 AND week_start = ?3",
            params![key.employee_id, key.company_id, fmt_date(key.week_start)],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .optional()?;

    let Some((id, total_pay, version)) = head else {
        return Ok(None);
    };

    let tc = Timecard {
        employee_id: key.employee_id.clone(),
        company_id: key.company_id.clone(),
        week_start: key.week_start,
        days: load_days(conn, id)?,
        total_pay,
        version: version as u64,
    };

    if !tc.has_valid_days() {
        return Err(AppError::Corrupt(format!(
            "{} does not hold seven contiguous days",
            key
        )));
    }

    Ok(Some(tc))
}

/// Insert the week and its seven empty days unless it already exists.
/// Returns whether a row was created.
pub fn insert_week_if_absent(conn: &Connection, key: &WeekKey) -> AppResult<bool> {
    let inserted = conn.execute(
        "INSERT OR IGNORE INTO timecards (employee_id, company_id, week_start, total_pay, version, created_at)
         VALUES (?1, ?2, ?3, 0, 0, ?4)",
        params![
            key.employee_id,
            key.company_id,
            fmt_date(key.week_start),
            fmt_instant(Utc::now()),
        ],
    )?;

    if inserted == 0 {
        return Ok(false);
    }

    let id = conn.last_insert_rowid();
    let mut stmt = conn.prepare_cached(
        "INSERT INTO days (timecard_id, day_index, date, clock_in_status, hours_worked, pay)
         VALUES (?1, ?2, ?3, 0, 0, 0)",
    )?;
    for (i, date) in Calendar::days_of_week(key.week_start).iter().enumerate() {
        stmt.execute(params![id, i as i64, fmt_date(*date)])?;
    }

    Ok(true)
}

/// Write the whole week if, and only if, the stored version still equals
/// `tc.version`. Returns false when the precondition failed.
pub fn update_timecard_if_current(conn: &Connection, tc: &Timecard) -> AppResult<bool> {
    let updated = conn.execute(
        "UPDATE timecards
         SET total_pay = ?1, version = version + 1
         WHERE employee_id = ?2 AND company_id = ?3 AND week_start = ?4 AND version = ?5",
        params![
            tc.total_pay,
            tc.employee_id,
            tc.company_id,
            fmt_date(tc.week_start),
            tc.version as i64,
        ],
    )?;

    if updated == 0 {
        return Ok(false);
    }

    let id = timecard_id(conn, &tc.key())?
        .ok_or_else(|| AppError::Other(format!("timecard {} vanished mid-update", tc.key())))?;

    for (i, day) in tc.days.iter().enumerate() {
        conn.execute(
            "UPDATE days
             SET clock_in = ?1, clock_out = ?2, clock_in_status = ?3,
                 hours_worked = ?4, pay = ?5
             WHERE timecard_id = ?6 AND day_index = ?7",
            params![
                day.clock_in.map(fmt_instant),
                day.clock_out.map(fmt_instant),
                day.clock_in_status,
                day.hours_worked,
                day.pay,
                id,
                i as i64,
            ],
        )?;

        let day_id: i64 = conn.query_row(
            "SELECT id FROM days WHERE timecard_id = ?1 AND day_index = ?2",
            params![id, i as i64],
            |row| row.get(0),
        )?;

        conn.execute("DELETE FROM breaks WHERE day_id = ?1", [day_id])?;

        let mut stmt = conn.prepare_cached(
            "INSERT INTO breaks (day_id, position, start_time, end_time)
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        for (pos, b) in day.breaks.iter().enumerate() {
            stmt.execute(params![
                day_id,
                pos as i64,
                fmt_instant(b.start_time),
                b.end_time.map(fmt_instant),
            ])?;
        }
    }

    Ok(true)
}

pub fn delete_timecard(conn: &Connection, key: &WeekKey) -> AppResult<bool> {
    let Some(id) = timecard_id(conn, key)? else {
        return Ok(false);
    };

    conn.execute(
        "DELETE FROM breaks WHERE day_id IN (SELECT id FROM days WHERE timecard_id = ?1)",
        [id],
    )?;
    conn.execute("DELETE FROM days WHERE timecard_id = ?1", [id])?;
    let removed = conn.execute("DELETE FROM timecards WHERE id = ?1", [id])?;

    Ok(removed > 0)
}

/// Week starts for one employee at one company, newest first.
pub fn list_week_starts(
    conn: &Connection,
    employee_id: &str,
    company_id: &str,
    since: Option<NaiveDate>,
) -> AppResult<Vec<NaiveDate>> {
    let since = since.map(fmt_date).unwrap_or_default();

    let mut stmt = conn.prepare(
        "SELECT week_start FROM timecards
         WHERE employee_id = ?1 AND company_id = ?2 AND week_start >= ?3
         ORDER BY week_start DESC",
    )?;

    let rows = stmt.query_map(params![employee_id, company_id, since], |row| date_col(row, 0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
