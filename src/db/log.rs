use crate::db::queries::fmt_instant;
use crate::errors::AppResult;
use chrono::Utc;
use rusqlite::{Connection, params};

/// Append one audit row to `log`. `target` names what was touched, usually
/// a `WeekKey`.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![fmt_instant(Utc::now()), operation, target, message])?;

    Ok(())
}
