use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. It doubles as the migration ledger.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Run `sql` once, inside a transaction, and mark it as applied.
fn apply(conn: &Connection, version: &str, description: &str, sql: &str) -> Result<()> {
    if is_applied(conn, version)? {
        return Ok(());
    }

    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, description],
    )?;
    tx.commit()?;

    success(format!("Migration applied: {} → {}", version, description));
    Ok(())
}

const TIMECARD_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS timecards (
        id           INTEGER PRIMARY KEY AUTOINCREMENT,
        employee_id  TEXT NOT NULL,
        company_id   TEXT NOT NULL,
        week_start   TEXT NOT NULL,
        total_pay    REAL NOT NULL DEFAULT 0,
        version      INTEGER NOT NULL DEFAULT 0,
        created_at   TEXT NOT NULL,
        UNIQUE(employee_id, company_id, week_start)
    );

    CREATE TABLE IF NOT EXISTS days (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        timecard_id     INTEGER NOT NULL REFERENCES timecards(id) ON DELETE CASCADE,
        day_index       INTEGER NOT NULL CHECK(day_index BETWEEN 0 AND 6),
        date            TEXT NOT NULL,
        clock_in        TEXT,
        clock_out       TEXT,
        clock_in_status INTEGER NOT NULL DEFAULT 0,
        hours_worked    REAL NOT NULL DEFAULT 0,
        pay             REAL NOT NULL DEFAULT 0,
        UNIQUE(timecard_id, day_index)
    );

    CREATE TABLE IF NOT EXISTS breaks (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        day_id      INTEGER NOT NULL REFERENCES days(id) ON DELETE CASCADE,
        position    INTEGER NOT NULL,
        start_time  TEXT NOT NULL,
        end_time    TEXT
    );

    CREATE INDEX IF NOT EXISTS idx_timecards_owner ON timecards(employee_id, company_id, week_start);
    CREATE INDEX IF NOT EXISTS idx_breaks_day ON breaks(day_id, position);
"#;

const RATES_SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS rates (
        employee_id  TEXT NOT NULL,
        company_id   TEXT NOT NULL,
        hourly_rate  REAL NOT NULL CHECK(hourly_rate >= 0),
        updated_at   TEXT NOT NULL,
        PRIMARY KEY(employee_id, company_id)
    );
"#;

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    apply(
        conn,
        "20250301_0001_timecard_schema",
        "created timecards, days and breaks tables",
        TIMECARD_SCHEMA,
    )?;

    apply(
        conn,
        "20250315_0002_rates_table",
        "created rates table",
        RATES_SCHEMA,
    )?;

    Ok(())
}
