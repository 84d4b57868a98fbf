//! SQLite-backed `TimecardStore`.
//!
//! Each call runs inside an IMMEDIATE transaction, so concurrent writers on
//! the same file are serialized by SQLite and `save` re-checks the version
//! under the write lock.

use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{Timecard, WeekKey};
use crate::store::TimecardStore;
use chrono::NaiveDate;
use rusqlite::TransactionBehavior;
use std::sync::{Mutex, MutexGuard};

pub struct SqliteStore {
    pool: Mutex<DbPool>,
}

impl SqliteStore {
    /// Open (or create) the database file and bring the schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self {
            pool: Mutex::new(pool),
        })
    }

    fn pool(&self) -> MutexGuard<'_, DbPool> {
        self.pool.lock().unwrap_or_else(|p| p.into_inner())
    }
}

impl TimecardStore for SqliteStore {
    fn find_or_create(&self, key: &WeekKey) -> AppResult<Timecard> {
        let mut pool = self.pool();
        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        queries::insert_week_if_absent(&tx, key)?;
        let tc = queries::load_timecard(&tx, key)?
            .ok_or_else(|| AppError::Other(format!("timecard {} missing after insert", key)))?;

        tx.commit()?;
        Ok(tc)
    }

    fn find(&self, key: &WeekKey) -> AppResult<Option<Timecard>> {
        let pool = self.pool();
        queries::load_timecard(&pool.conn, key)
    }

    fn save(&self, timecard: &mut Timecard) -> AppResult<()> {
        if !timecard.has_valid_days() {
            return Err(AppError::Corrupt(format!(
                "{} does not hold seven contiguous days",
                timecard.key()
            )));
        }

        let mut pool = self.pool();
        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        if !queries::update_timecard_if_current(&tx, timecard)? {
            // dropping tx rolls back
            return Err(AppError::StaleWrite);
        }

        tx.commit()?;
        timecard.version += 1;
        Ok(())
    }

    fn delete(&self, key: &WeekKey) -> AppResult<bool> {
        let mut pool = self.pool();
        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let removed = queries::delete_timecard(&tx, key)?;
        tx.commit()?;
        Ok(removed)
    }

    fn list(
        &self,
        employee_id: &str,
        company_id: &str,
        since: Option<NaiveDate>,
    ) -> AppResult<Vec<Timecard>> {
        let pool = self.pool();
        let starts = queries::list_week_starts(&pool.conn, employee_id, company_id, since)?;

        let mut out = Vec::with_capacity(starts.len());
        for week_start in starts {
            let key = WeekKey {
                employee_id: employee_id.to_string(),
                company_id: company_id.to_string(),
                week_start,
            };
            if let Some(tc) = queries::load_timecard(&pool.conn, &key)? {
                out.push(tc);
            }
        }
        Ok(out)
    }

    fn record(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        let pool = self.pool();
        ttlog(&pool.conn, operation, target, message)
    }
}
