//! Hourly rates kept in the `rates` table.

use crate::core::engine::require_ids;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::fmt_instant;
use crate::errors::AppResult;
use crate::rates::{RateProvider, validate_rate};
use chrono::Utc;
use rusqlite::{OptionalExtension, params};
use std::sync::{Mutex, MutexGuard};

pub struct SqliteRates {
    pool: Mutex<DbPool>,
    default_rate: f64,
}

impl SqliteRates {
    /// `default_rate` applies to employees without a stored rate.
    pub fn open(path: &str, default_rate: f64) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self {
            pool: Mutex::new(pool),
            default_rate: validate_rate(default_rate)?,
        })
    }

    fn pool(&self) -> MutexGuard<'_, DbPool> {
        self.pool.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Insert or replace the hourly rate of an employee at a company.
    pub fn set_rate(&self, employee_id: &str, company_id: &str, rate: f64) -> AppResult<()> {
        let (employee_id, company_id) = require_ids(employee_id, company_id)?;
        let rate = validate_rate(rate)?;
        let pool = self.pool();

        pool.conn.execute(
            "INSERT INTO rates (employee_id, company_id, hourly_rate, updated_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(employee_id, company_id)
             DO UPDATE SET hourly_rate = excluded.hourly_rate, updated_at = excluded.updated_at",
            params![employee_id, company_id, rate, fmt_instant(Utc::now())],
        )?;

        ttlog(
            &pool.conn,
            "rate",
            &format!("{}@{}", employee_id, company_id),
            &format!("hourly rate set to {:.2}", rate),
        )?;

        Ok(())
    }
}

impl RateProvider for SqliteRates {
    fn hourly_rate(&self, employee_id: &str, company_id: &str) -> AppResult<f64> {
        let pool = self.pool();
        let stored: Option<f64> = pool
            .conn
            .query_row(
                "SELECT hourly_rate FROM rates WHERE employee_id = ?1 AND company_id = ?2",
                params![employee_id, company_id],
                |row| row.get(0),
            )
            .optional()?;

        validate_rate(stored.unwrap_or(self.default_rate))
    }
}
