//! Persistence contract for timecards.
//!
//! Stores never write blindly: `save` succeeds only while the stored
//! version still equals the one the caller loaded.

pub mod memory;

pub use memory::MemoryStore;

use crate::errors::AppResult;
use crate::models::{Timecard, WeekKey};
use chrono::NaiveDate;
use std::sync::Arc;

pub trait TimecardStore: Send + Sync {
    /// Load the week, creating it with seven empty days when absent.
    /// Concurrent callers observe the same single timecard.
    fn find_or_create(&self, key: &WeekKey) -> AppResult<Timecard>;

    fn find(&self, key: &WeekKey) -> AppResult<Option<Timecard>>;

    /// Conditional write. Fails with `StaleWrite` when another writer got
    /// there first (or the week was deleted). On success `timecard.version`
    /// is bumped to the stored value.
    fn save(&self, timecard: &mut Timecard) -> AppResult<()>;

    /// Returns whether a timecard was removed.
    fn delete(&self, key: &WeekKey) -> AppResult<bool>;

    /// Weeks of one employee at one company, newest first. With `since`,
    /// only weeks starting on or after that date.
    fn list(
        &self,
        employee_id: &str,
        company_id: &str,
        since: Option<NaiveDate>,
    ) -> AppResult<Vec<Timecard>>;

    /// Audit trail hook. Stores without an audit sink ignore it.
    fn record(&self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }
}

impl<T: TimecardStore + ?Sized> TimecardStore for Arc<T> {
    fn find_or_create(&self, key: &WeekKey) -> AppResult<Timecard> {
        (**self).find_or_create(key)
    }

    fn find(&self, key: &WeekKey) -> AppResult<Option<Timecard>> {
        (**self).find(key)
    }

    fn save(&self, timecard: &mut Timecard) -> AppResult<()> {
        (**self).save(timecard)
    }

    fn delete(&self, key: &WeekKey) -> AppResult<bool> {
        (**self).delete(key)
    }

    fn list(
        &self,
        employee_id: &str,
        company_id: &str,
        since: Option<NaiveDate>,
    ) -> AppResult<Vec<Timecard>> {
        (**self).list(employee_id, company_id, since)
    }

    fn record(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        (**self).record(operation, target, message)
    }
}
