//! In-process store with the same conditional-write semantics as SQLite.

use super::TimecardStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Timecard, WeekKey};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
pub struct MemoryStore {
    weeks: Mutex<HashMap<WeekKey, Timecard>>,
    log: Mutex<Vec<(String, String, String)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn weeks(&self) -> MutexGuard<'_, HashMap<WeekKey, Timecard>> {
        self.weeks.lock().unwrap_or_else(|p| p.into_inner())
    }

    pub fn len(&self) -> usize {
        self.weeks().len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks().is_empty()
    }

    /// Audit rows as (operation, target, message).
    pub fn audit_log(&self) -> Vec<(String, String, String)> {
        self.log.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }
}

impl TimecardStore for MemoryStore {
    fn find_or_create(&self, key: &WeekKey) -> AppResult<Timecard> {
        let mut weeks = self.weeks();
        let tc = weeks.entry(key.clone()).or_insert_with(|| Timecard::new(key));
        Ok(tc.clone())
    }

    fn find(&self, key: &WeekKey) -> AppResult<Option<Timecard>> {
        Ok(self.weeks().get(key).cloned())
    }

    fn save(&self, timecard: &mut Timecard) -> AppResult<()> {
        if !timecard.has_valid_days() {
            return Err(AppError::Corrupt(format!(
                "{} does not hold seven contiguous days",
                timecard.key()
            )));
        }

        let mut weeks = self.weeks();
        let stored = weeks.get_mut(&timecard.key()).ok_or(AppError::StaleWrite)?;
        if stored.version != timecard.version {
            return Err(AppError::StaleWrite);
        }

        timecard.version += 1;
        *stored = timecard.clone();
        Ok(())
    }

    fn delete(&self, key: &WeekKey) -> AppResult<bool> {
        Ok(self.weeks().remove(key).is_some())
    }

    fn list(
        &self,
        employee_id: &str,
        company_id: &str,
        since: Option<NaiveDate>,
    ) -> AppResult<Vec<Timecard>> {
        let mut out: Vec<Timecard> = self
            .weeks()
            .values()
            .filter(|tc| tc.employee_id == employee_id && tc.company_id == company_id)
            .filter(|tc| since.is_none_or(|s| tc.week_start >= s))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.week_start.cmp(&a.week_start));
        Ok(out)
    }

    fn record(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.log
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push((operation.into(), target.into(), message.into()));
        Ok(())
    }
}
