use super::day::Day;
use crate::core::calendar::Calendar;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Natural key of a timecard: one per employee, company and week.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekKey {
    pub employee_id: String,
    pub company_id: String,
    pub week_start: NaiveDate,
}

impl WeekKey {
    /// Builds the key of the week containing `date`.
    pub fn containing(employee_id: &str, company_id: &str, date: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            company_id: company_id.to_string(),
            week_start: Calendar::week_start_for(date),
        }
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{} week {}",
            self.employee_id, self.company_id, self.week_start
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timecard {
    pub employee_id: String,
    pub company_id: String,
    pub week_start: NaiveDate, // Monday, organization timezone
    pub days: Vec<Day>,        // always 7 entries, Monday..Sunday
    pub total_pay: f64,

    /// Optimistic concurrency token. Bumped by every successful save.
    #[serde(default)]
    pub version: u64,
}

impl Timecard {
    /// Fresh week with seven `NotStarted` days.
    pub fn new(key: &WeekKey) -> Self {
        let monday = Calendar::week_start_for(key.week_start);
        Self {
            employee_id: key.employee_id.clone(),
            company_id: key.company_id.clone(),
            week_start: monday,
            days: Calendar::days_of_week(monday)
                .into_iter()
                .map(Day::empty)
                .collect(),
            total_pay: 0.0,
            version: 0,
        }
    }

    pub fn key(&self) -> WeekKey {
        WeekKey {
            employee_id: self.employee_id.clone(),
            company_id: self.company_id.clone(),
            week_start: self.week_start,
        }
    }

    pub fn day(&self, date: NaiveDate) -> Option<&Day> {
        self.days.iter().find(|d| d.date == date)
    }

    pub fn day_mut(&mut self, date: NaiveDate) -> Option<&mut Day> {
        self.days.iter_mut().find(|d| d.date == date)
    }

    /// Seven contiguous days starting on `week_start`.
    pub fn has_valid_days(&self) -> bool {
        let expected = Calendar::days_of_week(self.week_start);
        self.days.len() == expected.len()
            && self.days.iter().zip(expected.iter()).all(|(d, e)| d.date == *e)
    }
}
