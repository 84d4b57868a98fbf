//! Hourly rate lookup. Rates belong to the employee/company records and
//! are only read here.

use crate::errors::{AppError, AppResult};

pub trait RateProvider: Send + Sync {
    fn hourly_rate(&self, employee_id: &str, company_id: &str) -> AppResult<f64>;
}

/// Same rate for everyone.
#[derive(Debug, Clone, Copy)]
pub struct FixedRate(pub f64);

impl RateProvider for FixedRate {
    fn hourly_rate(&self, _employee_id: &str, _company_id: &str) -> AppResult<f64> {
        validate_rate(self.0)
    }
}

pub fn validate_rate(rate: f64) -> AppResult<f64> {
    if rate.is_finite() && rate >= 0.0 {
        Ok(rate)
    } else {
        Err(AppError::Validation(format!("invalid hourly rate: {}", rate)))
    }
}
