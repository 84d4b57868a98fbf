use crate::core::calendar::Calendar;
use crate::errors::AppResult;
use chrono::NaiveDate;

/// Parse a CLI date. Accepts anything `Calendar::canonical_key` does,
/// plus `today`.
pub fn parse_date(cal: &Calendar, today: NaiveDate, s: &str) -> AppResult<NaiveDate> {
    if s.trim().eq_ignore_ascii_case("today") {
        return Ok(today);
    }
    cal.canonical_key(s)
}
