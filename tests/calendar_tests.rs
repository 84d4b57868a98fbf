mod common;
use chrono::{DateTime, NaiveTime, Utc};
use common::date;
use rtimecard::core::{Calendar, FixedClock};
use rtimecard::errors::ErrorKind;

#[test]
fn test_week_start_is_monday_on_or_before() {
    assert_eq!(Calendar::week_start_for(date(2025, 3, 3)), date(2025, 3, 3));
    assert_eq!(Calendar::week_start_for(date(2025, 3, 9)), date(2025, 3, 3));
    assert_eq!(Calendar::week_start_for(date(2025, 3, 10)), date(2025, 3, 10));
    // across a year boundary
    assert_eq!(Calendar::week_start_for(date(2025, 1, 1)), date(2024, 12, 30));
}

#[test]
fn test_days_of_week_runs_monday_to_sunday() {
    let days = Calendar::days_of_week(date(2024, 2, 26));
    assert_eq!(days[0], date(2024, 2, 26));
    assert_eq!(days[3], date(2024, 2, 29));
    assert_eq!(days[6], date(2024, 3, 3));
}

#[test]
fn test_date_only_and_utc_midnight_share_a_key() {
    let cal = Calendar::default();
    let midnight: DateTime<Utc> = "2025-03-09T00:00:00Z".parse().unwrap();

    let a = cal.canonical_key("2025-03-09").unwrap();
    let b = cal.canonical_key(midnight).unwrap();
    let c = cal.canonical_key("2025-03-09T00:00:00.000Z").unwrap();

    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(a, date(2025, 3, 9));
}

#[test]
fn test_local_midnight_instant_names_the_local_day() {
    let cal = Calendar::default();
    let local_midnight = cal
        .local_instant(date(2025, 11, 3), NaiveTime::from_hms_opt(0, 0, 0).unwrap())
        .unwrap();

    assert_eq!(cal.canonical_key(local_midnight).unwrap(), date(2025, 11, 3));
    assert_eq!(
        cal.canonical_key("2025-11-03T00:00:00-06:00").unwrap(),
        date(2025, 11, 3)
    );
}

#[test]
fn test_late_evening_instant_stays_on_local_day() {
    let cal = Calendar::default();
    // 23:30 in Chicago is already the next day in UTC
    let at: DateTime<Utc> = "2025-07-15T04:30:00Z".parse().unwrap();

    assert_eq!(cal.date_of(at), date(2025, 7, 14));
    assert_eq!(cal.canonical_key(at).unwrap(), date(2025, 7, 14));
}

#[test]
fn test_naive_iso_datetime_uses_its_date_part() {
    let cal = Calendar::default();
    assert_eq!(
        cal.canonical_key("2025-03-09T23:15:00").unwrap(),
        date(2025, 3, 9)
    );
}

#[test]
fn test_garbage_dates_are_rejected() {
    let cal = Calendar::default();
    for bad in ["", "tomorrow", "2025-13-01", "09/03/2025"] {
        let err = cal.canonical_key(bad).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation, "{bad}");
    }
}

#[test]
fn test_current_date_reads_injected_clock() {
    let cal = Calendar::from_name("Europe/Rome").unwrap();
    let clock = FixedClock::at("2025-06-30T22:30:00Z".parse().unwrap());

    assert_eq!(cal.current_date(&clock), date(2025, 7, 1));
}

#[test]
fn test_unknown_timezone_is_rejected() {
    let err = Calendar::from_name("Mars/Olympus").unwrap_err();
    assert_eq!(err.code(), "invalid_timezone");
}

#[test]
fn test_nonexistent_local_time_is_rejected() {
    let cal = Calendar::default();
    // clocks jump from 02:00 to 03:00
    let err = cal
        .local_instant(date(2025, 3, 9), NaiveTime::from_hms_opt(2, 30, 0).unwrap())
        .unwrap_err();
    assert_eq!(err.code(), "invalid_time");
}
