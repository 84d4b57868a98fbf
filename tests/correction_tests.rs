mod common;
use common::{COMP, EMP, assert_close, date, local, memory_engine};
use rtimecard::core::DayCorrection;
use rtimecard::errors::{AppError, ErrorKind};
use rtimecard::models::DayState;

#[test]
fn test_forgotten_clock_out_is_cleared_before_next_clock_in() {
    let (engine, store, clock) = memory_engine(local(2025, 3, 3, 9, 0), 20.0);

    engine.clock_in(EMP, COMP, None).unwrap();

    clock.set(local(2025, 3, 4, 9, 0));
    engine
        .clock_in(EMP, COMP, None)
        .expect("tuesday clock in is not blocked");

    let tc = engine.get_current_week(EMP, COMP).unwrap();
    let monday = tc.day(date(2025, 3, 3)).unwrap();
    assert_eq!(monday.clock_in, None);
    assert!(!monday.clock_in_status);
    assert_close(monday.hours_worked, 0.0);
    assert_eq!(monday.state(), DayState::NotStarted);

    let tuesday = tc.day(date(2025, 3, 4)).unwrap();
    assert_eq!(tuesday.clock_in, Some(local(2025, 3, 4, 9, 0)));

    assert!(
        store
            .audit_log()
            .iter()
            .any(|(op, _, msg)| op == "reconcile" && msg.contains("2025-03-03"))
    );
}

#[test]
fn test_stale_session_in_previous_week_is_cleared() {
    let (engine, _store, clock) = memory_engine(local(2025, 3, 7, 9, 0), 20.0);

    engine.clock_in(EMP, COMP, None).unwrap();
    engine
        .start_break(EMP, COMP, Some(local(2025, 3, 7, 12, 0)))
        .unwrap();

    clock.set(local(2025, 3, 11, 9, 0));
    let cleared = engine
        .reconcile_stale_sessions(EMP, COMP, date(2025, 3, 11))
        .unwrap();
    assert_eq!(cleared, vec![date(2025, 3, 7)]);

    let old = engine
        .find_week_containing(EMP, COMP, date(2025, 3, 7))
        .unwrap();
    let friday = old.day(date(2025, 3, 7)).unwrap();
    assert!(friday.breaks.is_empty());
    assert_eq!(friday.clock_in, None);
}

#[test]
fn test_reconcile_leaves_today_and_completed_days_alone() {
    let (engine, _store, clock) = memory_engine(local(2025, 3, 3, 9, 0), 20.0);

    engine.clock_in(EMP, COMP, None).unwrap();
    clock.set(local(2025, 3, 3, 17, 0));
    engine.clock_out(EMP, COMP, None).unwrap();

    clock.set(local(2025, 3, 4, 9, 0));
    engine.clock_in(EMP, COMP, None).unwrap();

    let cleared = engine
        .reconcile_stale_sessions(EMP, COMP, date(2025, 3, 4))
        .unwrap();
    assert!(cleared.is_empty());

    let tc = engine.get_current_week(EMP, COMP).unwrap();
    assert_close(tc.total_pay, 160.00);
    assert_eq!(tc.day(date(2025, 3, 4)).unwrap().state(), DayState::ClockedIn);
}

#[test]
fn test_reconcile_respects_lookback_window() {
    let (engine, _store, clock) = memory_engine(local(2025, 1, 6, 9, 0), 20.0);
    let engine = engine.with_lookback_days(7);

    engine.clock_in(EMP, COMP, None).unwrap();

    clock.set(local(2025, 3, 3, 9, 0));
    let cleared = engine
        .reconcile_stale_sessions(EMP, COMP, date(2025, 3, 3))
        .unwrap();
    assert!(cleared.is_empty());
}

#[test]
fn test_correct_day_clear_resets_day_and_total() {
    let (engine, _store, clock) = memory_engine(local(2025, 3, 3, 9, 0), 20.0);

    for d in [3, 4] {
        clock.set(local(2025, 3, d, 9, 0));
        engine.clock_in(EMP, COMP, None).unwrap();
        engine
            .start_break(EMP, COMP, Some(local(2025, 3, d, 12, 0)))
            .unwrap();
        engine
            .end_break(EMP, COMP, Some(local(2025, 3, d, 13, 0)))
            .unwrap();
        clock.set(local(2025, 3, d, 17, 0));
        engine.clock_out(EMP, COMP, None).unwrap();
    }
    assert_close(engine.get_current_week(EMP, COMP).unwrap().total_pay, 280.00);

    let r = engine
        .correct_day(EMP, COMP, "2025-03-03", &DayCorrection::clear())
        .unwrap();

    assert_eq!(r.day.clock_in, None);
    assert_eq!(r.day.clock_out, None);
    assert!(r.day.breaks.is_empty());
    assert_close(r.day.hours_worked, 0.0);
    assert_close(r.pay_for_day, 0.0);
    assert_close(r.week_total_pay, 140.00);
}

#[test]
fn test_correct_day_sets_times_and_recomputes() {
    let (engine, _store, _clock) = memory_engine(local(2025, 3, 6, 9, 0), 20.0);

    let r = engine
        .correct_day(
            EMP,
            COMP,
            date(2025, 3, 4),
            &DayCorrection::times(Some(local(2025, 3, 4, 8, 0)), Some(local(2025, 3, 4, 12, 30))),
        )
        .unwrap();

    assert_close(r.day.hours_worked, 4.5);
    assert_close(r.pay_for_day, 90.00);
    assert_close(r.week_total_pay, 90.00);
    assert!(!r.day.clock_in_status);
}

#[test]
fn test_correct_day_keeps_omitted_time_and_ends_live_shift() {
    let (engine, _store, clock) = memory_engine(local(2025, 3, 3, 9, 0), 20.0);

    engine.clock_in(EMP, COMP, None).unwrap();
    clock.set(local(2025, 3, 3, 12, 0));
    engine.start_break(EMP, COMP, None).unwrap();

    let r = engine
        .correct_day(
            EMP,
            COMP,
            date(2025, 3, 3),
            &DayCorrection::times(None, Some(local(2025, 3, 3, 15, 0))),
        )
        .unwrap();

    assert_eq!(r.day.clock_in, Some(local(2025, 3, 3, 9, 0)));
    assert!(!r.day.clock_in_status);
    // the running break ends at the corrected clock-out
    assert_eq!(r.day.breaks[0].end_time, Some(local(2025, 3, 3, 15, 0)));
    assert_close(r.day.hours_worked, 3.0);

    let err = engine.start_break(EMP, COMP, None).unwrap_err();
    assert!(matches!(err, AppError::NotClockedIn));
}

#[test]
fn test_correct_day_rejects_clock_out_without_clock_in() {
    let (engine, _store, _clock) = memory_engine(local(2025, 3, 3, 9, 0), 20.0);

    let err = engine
        .correct_day(
            EMP,
            COMP,
            date(2025, 3, 3),
            &DayCorrection::times(None, Some(local(2025, 3, 3, 17, 0))),
        )
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_correct_day_rejects_garbage_date() {
    let (engine, _store, _clock) = memory_engine(local(2025, 3, 3, 9, 0), 20.0);

    let err = engine
        .correct_day(EMP, COMP, "03/04/2025", &DayCorrection::clear())
        .unwrap_err();
    assert_eq!(err.code(), "invalid_date");
}

#[test]
fn test_corrected_clock_out_blocks_new_clock_in() {
    let (engine, _store, _clock) = memory_engine(local(2025, 3, 3, 9, 0), 20.0);

    engine
        .correct_day(
            EMP,
            COMP,
            date(2025, 3, 3),
            &DayCorrection::times(Some(local(2025, 3, 3, 7, 0)), Some(local(2025, 3, 3, 8, 0))),
        )
        .unwrap();

    let err = engine.clock_in(EMP, COMP, None).unwrap_err();
    assert!(err.is_conflict());
}

#[test]
fn test_find_and_delete_week_by_any_date_of_it() {
    let (engine, store, _clock) = memory_engine(local(2025, 3, 5, 9, 0), 20.0);

    engine.clock_in(EMP, COMP, None).unwrap();

    let by_sunday = engine
        .find_week_containing(EMP, COMP, "2025-03-09")
        .unwrap();
    assert_eq!(by_sunday.week_start, date(2025, 3, 3));

    let err = engine
        .find_week_containing(EMP, COMP, "2025-03-10")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(store.len(), 1);

    let key = engine.delete_week(EMP, COMP, "2025-03-04").unwrap();
    assert_eq!(key.week_start, date(2025, 3, 3));
    assert!(store.is_empty());

    let err = engine.delete_week(EMP, COMP, date(2025, 3, 3)).unwrap_err();
    assert!(matches!(err, AppError::TimecardNotFound { .. }));
}

#[test]
fn test_list_weeks_newest_first() {
    let (engine, _store, clock) = memory_engine(local(2025, 2, 17, 9, 0), 20.0);

    for (m, d) in [(2, 17), (3, 3), (2, 24)] {
        clock.set(local(2025, m, d, 10, 0));
        engine.get_current_week(EMP, COMP).unwrap();
    }

    let weeks: Vec<_> = engine
        .list_weeks(EMP, COMP)
        .unwrap()
        .into_iter()
        .map(|tc| tc.week_start)
        .collect();
    assert_eq!(
        weeks,
        [date(2025, 3, 3), date(2025, 2, 24), date(2025, 2, 17)]
    );
}

#[test]
fn test_clock_out_before_clock_in_yields_zero_not_negative() {
    let (engine, _store, _clock) = memory_engine(local(2025, 3, 5, 9, 0), 20.0);

    engine
        .correct_day(
            EMP,
            COMP,
            date(2025, 3, 3),
            &DayCorrection::times(Some(local(2025, 3, 3, 9, 0)), Some(local(2025, 3, 3, 13, 0))),
        )
        .unwrap();

    let r = engine
        .correct_day(
            EMP,
            COMP,
            date(2025, 3, 4),
            &DayCorrection::times(Some(local(2025, 3, 4, 17, 0)), Some(local(2025, 3, 4, 9, 0))),
        )
        .unwrap();

    assert_close(r.day.hours_worked, 0.0);
    assert_close(r.pay_for_day, 0.0);
    assert_close(r.week_total_pay, 80.00);
}

#[test]
fn test_breaks_longer_than_shift_yield_zero() {
    let (engine, _store, clock) = memory_engine(local(2025, 3, 3, 9, 0), 20.0);

    engine.clock_in(EMP, COMP, None).unwrap();
    engine
        .start_break(EMP, COMP, Some(local(2025, 3, 3, 9, 30)))
        .unwrap();
    engine
        .end_break(EMP, COMP, Some(local(2025, 3, 3, 13, 0)))
        .unwrap();
    clock.set(local(2025, 3, 3, 17, 0));
    engine.clock_out(EMP, COMP, None).unwrap();

    // one hour on the clock, three and a half on break
    let r = engine
        .correct_day(
            EMP,
            COMP,
            date(2025, 3, 3),
            &DayCorrection::times(None, Some(local(2025, 3, 3, 10, 0))),
        )
        .unwrap();

    assert_eq!(r.day.breaks.len(), 1);
    assert_close(r.day.hours_worked, 0.0);
    assert_close(r.pay_for_day, 0.0);
    assert_close(r.week_total_pay, 0.0);
}

#[test]
fn test_correction_times_must_fall_on_the_corrected_day() {
    let (engine, _store, _clock) = memory_engine(local(2025, 3, 3, 9, 0), 20.0);

    let err = engine
        .correct_day(
            EMP,
            COMP,
            date(2025, 3, 3),
            &DayCorrection::times(Some(local(2025, 3, 10, 9, 0)), None),
        )
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = engine
        .correct_day(
            EMP,
            COMP,
            date(2025, 3, 3),
            &DayCorrection::times(Some(local(2025, 3, 3, 9, 0)), Some(local(2025, 3, 5, 1, 0))),
        )
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let tc = engine.get_current_week(EMP, COMP).unwrap();
    assert!(tc.days.iter().all(|d| d.clock_in.is_none()));
}

#[test]
fn test_overnight_correction_may_end_next_morning() {
    let (engine, _store, _clock) = memory_engine(local(2025, 3, 5, 9, 0), 20.0);

    let r = engine
        .correct_day(
            EMP,
            COMP,
            date(2025, 3, 3),
            &DayCorrection::times(Some(local(2025, 3, 3, 22, 0)), Some(local(2025, 3, 4, 2, 0))),
        )
        .unwrap();

    assert_close(r.day.hours_worked, 4.0);
    assert_close(r.pay_for_day, 80.00);
}
