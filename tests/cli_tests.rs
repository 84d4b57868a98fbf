use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, rti, setup_test_db};

const MON_IN: &str = "2025-03-03T14:00:00Z"; // 08:00 Chicago
const MON_BRK_START: &str = "2025-03-03T18:00:00Z";
const MON_BRK_END: &str = "2025-03-03T18:30:00Z";
const MON_OUT: &str = "2025-03-03T23:00:00Z"; // 17:00 Chicago

fn who(db_path: &str) -> Vec<&str> {
    vec!["--db", db_path, "-e", "alice", "-c", "acme"]
}

/// Rate 20.00, Monday 08:00-17:00 with a 30 minute break.
fn work_monday(db_path: &str) {
    rti()
        .args(who(db_path))
        .args(["rate", "--set", "20"])
        .assert()
        .success();

    rti()
        .args(who(db_path))
        .args(["in", "--at", MON_IN])
        .assert()
        .success()
        .stdout(contains("Clocked in on 2025-03-03 at 08:00"));

    rti()
        .args(who(db_path))
        .args(["break", "--start", "--at", MON_BRK_START])
        .assert()
        .success()
        .stdout(contains("Break started at 12:00"));

    rti()
        .args(who(db_path))
        .args(["break", "--end", "--at", MON_BRK_END])
        .assert()
        .success()
        .stdout(contains("1 completed"));

    rti()
        .args(who(db_path))
        .args(["out", "--at", MON_OUT])
        .assert()
        .success()
        .stdout(contains("08h 30m").and(contains("170.00")));
}

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rti()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_clock_day_and_show_week() {
    let db_path = setup_test_db("cli_clock_day");
    init_db(&db_path);
    work_monday(&db_path);

    rti()
        .args(who(&db_path))
        .args(["week", "--date", "2025-03-05"])
        .assert()
        .success()
        .stdout(
            contains("week of 2025-03-03")
                .and(contains("08:00"))
                .and(contains("17:00"))
                .and(contains("170.00")),
        );

    rti()
        .args(who(&db_path))
        .arg("weeks")
        .assert()
        .success()
        .stdout(contains("2025-03-03").and(contains("170.00")));
}

#[test]
fn test_double_clock_in_reports_stable_code() {
    let db_path = setup_test_db("cli_double_in");
    init_db(&db_path);

    rti()
        .args(who(&db_path))
        .args(["in", "--at", MON_IN])
        .assert()
        .success();

    rti()
        .args(who(&db_path))
        .args(["in", "--at", "2025-03-03T15:00:00Z"])
        .assert()
        .failure()
        .stderr(contains("already_clocked_in"));
}

#[test]
fn test_break_without_clock_in_fails() {
    let db_path = setup_test_db("cli_break_no_in");
    init_db(&db_path);

    rti()
        .args(who(&db_path))
        .args(["break", "--start", "--at", MON_BRK_START])
        .assert()
        .failure()
        .stderr(contains("not_clocked_in"));

    rti()
        .args(who(&db_path))
        .args(["break", "--end", "--at", MON_BRK_END])
        .assert()
        .failure()
        .stderr(contains("no_active_break"));
}

#[test]
fn test_break_requires_start_or_end() {
    let db_path = setup_test_db("cli_break_flag");

    rti()
        .args(who(&db_path))
        .arg("break")
        .assert()
        .failure();
}

#[test]
fn test_missing_employee_is_invalid_input() {
    let db_path = setup_test_db("cli_no_employee");
    init_db(&db_path);

    rti()
        .args(["--db", &db_path, "-c", "acme", "in"])
        .assert()
        .failure()
        .stderr(contains("invalid_input").and(contains("employee id is required")));
}

#[test]
fn test_correct_and_clear_day() {
    let db_path = setup_test_db("cli_correct");
    init_db(&db_path);
    work_monday(&db_path);

    rti()
        .args(who(&db_path))
        .args(["correct", "2025-03-04", "--in", "09:00", "--out", "13:00"])
        .assert()
        .success()
        .stdout(contains("2025-03-04 corrected").and(contains("250.00")));

    rti()
        .args(who(&db_path))
        .args(["correct", "2025-03-03", "--clear"])
        .assert()
        .success()
        .stdout(contains("2025-03-03 cleared").and(contains("80.00")));

    rti()
        .args(who(&db_path))
        .args(["correct", "2025-03-05", "--out", "17:00"])
        .assert()
        .failure()
        .stderr(contains("invalid_input"));
}

#[test]
fn test_clear_conflicts_with_times() {
    let db_path = setup_test_db("cli_clear_conflict");

    rti()
        .args(who(&db_path))
        .args(["correct", "2025-03-03", "--clear", "--in", "09:00"])
        .assert()
        .failure();
}

#[test]
fn test_delete_week() {
    let db_path = setup_test_db("cli_delete");
    init_db(&db_path);
    work_monday(&db_path);

    rti()
        .args(who(&db_path))
        .args(["del", "2025-03-07", "--force"])
        .assert()
        .success()
        .stdout(contains("alice@acme week 2025-03-03"));

    rti()
        .args(who(&db_path))
        .args(["week", "--date", "2025-03-03"])
        .assert()
        .failure()
        .stderr(contains("timecard_not_found"));

    rti()
        .args(who(&db_path))
        .args(["del", "2025-03-03", "--force"])
        .assert()
        .failure()
        .stderr(contains("timecard_not_found"));
}

#[test]
fn test_delete_cancelled_without_confirmation() {
    let db_path = setup_test_db("cli_delete_cancel");
    init_db(&db_path);
    work_monday(&db_path);

    rti()
        .args(who(&db_path))
        .args(["del", "2025-03-03"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    rti()
        .args(who(&db_path))
        .args(["week", "--date", "2025-03-03"])
        .assert()
        .success();
}

#[test]
fn test_rate_show_and_reject_negative() {
    let db_path = setup_test_db("cli_rate");
    init_db(&db_path);

    rti()
        .args(who(&db_path))
        .arg("rate")
        .assert()
        .success()
        .stdout(contains("0.00"));

    rti()
        .args(who(&db_path))
        .args(["rate", "--set", "31.5"])
        .assert()
        .success();

    rti()
        .args(who(&db_path))
        .arg("rate")
        .assert()
        .success()
        .stdout(contains("31.50"));

    rti()
        .args(who(&db_path))
        .args(["rate", "--set=-4"])
        .assert()
        .failure()
        .stderr(contains("invalid_input"));
}

#[test]
fn test_invalid_timezone_override_fails() {
    let db_path = setup_test_db("cli_bad_tz");

    rti()
        .args(who(&db_path))
        .args(["--tz", "Nowhere/Land", "status"])
        .assert()
        .failure()
        .stderr(contains("invalid_timezone"));
}

#[test]
fn test_timezone_override_moves_local_times() {
    let db_path = setup_test_db("cli_tz_override");
    init_db(&db_path);

    rti()
        .args(who(&db_path))
        .args(["--tz", "Europe/Rome", "in", "--at", MON_IN])
        .assert()
        .success()
        .stdout(contains("at 15:00"));
}

#[test]
fn test_log_lists_audited_operations() {
    let db_path = setup_test_db("cli_log");
    init_db(&db_path);
    work_monday(&db_path);

    rti()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(
            contains("migration_applied")
                .and(contains("clock_in"))
                .and(contains("break_start"))
                .and(contains("clock_out"))
                .and(contains("rate")),
        );
}

#[test]
fn test_status_shows_state() {
    let db_path = setup_test_db("cli_status");
    init_db(&db_path);

    rti()
        .args(who(&db_path))
        .arg("status")
        .assert()
        .success()
        .stdout(contains("not started"));
}
