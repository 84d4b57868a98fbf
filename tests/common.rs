#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rtimecard::core::{Calendar, FixedClock, TimecardEngine};
use rtimecard::rates::FixedRate;
use rtimecard::store::MemoryStore;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

pub const EMP: &str = "emp-1";
pub const COMP: &str = "acme";

pub type MemEngine = TimecardEngine<Arc<MemoryStore>, FixedRate>;

pub fn rti() -> Command {
    cargo_bin_cmd!("rtimecard")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimecard.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB schema through the CLI (test mode: no config file)
pub fn init_db(db_path: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Wall-clock time in the default organization timezone (America/Chicago).
pub fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Calendar::default()
        .local_instant(
            date(y, m, d),
            NaiveTime::from_hms_opt(h, min, 0).expect("valid time"),
        )
        .expect("existing local time")
}

/// Engine over a fresh in-memory store with a clock frozen at `now`.
pub fn memory_engine(now: DateTime<Utc>, rate: f64) -> (MemEngine, Arc<MemoryStore>, Arc<FixedClock>) {
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(FixedClock::at(now));
    let engine = TimecardEngine::new(
        store.clone(),
        FixedRate(rate),
        clock.clone(),
        Calendar::default(),
    );
    (engine, store, clock)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
