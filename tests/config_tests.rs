mod common;
use common::temp_out;
use rtimecard::config::Config;
use rtimecard::core::engine::MAX_LOOKBACK_DAYS;
use std::fs;
use std::path::Path;

fn write_conf(name: &str, yaml: &str) -> String {
    let path = temp_out(name, "conf");
    fs::write(&path, yaml).expect("write config");
    path
}

#[test]
fn test_missing_file_gives_defaults() {
    let cfg = Config::load_from(Path::new(&temp_out("config_missing", "conf"))).unwrap();
    assert_eq!(cfg.timezone, "America/Chicago");
    assert_eq!(cfg.lookback_days, 365);
}

#[test]
fn test_optional_keys_fall_back_to_defaults() {
    let path = write_conf("config_partial", "database: /tmp/x.sqlite\n");
    let cfg = Config::load_from(Path::new(&path)).unwrap();
    assert_eq!(cfg.database, "/tmp/x.sqlite");
    assert_eq!(cfg.lookback_days, 365);
}

#[test]
fn test_oversized_lookback_is_rejected() {
    let path = write_conf(
        "config_huge_lookback",
        "database: /tmp/x.sqlite\nlookback_days: 9000000000000000\n",
    );
    let err = Config::load_from(Path::new(&path)).unwrap_err();
    assert_eq!(err.code(), "config");

    let path = write_conf(
        "config_max_lookback",
        &format!("database: /tmp/x.sqlite\nlookback_days: {}\n", MAX_LOOKBACK_DAYS),
    );
    assert!(Config::load_from(Path::new(&path)).is_ok());
}

#[test]
fn test_negative_lookback_and_bad_timezone_are_rejected() {
    let path = write_conf("config_neg_lookback", "database: /tmp/x.sqlite\nlookback_days: -1\n");
    assert!(Config::load_from(Path::new(&path)).is_err());

    let path = write_conf("config_bad_tz", "database: /tmp/x.sqlite\ntimezone: Mars/Base\n");
    let err = Config::load_from(Path::new(&path)).unwrap_err();
    assert_eq!(err.code(), "invalid_timezone");
}
