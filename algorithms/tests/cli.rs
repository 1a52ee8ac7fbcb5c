use std::path::PathBuf;
use std::process::{Command, Output};

fn linear_scans(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_linear-scans"))
        .args(args)
        .env("RUST_LOG", "info")
        .output()
        .expect("binary must start")
}

fn write_config(name: &str, json: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("linear-scans-{}-{name}.json", std::process::id()));
    std::fs::write(&path, json).expect("config must be writable");
    path
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn search_prints_minus_one_when_absent() {
    let out = linear_scans(&["search", "--target", "3", "-1", "0", "2", "4", "6", "8"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out), "-1\n");
}

#[test]
fn unsorted_input_exits_non_zero() {
    let out = linear_scans(&["search", "--target", "1", "3", "2"]);
    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("strictly ascending"), "{}", stderr(&out));
    assert!(stdout(&out).is_empty());
}

#[test]
fn negative_price_exits_non_zero() {
    let out = linear_scans(&["max-profit", "4", "-1"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("negative"), "{}", stderr(&out));
}

#[test]
fn configured_strategy_is_used_without_flag() {
    let config = write_config("configured", r#"{ "duplicate": "distinct-count" }"#);
    let out = linear_scans(&["--config", config.to_str().unwrap(), "duplicates", "1", "2", "2"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out), "true\n");
    assert!(stderr(&out).contains("DistinctCount"), "{}", stderr(&out));
    let _ = std::fs::remove_file(config);
}

#[test]
fn strategy_flag_overrides_config() {
    let config = write_config("overridden", r#"{ "duplicate": "distinct-count" }"#);
    let out = linear_scans(&[
        "--config",
        config.to_str().unwrap(),
        "duplicates",
        "--strategy",
        "early-exit",
        "1",
        "2",
        "2",
    ]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out), "true\n");
    let log = stderr(&out);
    assert!(log.contains("EarlyExit"), "{log}");
    assert!(!log.contains("DistinctCount"), "{log}");
    let _ = std::fs::remove_file(config);
}

#[test]
fn malformed_config_exits_non_zero() {
    let config = write_config("malformed", r#"{ "duplicate": "bubble" }"#);
    let out = linear_scans(&["--config", config.to_str().unwrap(), "duplicates", "1"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("invalid config"), "{}", stderr(&out));
    let _ = std::fs::remove_file(config);
}
