//! End-to-end tests for the `thunk` binary

use std::fs;
use std::process::{Command, Output};

fn thunk(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_thunk"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run thunk binary")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_range_defaults() {
    let output = thunk(&["range"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["6", "7", "8", "9", "10", "11", "12", "13", "14", "15"]
    );
}

#[test]
fn test_range_flags() {
    let output = thunk(&["range", "--start", "-1", "--count", "3"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["-1", "0", "1"]);
}

#[test]
fn test_range_zero_count_prints_nothing() {
    let output = thunk(&["range", "-c", "0"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_filter_evens() {
    let output = thunk(&["filter", "--count", "5"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["4", "6", "8", "10", "12"]);
}

#[test]
fn test_filter_zero_divisor_fails() {
    let output = thunk(&["filter", "--divisor", "0"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("non-zero"), "stderr: {}", stderr);
}

#[test]
fn test_list_items() {
    let output = thunk(&["list", "3", "1", "2"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["3", "1", "2"]);
}

#[test]
fn test_list_negative_items() {
    let output = thunk(&["list", "-1", "2", "-3"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout_lines(&output), vec!["-1", "2", "-3"]);
}

#[test]
fn test_list_defaults() {
    let output = thunk(&["list"]);
    assert_eq!(stdout_lines(&output), vec!["1", "2", "4", "5"]);
}

#[test]
fn test_first_terminates() {
    let output = thunk(&["first"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "first(3, <diverges>) = 3");
}

#[test]
fn test_logic() {
    let output = thunk(&["logic"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert!(lines.contains(&"and(true, false) = false".to_string()));
    assert!(lines.contains(&"or(true, false) = true".to_string()));
}

#[test]
fn test_config_file_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("thunk.toml");
    fs::write(&path, "[range]\nstart = 40\ncount = 2\n").unwrap();

    let output = thunk(&["--config", path.to_str().unwrap(), "range"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["40", "41"]);

    // Flags still win over the file
    let output = thunk(&["--config", path.to_str().unwrap(), "range", "--count", "1"]);
    assert_eq!(stdout_lines(&output), vec!["40"]);
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let output = thunk(&["--config", path.to_str().unwrap(), "range"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read config"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[filter]\ndivisor = 0\n").unwrap();

    let output = thunk(&["--config", path.to_str().unwrap(), "tour"]);
    assert!(!output.status.success());
}

#[test]
fn test_tour() {
    let output = thunk(&["tour"]);
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.first().map(String::as_str), Some("---- Unforced operands:"));
    assert_eq!(lines.last().map(String::as_str), Some("22"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let output = thunk(&["-vv", "range", "--count", "2"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["6", "7"]);
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_malformed_rust_log_warns_and_continues() {
    let output = Command::new(env!("CARGO_BIN_EXE_thunk"))
        .args(["range", "--count", "2"])
        .env("RUST_LOG", "thunk_core=loud")
        .output()
        .expect("failed to run thunk binary");
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["6", "7"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid log filter"), "stderr: {}", stderr);
}

#[test]
fn test_completions() {
    let output = thunk(&["completions", "bash"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("thunk"));
}
