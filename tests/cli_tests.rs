//! CLI integration tests for the fcfg binary
//!
//! These tests run the built binary inside temporary project directories
//! and check stdout, stderr and exit codes.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run fcfg with `dir` as the working directory
fn fcfg(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fcfg"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute fcfg")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_show_json_defaults() {
    let temp = TempDir::new().unwrap();
    let output = fcfg(temp.path(), &["show", "--format", "json"]);

    assert!(output.status.success(), "show failed: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["server_port"], 3000);
    assert_eq!(value["open_browser_on_start"], true);
    assert_eq!(value["empty_output_before_build"], true);
    assert!(value["output_dir"].as_str().unwrap().ends_with("dist"));
}

#[test]
fn test_show_applies_file_and_flags() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("frontcfg.toml"), "server_port = 8080\noutput_dir = \"build\"\n")
        .unwrap();

    let output = fcfg(temp.path(), &["show", "--format", "json", "--port", "9000", "--no-open"]);
    assert!(output.status.success(), "show failed: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["server_port"], 9000);
    assert_eq!(value["open_browser_on_start"], false);
    assert!(value["output_dir"].as_str().unwrap().ends_with("build"));
}

#[test]
fn test_show_rejects_bad_format() {
    let temp = TempDir::new().unwrap();
    let output = fcfg(temp.path(), &["show", "--format", "yaml"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_check_invalid_port_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("frontcfg.json5"), "{ serverPort: 70000 }").unwrap();

    let output = fcfg(temp.path(), &["check"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid server port 70000"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_check_unknown_field_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("frontcfg.toml"), "outDir = \"dist\"\n").unwrap();

    let output = fcfg(temp.path(), &["check"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("outDir"));
}

#[test]
fn test_check_valid_config() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("frontcfg.toml"), "root_dir = \"src\"\n").unwrap();

    let output = fcfg(temp.path(), &["check"]);
    assert!(output.status.success(), "check failed: {}", stderr(&output));
    assert!(stdout(&output).starts_with("OK:"));
}

#[test]
fn test_init_then_check() {
    let temp = TempDir::new().unwrap();

    let output = fcfg(temp.path(), &["init", "--format", "json5"]);
    assert!(output.status.success(), "init failed: {}", stderr(&output));
    assert!(temp.path().join("frontcfg.json5").is_file());

    let output = fcfg(temp.path(), &["check"]);
    assert!(output.status.success(), "check failed: {}", stderr(&output));

    let output = fcfg(temp.path(), &["init", "--format", "json5"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--force"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let temp = TempDir::new().unwrap();
    let output = fcfg(temp.path(), &["--verbose", "show", "--format", "json"]);

    assert!(output.status.success(), "show failed: {}", stderr(&output));
    assert!(stderr(&output).contains("resolved configuration"));
    serde_json::from_str::<serde_json::Value>(&stdout(&output)).expect("stdout should be pure JSON");
}

#[test]
fn test_rejected_config_reported_once() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("frontcfg.toml"), "server_port = 0\n").unwrap();

    let output = fcfg(temp.path(), &["check"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output).matches("Invalid server port 0").count(), 1);
}

#[test]
fn test_init_missing_directory_reported_once() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("absent");

    let output = fcfg(temp.path(), &["init", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output).matches("Directory not found").count(), 1);
}
