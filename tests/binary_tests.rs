//! Tests that run the built binaries
//!
//! Only paths that fail validation or never touch sysfs are exercised here,
//! so the tests are safe on any machine.

use std::process::Command;

const HELPER: &str = env!("CARGO_BIN_EXE_omen-rgb-helper");
const FRONTEND: &str = env!("CARGO_BIN_EXE_omen-rgb");

/// Bad zone token: exit 1, reason on stderr
#[test]
fn test_helper_rejects_invalid_zone() {
    let output = Command::new(HELPER).args(["9", "FF0000"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid zone '9'"), "stderr: {stderr}");
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}

/// Bad color token: exit 1
#[test]
fn test_helper_rejects_invalid_color() {
    let output = Command::new(HELPER).args(["all", "#FF0000"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid color"), "stderr: {stderr}");
}

/// No arguments: exit 1 with usage
#[test]
fn test_helper_without_arguments() {
    let output = Command::new(HELPER).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

/// `RUST_LOG=off` must not silence the helper's failure reports
#[test]
fn test_helper_reports_with_logging_off() {
    let output = Command::new(HELPER)
        .env("RUST_LOG", "off")
        .args(["9", "FF0000"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid zone '9'"), "stderr: {stderr}");
    assert!(stderr.contains("Usage"), "stderr: {stderr}");

    let output = Command::new(HELPER)
        .env("RUST_LOG", "off")
        .arg("all")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("expected 2 arguments"));
}

/// `omen-rgb policy` prints a descriptor for a custom helper path
#[test]
fn test_frontend_prints_policy() {
    let output = Command::new(FRONTEND)
        .args(["policy", "--helper-path", "/opt/omen-rgb/omen-rgb-helper"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("com.github.cousteauche.omenrgbgui.applyrgb"));
    assert!(stdout.contains(">/opt/omen-rgb/omen-rgb-helper</annotate>"));
}

/// The frontend validates the color before asking for authorization
#[test]
fn test_frontend_rejects_invalid_color() {
    let output = Command::new(FRONTEND)
        .args(["apply", "--zone", "1", "--color", "red"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("red"));
}
