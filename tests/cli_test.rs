//! End-to-end runs of the `keyleak` binary.
//!
//! Stdout is checked byte-for-byte; logging goes to stderr and is ignored.

use std::process::{Command, Output};

// ============================================================================
// Test Helpers
// ============================================================================

fn keyleak(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_keyleak"))
        .args(args)
        .env_remove("KEYLEAK_SECRET")
        .env_remove("KEYLEAK_PUBLIC")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn keyleak")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

// ============================================================================
// Demo
// ============================================================================

#[test]
fn default_run_leaks_secret_then_prints_sentinel() {
    let out = keyleak(&[]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "abcsecret!\n-1\n");
}

#[test]
fn demo_subcommand_matches_default_run() {
    let out = keyleak(&["demo"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "abcsecret!\n-1\n");
}

#[test]
fn empty_secret_fails_without_output() {
    let out = keyleak(&["demo", "--secret", ""]);
    assert!(!out.status.success());
    assert!(stdout(&out).is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("empty private key"));
}

#[test]
fn valid_public_key_reports_64() {
    let public = "p".repeat(64);
    let out = keyleak(&["--public", &public]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "64\n");
}

#[test]
fn env_overrides_key_material() {
    let out = Command::new(env!("CARGO_BIN_EXE_keyleak"))
        .env("KEYLEAK_SECRET", "hunter2")
        .env("KEYLEAK_PUBLIC", "short")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn keyleak");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "hunter2\n-1\n");
}

// ============================================================================
// Check
// ============================================================================

#[test]
fn check_json_report() {
    let out = keyleak(&["check", "--key", "abcpublic", "--json"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["length"], 9);
    assert_eq!(v["valid"], false);
}

#[test]
fn check_never_prints_secret() {
    let out = keyleak(&["check", "--key", "abcpublic"]);
    assert!(out.status.success());
    assert!(!stdout(&out).contains("abcsecret!"));
}
