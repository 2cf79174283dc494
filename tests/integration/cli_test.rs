//! Integration tests for CLI parsing and top-level output

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::run_glyphcast;

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_exits_0_and_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_glyphcast(&["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("create"));
    assert!(stdout.contains("play"));
    assert!(stdout.contains("info"));
    assert!(stdout.contains("config"));
    assert!(stdout.contains("completions"));
}

#[test]
fn create_help_documents_the_encoding_flags() {
    let (stdout, _stderr, exit_code) = run_glyphcast(&["create", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("--video"));
    assert!(stdout.contains("--ramp"));
    assert!(stdout.contains("--width"));
    assert!(stdout.contains("--height"));
    assert!(stdout.contains("--frame-delay"));
}

#[test]
fn version_flag_prints_the_package_version() {
    Command::cargo_bin("glyphcast")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn no_subcommand_is_a_usage_error() {
    Command::cargo_bin("glyphcast")
        .unwrap()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn non_numeric_frame_delay_is_a_usage_error() {
    let (_stdout, stderr, exit_code) = run_glyphcast(&["play", "demo.gcast", "--fd", "soon"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("is not a number"));
}

#[test]
fn zero_frame_delay_is_a_usage_error() {
    let (_stdout, stderr, exit_code) = run_glyphcast(&["play", "demo.gcast", "--fd=0"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("positive"));
}

// ============================================================================
// Completions and Config Tests
// ============================================================================

#[test]
fn completions_emit_the_binary_name() {
    let (stdout, _stderr, exit_code) = run_glyphcast(&["completions", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("glyphcast"));
}

#[test]
fn config_show_prints_defaults_without_a_file() {
    let (stdout, stderr, exit_code) = run_glyphcast(&["config", "show"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("frame_delay_ms"));
    assert!(stdout.contains("ramp"));
}

#[test]
fn config_path_points_at_the_config_file() {
    let (stdout, _stderr, exit_code) = run_glyphcast(&["config", "path"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("glyphcast"));
    assert!(stdout.trim_end().ends_with("config.toml"));
}
