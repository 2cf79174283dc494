//! Integration tests for the info command (CLI)

use crate::helpers::{fixtures_dir, run_glyphcast, run_glyphcast_in, temp_fixture};

// ============================================================================
// Report Tests
// ============================================================================

#[test]
fn info_reports_the_fixture_header() {
    let (temp_dir, path) = temp_fixture("sample.gcast");

    let (stdout, stderr, exit_code) = run_glyphcast(&["info", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("grid:        4x2"));
    assert!(stdout.contains("frame delay: 40 ms"));
    assert!(stdout.contains("frames:      3"));

    drop(temp_dir);
}

#[test]
fn snapshot_info_plain_report() {
    // Run from the fixtures directory so the reported path stays relative
    let (stdout, stderr, exit_code) =
        run_glyphcast_in(&fixtures_dir(), &["info", "sample.gcast"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    insta::assert_snapshot!(stdout.trim_end(), @r"
file:        sample.gcast
size:        37 B
grid:        4x2
frame delay: 40 ms
frames:      3
duration:    0.1 s
");
}

#[test]
fn info_json_is_machine_readable() {
    let (temp_dir, path) = temp_fixture("sample.gcast");

    let (stdout, stderr, exit_code) =
        run_glyphcast(&["info", path.to_str().unwrap(), "--json"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["width"], 4);
    assert_eq!(report["height"], 2);
    assert_eq!(report["frames"], 3);
    assert_eq!(report["frame_delay_ms"], 40.0);
    assert!(report["file"].as_str().unwrap().ends_with("sample.gcast"));

    drop(temp_dir);
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn info_on_a_missing_file_fails() {
    let (_stdout, stderr, exit_code) = run_glyphcast(&["info", "/no/such/file.gcast"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("failed to open"), "stderr: {}", stderr);
}

#[test]
fn info_rejects_a_malformed_header() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("broken.gcast");
    std::fs::write(&path, "not a header\n").unwrap();

    let (_stdout, stderr, exit_code) = run_glyphcast(&["info", path.to_str().unwrap()]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("malformed store header"), "stderr: {}", stderr);
}
