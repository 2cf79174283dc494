//! Integration tests for the play command (CLI)

use crate::helpers::{run_glyphcast, temp_fixture};

// ============================================================================
// Playback Tests
// ============================================================================

#[test]
fn play_runs_the_fixture_to_completion() {
    let (temp_dir, path) = temp_fixture("sample.gcast");

    let (stdout, stderr, exit_code) = run_glyphcast(&["play", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("Played 3 frames"), "stdout: {}", stdout);
    // The frame body is painted to the same stream before the summary
    assert!(stdout.contains("####"));

    drop(temp_dir);
}

#[test]
fn frame_delay_override_speeds_up_playback() {
    let (temp_dir, path) = temp_fixture("sample.gcast");

    let start = std::time::Instant::now();
    let (stdout, _stderr, exit_code) =
        run_glyphcast(&["play", path.to_str().unwrap(), "--fd", "1"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Played 3 frames"));
    // 3 frames at 1ms each leaves a wide margin under the fixture's 40ms
    assert!(start.elapsed() < std::time::Duration::from_secs(5));

    drop(temp_dir);
}

#[test]
fn missing_audio_does_not_stop_playback() {
    let (temp_dir, path) = temp_fixture("sample.gcast");

    let (stdout, stderr, exit_code) = run_glyphcast(&[
        "play",
        path.to_str().unwrap(),
        "--audio",
        "/no/such/track.wav",
    ]);

    assert_eq!(exit_code, 0);
    assert!(stderr.contains("not found"), "stderr: {}", stderr);
    assert!(stdout.contains("Played 3 frames"), "stdout: {}", stdout);

    drop(temp_dir);
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn missing_store_fails_without_a_terminal() {
    let (_stdout, stderr, exit_code) = run_glyphcast(&["play", "/no/such/file.gcast"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("not found"), "stderr: {}", stderr);
}

#[test]
fn truncated_store_ends_cleanly() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("cut.gcast");
    // Header promises 2 rows per frame; the second frame only has one
    std::fs::write(&path, "1 2 2\nab\ncd\nef\n").unwrap();

    let (stdout, stderr, exit_code) = run_glyphcast(&["play", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("Played 1 frames"), "stdout: {}", stdout);
}
