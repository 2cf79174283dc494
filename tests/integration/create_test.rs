//! Integration tests for the create command (CLI)

use std::path::Path;

use tempfile::TempDir;

use crate::helpers::run_glyphcast;

/// Write a solid-color 4x4 PNG frame into `dir`.
fn write_frame(dir: &Path, name: &str, rgb: [u8; 3]) {
    let buffer = image::RgbImage::from_pixel(4, 4, image::Rgb(rgb));
    buffer.save(dir.join(name)).unwrap();
}

/// A white, a black and a sentinel frame; the sentinel gets dropped.
fn frame_dir(temp: &TempDir) -> std::path::PathBuf {
    let dir = temp.path().join("frames");
    std::fs::create_dir(&dir).unwrap();
    write_frame(&dir, "001.png", [255, 255, 255]);
    write_frame(&dir, "002.png", [0, 0, 0]);
    write_frame(&dir, "003.png", [0, 0, 0]);
    dir
}

// ============================================================================
// Encoding Tests
// ============================================================================

#[test]
fn create_writes_a_parsable_store() {
    let temp = TempDir::new().unwrap();
    let frames = frame_dir(&temp);
    let out = temp.path().join("out.gcast");

    let (stdout, stderr, exit_code) = run_glyphcast(&[
        "create",
        frames.to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
        "--width",
        "2",
        "--height",
        "1",
        "--ramp",
        "2",
        "--frame-delay",
        "40",
    ]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("Wrote 2 frames"), "stdout: {}", stdout);

    let store = glyphcast::store::AnimationFile::parse(&out).unwrap();
    assert_eq!(store.header.width, 2);
    assert_eq!(store.header.height, 1);
    assert_eq!(store.header.frame_delay_ms, 40.0);
    assert_eq!(store.frame_count(), 2);
    assert_eq!(store.frames[0].rows, vec!["**"]);
    assert_eq!(store.frames[1].rows, vec!["  "]);
}

#[test]
fn create_short_alias_works() {
    let temp = TempDir::new().unwrap();
    let frames = frame_dir(&temp);
    let out = temp.path().join("alias.gcast");

    let (_stdout, stderr, exit_code) = run_glyphcast(&[
        "c",
        frames.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "--width",
        "2",
        "--height",
        "2",
    ]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(out.is_file());
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn missing_frame_directory_fails_without_a_terminal() {
    let (_stdout, stderr, exit_code) = run_glyphcast(&["create", "/no/such/frames"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("not found"), "stderr: {}", stderr);
}

#[test]
fn missing_video_file_is_reported() {
    let (_stdout, stderr, exit_code) =
        run_glyphcast(&["create", "--video", "/no/such/clip.mp4"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("not found"), "stderr: {}", stderr);
}

#[test]
fn existing_output_is_not_overwritten_without_a_terminal() {
    let temp = TempDir::new().unwrap();
    let frames = frame_dir(&temp);
    let out = temp.path().join("taken.gcast");
    std::fs::write(&out, "40 1 1\n*\n").unwrap();

    let (_stdout, stderr, exit_code) = run_glyphcast(&[
        "create",
        frames.to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
    ]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("already exists"), "stderr: {}", stderr);
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "40 1 1\n*\n");
}

#[test]
fn a_single_frame_is_not_enough() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("frames");
    std::fs::create_dir(&dir).unwrap();
    write_frame(&dir, "only.png", [128, 128, 128]);

    let (_stdout, stderr, exit_code) = run_glyphcast(&[
        "create",
        dir.to_str().unwrap(),
        "--output",
        temp.path().join("out.gcast").to_str().unwrap(),
    ]);

    assert_eq!(exit_code, 1);
    assert!(
        stderr.contains("no usable frame images"),
        "stderr: {}",
        stderr
    );
}
