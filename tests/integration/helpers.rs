//! Shared helpers for the integration tests

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Directory holding committed test fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Read a fixture file into a string.
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read fixture {}: {}", path.display(), err))
}

/// Copy a fixture into a fresh temp directory.
///
/// Returns the directory guard together with the copied path; dropping the
/// guard removes the copy.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, load_fixture(name)).unwrap();
    (dir, path)
}

/// Run the glyphcast CLI and capture output.
///
/// Stdin is closed so prompting code paths bail instead of blocking, and
/// the config lookup points at a scratch directory to keep runs hermetic.
pub fn run_glyphcast(args: &[&str]) -> (String, String, i32) {
    run_glyphcast_in(Path::new("."), args)
}

/// Same as [`run_glyphcast`], with an explicit working directory.
pub fn run_glyphcast_in(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let config_scratch = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_glyphcast"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", config_scratch.path())
        .stdin(std::process::Stdio::null())
        .output()
        .expect("Failed to execute glyphcast");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
