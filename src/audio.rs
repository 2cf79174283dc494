//! Best-effort audio playback
//!
//! Audio runs as a detached child process next to the animation. The two
//! are not synchronized beyond starting at roughly the same moment, and a
//! missing player never stops playback itself.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use tracing::debug;

/// Players probed in order; the first one present wins.
const PLAYERS: &[&[&str]] = &[
    &["afplay"],
    &["paplay"],
    &["aplay", "-q"],
    &["ffplay", "-nodisp", "-autoexit", "-loglevel", "quiet"],
];

/// Spawn a detached child playing the given WAV file.
///
/// The child is never awaited and its output is discarded; it must not
/// scribble over the frames. Callers treat errors as a warning, not a
/// reason to stop playback.
#[cfg(not(tarpaulin_include))]
pub fn spawn_wav(path: &Path) -> Result<()> {
    for candidate in PLAYERS {
        let program = candidate[0];
        let args = &candidate[1..];
        match Command::new(program)
            .args(args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => {
                debug!(player = program, pid = child.id(), "audio started");
                return Ok(());
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to start audio player {}", program))
            }
        }
    }
    bail!("no audio player found (tried afplay, paplay, aplay, ffplay)")
}
