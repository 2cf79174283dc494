//! Video frame extraction via ffmpeg
//!
//! Dumps every frame of a video into a scratch directory as zero-padded
//! PNGs, so the encoder can treat a video exactly like a pre-extracted
//! frame folder. ffprobe supplies the source frame rate for pacing; when
//! it cannot, the caller falls back to its configured delay.

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::debug;

/// Output name pattern; zero-padded so file-name order is frame order.
const FRAME_PATTERN: &str = "frame_%06d.png";

/// Extract every frame of `video` into `out_dir`, scaled to the target grid.
///
/// Scaling uses nearest-neighbor to match the encoder's sampling, so the
/// downsample happens once, in ffmpeg.
///
/// # Returns
///
/// The source frame rate when ffprobe can name one.
#[cfg(not(tarpaulin_include))]
pub fn extract_frames(
    video: &Path,
    out_dir: &Path,
    width: usize,
    height: usize,
) -> Result<Option<f64>> {
    let pattern = out_dir.join(FRAME_PATTERN);
    debug!(
        video = %video.display(),
        out = %out_dir.display(),
        width,
        height,
        "extracting frames"
    );

    let status = Command::new("ffmpeg")
        .args(["-hide_banner", "-loglevel", "error", "-i"])
        .arg(video)
        .args(["-vf", &format!("scale={}:{}:flags=neighbor", width, height)])
        .arg(&pattern)
        .status()
        .context("failed to launch ffmpeg; is it installed?")?;
    if !status.success() {
        bail!(
            "ffmpeg exited with {} while extracting {}",
            status,
            video.display()
        );
    }

    Ok(probe_fps(video))
}

/// Ask ffprobe for the video stream's average frame rate.
///
/// Any failure (no ffprobe, no video stream, unparseable answer) is `None`;
/// frame pacing then falls back to the configured delay.
#[cfg(not(tarpaulin_include))]
pub fn probe_fps(video: &Path) -> Option<f64> {
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-select_streams",
            "v:0",
            "-show_entries",
            "stream=avg_frame_rate",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ])
        .arg(video)
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let raw = String::from_utf8_lossy(&output.stdout);
    let fps = parse_fps(raw.trim());
    debug!(video = %video.display(), ?fps, "probed frame rate");
    fps
}

/// Parse ffprobe's frame rate: a rational like `30000/1001` or a plain
/// number.
fn parse_fps(raw: &str) -> Option<f64> {
    let value = match raw.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator: f64 = numerator.trim().parse().ok()?;
            let denominator: f64 = denominator.trim().parse().ok()?;
            if denominator == 0.0 {
                return None;
            }
            numerator / denominator
        }
        None => raw.trim().parse().ok()?,
    };

    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Milliseconds between frames for a given frame rate.
pub fn delay_for_fps(fps: f64) -> f64 {
    1000.0 / fps
}
