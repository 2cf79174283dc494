//! Playback timing diagnostics
//!
//! Pure number crunching for the status line: how long the last frame
//! actually took, how close that is to the intended delay, and the running
//! frame rate. Measuring happens in the scheduler loop; everything here is
//! testable without a clock.

/// Timing numbers for one scheduler tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameDiagnostics {
    /// Running frames per second since playback start
    pub fps: f64,
    /// Measured wall-clock milliseconds since the previous frame completed
    pub frame_time_ms: f64,
    /// Intended delay over measured frame time, as a percentage
    pub accuracy_pct: f64,
    /// Seconds since playback start
    pub playback_secs: f64,
    /// Frames completed before this tick
    pub frames_played: usize,
}

/// Compute the diagnostics for one tick.
///
/// # Arguments
/// * `intended_delay_ms` - The delay the scheduler is aiming for
/// * `frame_time_ms` - Measured time since the previous frame completed
/// * `playback_secs` - Wall-clock seconds since playback start
/// * `frames_played` - Frames completed so far
pub fn compute(
    intended_delay_ms: f64,
    frame_time_ms: f64,
    playback_secs: f64,
    frames_played: usize,
) -> FrameDiagnostics {
    let fps = if playback_secs > 0.0 {
        frames_played as f64 / playback_secs
    } else {
        0.0
    };
    let accuracy_pct = if frame_time_ms > 0.0 {
        intended_delay_ms / frame_time_ms * 100.0
    } else {
        100.0
    };

    FrameDiagnostics {
        fps,
        frame_time_ms,
        accuracy_pct,
        playback_secs,
        frames_played,
    }
}

/// Build the status line, one decimal everywhere.
///
/// The line is padded with spaces to exactly `width` characters so it
/// overwrites the previous tick's digits, and truncated to `width` so it
/// never wraps into the first frame row.
pub fn build_status_line(diagnostics: &FrameDiagnostics, width: usize) -> String {
    let mut line = format!(
        "FPS:{:.1} Frametime:{:.1}ms Accuracy:{:.1}% Playback time:{:.1} Frames:{} ",
        diagnostics.fps,
        diagnostics.frame_time_ms,
        diagnostics.accuracy_pct,
        diagnostics.playback_secs,
        diagnostics.frames_played
    );

    let visible = line.chars().count();
    if visible < width {
        for _ in visible..width {
            line.push(' ');
        }
    } else if visible > width {
        line = line.chars().take(width).collect();
    }
    line
}
