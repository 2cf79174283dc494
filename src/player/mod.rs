//! Fixed-interval playback of animation stores
//!
//! One loop owns the whole run: it reads ahead a single frame, sleeps until
//! the next deadline, paints, updates the diagnostics and re-arms. There is
//! no timer thread and no supervisory poll; end-of-stream is discovered the
//! moment the reader runs dry, right after the last frame was painted.
//!
//! The loop is generic over its output sink, so the tests drive it against
//! an in-memory buffer at millisecond delays.

mod diagnostics;
mod render;
mod state;
mod terminal;

pub use diagnostics::{build_status_line, FrameDiagnostics};
pub use render::{build_screen, render_screen};
pub use state::{PlaybackPhase, PlaybackState};
pub use terminal::{install_interrupt_restore, TerminalGuard};

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::debug;

use crate::store::{FrameReader, Header};

/// Milliseconds shaved off the nominal delay to compensate the fixed cost
/// of painting a frame.
const RENDER_BIAS_MS: f64 = 0.8;
/// Never arm the scheduler below this interval.
const MIN_INTERVAL_MS: f64 = 1.0;

/// Playback tuning.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    /// Override the store header's frame delay, in milliseconds.
    pub frame_delay_ms: Option<f64>,
}

/// Outcome of a completed playback run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSummary {
    /// Frames actually painted
    pub frames_played: usize,
    /// Wall-clock time from start to end of stream
    pub elapsed: Duration,
}

/// The interval the scheduler arms between frames.
fn scheduler_interval(delay_ms: f64) -> Duration {
    Duration::from_secs_f64((delay_ms - RENDER_BIAS_MS).max(MIN_INTERVAL_MS) / 1000.0)
}

/// Window size for a store: its grid plus the status row, clamped to the
/// terminal's addressable range.
fn window_size(header: &Header) -> (u16, u16) {
    let cols = u16::try_from(header.width).unwrap_or(u16::MAX);
    let rows = u16::try_from(header.height)
        .unwrap_or(u16::MAX)
        .saturating_add(1);
    (cols, rows)
}

/// Play a store file on the terminal, honoring the header's pacing.
///
/// Takes over the screen for the duration; the cursor is restored when the
/// run ends. The caller is responsible for installing the Ctrl-C restore
/// handler ([`install_interrupt_restore`]) once per process.
#[cfg(not(tarpaulin_include))]
pub fn play_file(path: &Path, options: &PlayOptions) -> Result<PlaybackSummary> {
    let reader = FrameReader::open(path)
        .with_context(|| format!("failed to open animation store {}", path.display()))?;
    let header = *reader.header();

    let (cols, rows) = window_size(&header);
    let _guard = TerminalGuard::prepare(cols, rows)?;
    let mut stdout = io::stdout();
    run(reader, &mut stdout, options)
}

/// The scheduler loop.
///
/// Reads one frame ahead so end-of-stream ends the run immediately after
/// the final paint instead of one interval later. The deadline advances by
/// a fixed step per frame; a slow paint makes one frame late without
/// shifting the cadence of the rest.
pub fn run<R: BufRead, W: Write>(
    mut reader: FrameReader<R>,
    out: &mut W,
    options: &PlayOptions,
) -> Result<PlaybackSummary> {
    let header = *reader.header();
    let delay_ms = options.frame_delay_ms.unwrap_or(header.frame_delay_ms);
    let interval = scheduler_interval(delay_ms);

    let mut state = PlaybackState::new();
    state.begin();
    let mut deadline = state.started_at + interval;

    debug!(
        delay_ms,
        width = header.width,
        height = header.height,
        "playback started"
    );

    loop {
        let frame = match reader.next_frame()? {
            Some(frame) => frame,
            None => {
                state.finish();
                break;
            }
        };

        let now = Instant::now();
        if deadline > now {
            thread::sleep(deadline - now);
        }

        let tick_start = Instant::now();
        let frame_time_ms = (tick_start - state.frame_time_origin()).as_secs_f64() * 1000.0;
        let playback_secs = (tick_start - state.started_at).as_secs_f64();
        let diag = diagnostics::compute(delay_ms, frame_time_ms, playback_secs, state.frames_played);
        let status = build_status_line(&diag, header.width);

        render_screen(out, &status, &frame, header.width)?;

        state.frame_painted(Instant::now());
        deadline += interval;
    }

    let summary = PlaybackSummary {
        frames_played: state.frames_played,
        elapsed: state.started_at.elapsed(),
    };
    debug!(
        frames = summary.frames_played,
        secs = summary.elapsed.as_secs_f64(),
        "playback finished"
    );
    Ok(summary)
}
