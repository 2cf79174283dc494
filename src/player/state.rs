//! Playback state
//!
//! One `PlaybackState` value is owned by the scheduler loop for the whole
//! run; nothing else mutates it.

use std::time::Instant;

/// Lifecycle of a playback run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    /// Store not opened yet
    Idle,
    /// Frames are being painted on schedule
    Playing,
    /// End of stream reached
    Finished,
}

/// Timing and progress counters for one playback run.
#[derive(Debug)]
pub struct PlaybackState {
    /// Current lifecycle phase
    pub phase: PlaybackPhase,
    /// Wall clock when playback started
    pub started_at: Instant,
    /// Completion instant of the most recent frame paint
    pub last_frame_at: Option<Instant>,
    /// Frames painted so far
    pub frames_played: usize,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self {
            phase: PlaybackPhase::Idle,
            started_at: Instant::now(),
            last_frame_at: None,
            frames_played: 0,
        }
    }

    /// Enter `Playing` and reset the clock and counters.
    pub fn begin(&mut self) {
        self.phase = PlaybackPhase::Playing;
        self.started_at = Instant::now();
        self.last_frame_at = None;
        self.frames_played = 0;
    }

    /// Record a completed frame paint.
    pub fn frame_painted(&mut self, at: Instant) {
        self.frames_played += 1;
        self.last_frame_at = Some(at);
    }

    /// Enter the terminal `Finished` phase.
    pub fn finish(&mut self) {
        self.phase = PlaybackPhase::Finished;
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.phase == PlaybackPhase::Finished
    }

    /// The instant the next frame time is measured against: the previous
    /// frame's completion, or playback start for the very first frame.
    #[inline]
    pub fn frame_time_origin(&self) -> Instant {
        self.last_frame_at.unwrap_or(self.started_at)
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}
