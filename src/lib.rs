//! glyphcast: frame images in, terminal glyph animations out.
//!
//! The pipeline has two halves. The encoder walks an ordered set of frame
//! images (pre-extracted, or pulled out of a video with ffmpeg), maps every
//! pixel to a glyph by perceived luminance and writes a `.gcast` store: one
//! self-describing header line, then the frames as plain text rows. The
//! player streams that store back at a fixed interval, painting each frame
//! under a live diagnostics line (FPS, frame time, timing accuracy).
//!
//! Modules:
//! - [`ramp`]: luminance model and glyph ramps
//! - [`encoder`]: image decoding and frame-to-text conversion
//! - [`store`]: the `.gcast` read/write contract
//! - [`player`]: the fixed-interval playback scheduler
//! - [`extract`] / [`audio`]: ffmpeg frame extraction and WAV side channel
//! - [`progress`], [`files`], [`config`], [`cli`]: the surrounding CLI

pub mod audio;
pub mod cli;
pub mod config;
pub mod encoder;
pub mod extract;
pub mod files;
pub mod player;
pub mod progress;
pub mod ramp;
pub mod store;

pub use config::Config;

/// Version string: crate version, then git SHA and build date when the
/// build embeds them.
pub fn long_version() -> String {
    let sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");
    format!(
        "{} ({} {})",
        env!("CARGO_PKG_VERSION"),
        sha,
        env!("GLYPHCAST_BUILD_DATE")
    )
}
