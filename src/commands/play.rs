//! Play command

use anyhow::{bail, Result};
use tracing::warn;

use glyphcast::audio;
use glyphcast::cli::PlayArgs;
use glyphcast::player::{self, PlayOptions};

use crate::commands::prompt;

#[cfg(not(tarpaulin_include))]
pub fn handle(args: PlayArgs) -> Result<()> {
    let file = if args.file.is_file() {
        args.file.clone()
    } else if atty::is(atty::Stream::Stdin) {
        prompt::existing_file(
            "File path of the animation file: ",
            Some(args.file.clone()),
        )?
    } else {
        bail!("animation store {} not found", args.file.display());
    };

    // Audio is a side channel; losing it is not a reason to skip playback
    if let Some(wav) = &args.audio {
        if !wav.is_file() {
            warn!(path = %wav.display(), "audio file not found");
            eprintln!("Audio file {} not found, playing silent.", wav.display());
        } else if let Err(err) = audio::spawn_wav(wav) {
            warn!(error = %err, "audio unavailable");
            eprintln!("Audio unavailable: {}", err);
        }
    }

    let options = PlayOptions {
        frame_delay_ms: args.frame_delay,
    };
    let summary = player::play_file(&file, &options)?;
    println!(
        "Played {} frames in {:.1}s",
        summary.frames_played,
        summary.elapsed.as_secs_f64()
    );
    Ok(())
}
