//! Create command: encode a frame folder or a video into a store

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    execute,
};
use tracing::warn;

use glyphcast::audio;
use glyphcast::cli::CreateArgs;
use glyphcast::encoder::{encode_to_path, EncodeOptions, FrameSet};
use glyphcast::extract;
use glyphcast::files::filename;
use glyphcast::player::{self, PlayOptions};
use glyphcast::progress::render_progress;
use glyphcast::ramp::{GlyphRamp, DETAILED_RAMP, MONO_RAMP};
use glyphcast::Config;

use crate::commands::prompt;

/// Where the frames come from; drives default naming and pacing.
enum Source {
    Frames(PathBuf),
    Video(PathBuf),
}

/// Shows the cursor again when dropped.
struct HiddenCursor;

impl HiddenCursor {
    fn hide() -> Self {
        let _ = execute!(io::stdout(), Hide);
        Self
    }
}

impl Drop for HiddenCursor {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show);
    }
}

#[cfg(not(tarpaulin_include))]
pub fn handle(args: CreateArgs) -> Result<()> {
    let config = Config::load()?;
    let interactive = args.frames.is_none() && args.video.is_none();

    let source = resolve_source(&args)?;
    let output = match resolve_output(&args, &config, &source, interactive)? {
        Some(path) => path,
        None => {
            println!("Keeping existing file.");
            return Ok(());
        }
    };

    let ramp_choice = match (&args.ramp, interactive) {
        (Some(choice), _) => choice.clone(),
        (None, true) => prompt_ramp_choice()?,
        (None, false) => config.ramp.clone(),
    };
    let ramp = GlyphRamp::from_choice(&ramp_choice)?;

    let (width, height) = grid_dimensions(&args, &config);

    // A video goes through ffmpeg into a scratch directory first; the
    // scratch guard keeps the extracted frames alive until encoding is done
    let mut frame_delay = args.frame_delay;
    let (frames_dir, _scratch) = match &source {
        Source::Frames(dir) => (dir.clone(), None),
        Source::Video(video) => {
            let scratch = tempfile::tempdir()
                .context("failed to create a scratch directory for extracted frames")?;
            let fps = extract::extract_frames(video, scratch.path(), width, height)?;
            if frame_delay.is_none() {
                frame_delay = fps.map(extract::delay_for_fps);
            }
            (scratch.path().to_path_buf(), Some(scratch))
        }
    };
    let frame_delay = frame_delay.unwrap_or(config.frame_delay_ms);

    let frames = FrameSet::from_dir(&frames_dir)?;
    let options = EncodeOptions {
        width,
        height,
        ramp,
        frame_delay_ms: frame_delay,
    };

    let cursor = HiddenCursor::hide();
    let mut stdout = io::stdout();
    let written = encode_to_path(&frames, &options, &output, |done, total| {
        let label = format!("Loading file: {} ", frames.paths()[done - 1].display());
        let _ = render_progress(&mut stdout, done, total, &label);
    })?;
    drop(cursor);
    println!();

    println!("Wrote {} frames to {}", written, output.display());

    if interactive && prompt::yes_or_no("Play the animation now?")? {
        if prompt::yes_or_no("Play sound alongside the animation? (must be WAV format)")? {
            let sound = prompt::existing_file("File path of sound file: ", None)?;
            if let Err(err) = audio::spawn_wav(&sound) {
                warn!(error = %err, "audio unavailable");
                eprintln!("Audio unavailable: {}", err);
            }
        }
        player::play_file(&output, &PlayOptions::default())?;
    }

    Ok(())
}

/// Pick the frame source: a valid argument wins, a broken one drops into
/// the prompt loop when there is a terminal to ask on.
#[cfg(not(tarpaulin_include))]
fn resolve_source(args: &CreateArgs) -> Result<Source> {
    if let Some(video) = &args.video {
        if !video.is_file() {
            bail!("video file {} not found", video.display());
        }
        return Ok(Source::Video(video.clone()));
    }

    match &args.frames {
        Some(dir) if dir.is_dir() => Ok(Source::Frames(dir.clone())),
        Some(dir) if atty::is(atty::Stream::Stdin) => Ok(Source::Frames(prompt::existing_dir(
            "File path of folder containing frames: ",
            Some(dir.clone()),
        )?)),
        Some(dir) => bail!("frame directory {} not found", dir.display()),
        None => Ok(Source::Frames(prompt::existing_dir(
            "File path of folder containing frames: ",
            None,
        )?)),
    }
}

/// Work out the output path, prompting for a name in the interactive flow.
///
/// Returns `None` when the user chose to keep an existing file.
#[cfg(not(tarpaulin_include))]
fn resolve_output(
    args: &CreateArgs,
    config: &Config,
    source: &Source,
    interactive: bool,
) -> Result<Option<PathBuf>> {
    let dir = config
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    let path = match &args.output {
        Some(path) => path.clone(),
        None if interactive => {
            let name = prompt::input("Name of the animation file: ")?;
            let name = if name.is_empty() {
                filename::default_store_name(source_stem(source))
            } else {
                filename::with_store_ext(&filename::sanitize(&name))
            };
            dir.join(name)
        }
        None => dir.join(filename::default_store_name(source_stem(source))),
    };

    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        filename::validate_length(name)?;
    }

    if path.exists() {
        if interactive {
            let keep = prompt::yes_or_no(&format!(
                "The animation file at {} already exists! Keep existing file?",
                path.display()
            ))?;
            if keep {
                return Ok(None);
            }
        } else {
            bail!(
                "output file {} already exists (pass --output to choose another path)",
                path.display()
            );
        }
    }

    Ok(Some(path))
}

/// Grid dimensions: flags, then config, then the live terminal.
///
/// The terminal-derived default stretches slightly past the visible area,
/// matching how frames have always been sized: width minus a margin of 3,
/// height plus the row the status line occupies.
fn grid_dimensions(args: &CreateArgs, config: &Config) -> (usize, usize) {
    let (term_cols, term_rows) = terminal_size::terminal_size()
        .map(|(w, h)| (w.0, h.0))
        .unwrap_or((80, 24));

    let width = args
        .width
        .or(config.width)
        .unwrap_or_else(|| term_cols.saturating_sub(3).max(1));
    let height = args
        .height
        .or(config.height)
        .unwrap_or_else(|| term_rows.saturating_add(1));
    (width as usize, height as usize)
}

#[cfg(not(tarpaulin_include))]
fn prompt_ramp_choice() -> Result<String> {
    let message = format!(
        "Character set 1 = '{}' (recommended for colored videos)\nCharacter set 2 = '{}' (recommended for black and white videos)\nChoose 1 or 2: ",
        DETAILED_RAMP, MONO_RAMP
    );
    loop {
        let choice = prompt::input(&message)?;
        if choice == "1" || choice == "2" {
            return Ok(choice);
        }
        eprintln!("Please choose 1 or 2!");
    }
}

fn source_stem(source: &Source) -> &str {
    let path = match source {
        Source::Frames(path) | Source::Video(path) => path,
    };
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("animation")
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphcast::cli::Cli;
    use clap::Parser;

    fn create_args(argv: &[&str]) -> CreateArgs {
        let mut full = vec!["glyphcast", "create"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            glyphcast::cli::Command::Create(args) => args,
            _ => unreachable!(),
        }
    }

    #[test]
    fn explicit_dimensions_win_over_config() {
        let args = create_args(&["frames", "--width", "100", "--height", "50"]);
        let mut config = Config::default();
        config.width = Some(10);
        config.height = Some(5);

        assert_eq!(grid_dimensions(&args, &config), (100, 50));
    }

    #[test]
    fn config_dimensions_beat_the_terminal_default() {
        let args = create_args(&["frames"]);
        let mut config = Config::default();
        config.width = Some(64);
        config.height = Some(32);

        assert_eq!(grid_dimensions(&args, &config), (64, 32));
    }

    #[test]
    fn source_stem_uses_the_file_name() {
        assert_eq!(
            source_stem(&Source::Video(PathBuf::from("/clips/My Holiday.mp4"))),
            "My Holiday"
        );
        assert_eq!(
            source_stem(&Source::Frames(PathBuf::from("/tmp/frames"))),
            "frames"
        );
    }
}
