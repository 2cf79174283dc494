//! Command line interface definition
//!
//! Kept in the library so the completion generator and the man page
//! builder in `xtask` can both reach the command tree.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Turn frame images into terminal text animations, and play them back.
#[derive(Debug, Parser)]
#[command(
    name = "glyphcast",
    about = "Glyph animation encoder and terminal player",
    version = crate::long_version()
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode a frame folder or a video into an animation store
    #[command(alias = "c")]
    Create(CreateArgs),

    /// Play an animation store in the terminal
    #[command(alias = "p")]
    Play(PlayArgs),

    /// Show a store's header, size and duration
    Info(InfoArgs),

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Directory of frame images, one image per frame; prompted for when
    /// neither this nor --video is given
    #[arg(value_name = "DIR")]
    pub frames: Option<PathBuf>,

    /// Extract frames from this video instead of a frame folder
    #[arg(long, value_name = "FILE", conflicts_with = "frames")]
    pub video: Option<PathBuf>,

    /// Store file to write; defaults to a name derived from the source
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Glyph ramp: 1 = detailed, 2 = mono, anything longer is used as
    /// custom glyphs, darkest first
    #[arg(short, long, value_name = "RAMP")]
    pub ramp: Option<String>,

    /// Grid width in columns; defaults to the terminal width
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<u16>,

    /// Grid height in rows; defaults to the terminal height
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub height: Option<u16>,

    /// Milliseconds between frames; defaults to the source frame rate
    #[arg(
        long = "frame-delay",
        alias = "fd",
        value_name = "MS",
        value_parser = parse_frame_delay
    )]
    pub frame_delay: Option<f64>,
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Animation store to play
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Override the store's frame delay
    #[arg(
        long = "frame-delay",
        alias = "fd",
        value_name = "MS",
        value_parser = parse_frame_delay
    )]
    pub frame_delay: Option<f64>,

    /// WAV file to play alongside the animation
    #[arg(long, value_name = "FILE")]
    pub audio: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Animation store to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Emit machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Open the config file in $EDITOR
    Edit,
}

/// Frame delays must be positive, finite milliseconds.
fn parse_frame_delay(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("{:?} is not a number", raw))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err("frame delay must be a positive number of milliseconds".to_string())
    }
}
