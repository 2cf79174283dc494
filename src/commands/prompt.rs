//! Interactive prompts
//!
//! The create flow can run without any arguments, asking for everything it
//! needs. Path prompts re-ask until the answer exists on disk, so a typo'd
//! path never aborts a session.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Print a message and read one line, trimmed of whitespace and of the
/// quotes shells leave around dragged-in paths.
pub fn input(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    let n = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if n == 0 {
        bail!("unexpected end of input");
    }
    Ok(line.trim().trim_matches('"').to_string())
}

/// Yes/no question, re-asked until answered either way.
pub fn yes_or_no(message: &str) -> Result<bool> {
    loop {
        match input(&format!("{} [Y/N] ", message))?.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => eprintln!("Please select Y or N"),
        }
    }
}

/// Prompt until the answer names an existing directory.
///
/// `first` is tried before asking, so a mistyped command line argument
/// drops into the same retry loop.
pub fn existing_dir(message: &str, first: Option<PathBuf>) -> Result<PathBuf> {
    require_tty()?;
    let mut candidate = match first {
        Some(path) => path,
        None => PathBuf::from(input(message)?),
    };
    loop {
        if candidate.is_dir() {
            return Ok(candidate);
        }
        eprintln!("File can't be found!");
        candidate = PathBuf::from(input(message)?);
    }
}

/// Prompt until the answer names an existing file.
pub fn existing_file(message: &str, first: Option<PathBuf>) -> Result<PathBuf> {
    require_tty()?;
    let mut candidate = match first {
        Some(path) => path,
        None => PathBuf::from(input(message)?),
    };
    loop {
        if candidate.is_file() {
            return Ok(candidate);
        }
        eprintln!("File can't be found!");
        candidate = PathBuf::from(input(message)?);
    }
}

/// Re-prompting a pipe would loop forever on the same answer.
fn require_tty() -> Result<()> {
    if atty::is(atty::Stream::Stdin) {
        Ok(())
    } else {
        bail!("stdin is not a terminal; pass the path on the command line")
    }
}
