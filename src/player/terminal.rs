//! Terminal setup and restore for playback
//!
//! Playback takes over the screen: cursor hidden, screen cleared, window
//! resized to the grid when the terminal allows it. Restoring the cursor
//! must survive both normal exits and Ctrl-C, so the restore lives in a
//! drop guard and in the interrupt handler.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    terminal::{Clear, ClearType, SetSize},
};

/// Restores the cursor when dropped.
pub struct TerminalGuard;

impl TerminalGuard {
    /// Hide the cursor, clear the screen and move home.
    ///
    /// Also asks the terminal to resize to `width` x `height`; not every
    /// terminal honors that, so failures there are ignored.
    #[cfg(not(tarpaulin_include))]
    pub fn prepare(width: u16, height: u16) -> Result<Self> {
        let mut stdout = io::stdout();
        execute!(stdout, Hide, Clear(ClearType::All), MoveTo(0, 0))
            .context("failed to prepare terminal for playback")?;
        let _ = execute!(stdout, SetSize(width, height));
        Ok(Self)
    }
}

#[cfg(not(tarpaulin_include))]
impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, Show);
        let _ = writeln!(stdout);
    }
}

/// Install a Ctrl-C handler that restores the cursor before exiting.
///
/// 130 is the conventional exit status for death by SIGINT.
#[cfg(not(tarpaulin_include))]
pub fn install_interrupt_restore() -> Result<()> {
    ctrlc::set_handler(|| {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, Show);
        let _ = writeln!(stdout);
        std::process::exit(130);
    })
    .context("failed to install Ctrl-C handler")
}
