//! Screen painting for playback
//!
//! Each tick repaints the whole grid: the status line on the top row, the
//! frame on the rows below it. The screen content is assembled into one
//! string and written with a single syscall; rows are padded to the frame
//! width so nothing from the previous frame bleeds through.

use std::io::Write;

use anyhow::Result;

use crate::store::TextFrame;

/// 1-based terminal row of the status line.
const STATUS_ROW: usize = 1;
/// 1-based terminal row of the first frame row.
const FRAME_START_ROW: usize = 2;

/// Assemble the full screen update for one tick.
///
/// # Arguments
/// * `status` - Pre-formatted status line (already padded to width)
/// * `frame` - The frame to paint
/// * `width` - Target grid width; every emitted row is exactly this wide
pub fn build_screen(status: &str, frame: &TextFrame, width: usize) -> String {
    let mut output = String::with_capacity((frame.rows.len() + 1) * (width + 8));

    output.push_str(&format!("\x1b[{};1H", STATUS_ROW));
    output.push_str(status);

    for (index, row) in frame.rows.iter().enumerate() {
        output.push_str(&format!("\x1b[{};1H", FRAME_START_ROW + index));
        let mut painted = 0;
        for glyph in row.chars().take(width) {
            output.push(glyph);
            painted += 1;
        }
        for _ in painted..width {
            output.push(' ');
        }
    }

    output
}

/// Paint one tick's screen update.
pub fn render_screen<W: Write>(
    out: &mut W,
    status: &str,
    frame: &TextFrame,
    width: usize,
) -> Result<()> {
    write!(out, "{}", build_screen(status, frame, width))?;
    out.flush()?;
    Ok(())
}
