//! Encode-time progress reporting
//!
//! One line, redrawn in place: a fixed-width bar, the percentage and a
//! `[done/total]` counter, followed by a caller-supplied label (usually the
//! frame file just finished). Building the line is pure so it can be tested
//! against plain strings; only [`render_progress`] touches the terminal.

use std::io::{self, Write};

use terminal_size::{terminal_size, Width};

/// Bar width used by [`render_progress`].
pub const BAR_WIDTH: usize = 20;

const FILLED: char = '#';
const REMAINING: char = '-';

/// Build the progress line for `current` of `total` finished units.
///
/// `current` is clamped to `total`, so overshooting callers cap at 100%.
///
/// # Returns
///
/// A string like `[#########-----------] 43% [3/7]`.
pub fn build_progress_bar(current: usize, total: usize, width: usize) -> String {
    let total = total.max(1);
    let current = current.min(total);
    let ratio = current as f64 / total as f64;
    let filled = ((width as f64 * ratio).round() as usize).min(width);

    let mut line = String::with_capacity(width + 16);
    line.push('[');
    for _ in 0..filled {
        line.push(FILLED);
    }
    for _ in filled..width {
        line.push(REMAINING);
    }
    line.push(']');
    line.push_str(&format!(
        " {}% [{}/{}]",
        (ratio * 100.0).round() as usize,
        current,
        total
    ));
    line
}

/// Redraw the progress line in place.
///
/// Returns to column zero, clears the old line and writes the bar plus
/// `label`, truncated to the terminal width so a long frame path never
/// wraps and breaks the in-place redraw. Call sites ignore the result;
/// a progress line is not worth failing an encode run over.
pub fn render_progress<W: Write>(
    out: &mut W,
    current: usize,
    total: usize,
    label: &str,
) -> io::Result<()> {
    let mut line = format!("{} {}", build_progress_bar(current, total, BAR_WIDTH), label);

    let columns = terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(80);
    if line.chars().count() >= columns {
        line = line.chars().take(columns.saturating_sub(1)).collect();
    }

    write!(out, "\r\x1b[K{}", line)?;
    out.flush()
}
