//! .gcast text-animation format reader and writer
//!
//! A `.gcast` file is line-oriented: one header line followed by the frames,
//! back to back, with no delimiter between them.
//!
//! ```text
//! <frame_delay_ms> <width> <height>\n
//! <row 1 of frame 1>\n
//! ...
//! <row height of frame 1>\n
//! <row 1 of frame 2>\n
//! ...
//! ```
//!
//! The header makes the store self-describing: playback does not need to
//! know the terminal geometry the frames were encoded for. Reads are
//! forward-only and single-pass, which is all linear playback needs.

use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::time::Duration;

use tracing::{debug, warn};

/// Canonical file extension for animation stores.
pub const STORE_EXT: &str = "gcast";

/// Errors from reading or writing a `.gcast` store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("malformed store header: {reason}")]
    Format { reason: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl StoreError {
    fn format(reason: impl Into<String>) -> Self {
        StoreError::Format {
            reason: reason.into(),
        }
    }
}

/// Store header: intended frame pacing plus the fixed frame geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Header {
    /// Intended milliseconds between the start of consecutive frames.
    pub frame_delay_ms: f64,
    /// Columns per frame row.
    pub width: usize,
    /// Rows per frame.
    pub height: usize,
}

impl Header {
    /// Parse the first line of a store.
    ///
    /// Fails with [`StoreError::Format`] unless the line is
    /// `<delay> <width> <height>` with a positive finite delay and
    /// dimensions of at least 1.
    pub fn parse(line: &str) -> Result<Self, StoreError> {
        let mut fields = line.split_whitespace();
        let delay = fields
            .next()
            .ok_or_else(|| StoreError::format("empty header line"))?;
        let width = fields
            .next()
            .ok_or_else(|| StoreError::format("missing frame width"))?;
        let height = fields
            .next()
            .ok_or_else(|| StoreError::format("missing frame height"))?;
        if fields.next().is_some() {
            return Err(StoreError::format(format!(
                "expected 'delay width height', got {:?}",
                line
            )));
        }

        let frame_delay_ms: f64 = delay
            .parse()
            .map_err(|_| StoreError::format(format!("frame delay {:?} is not a number", delay)))?;
        if !frame_delay_ms.is_finite() || frame_delay_ms <= 0.0 {
            return Err(StoreError::format(format!(
                "frame delay must be a positive number, got {:?}",
                delay
            )));
        }

        let width: usize = width
            .parse()
            .map_err(|_| StoreError::format(format!("frame width {:?} is not an integer", width)))?;
        let height: usize = height.parse().map_err(|_| {
            StoreError::format(format!("frame height {:?} is not an integer", height))
        })?;
        if width == 0 || height == 0 {
            return Err(StoreError::format("frame dimensions must be at least 1x1"));
        }

        Ok(Header {
            frame_delay_ms,
            width,
            height,
        })
    }

    /// Intended inter-frame interval as a [`Duration`].
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(self.frame_delay_ms / 1000.0)
    }
}

impl std::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.frame_delay_ms, self.width, self.height)
    }
}

/// One animation frame: a fixed-size grid of glyphs, one row per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFrame {
    pub rows: Vec<String>,
}

impl TextFrame {
    pub fn new(rows: Vec<String>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Columns of the first row (all rows share it in a well-formed store).
    #[inline]
    pub fn width(&self) -> usize {
        self.rows.first().map(|r| r.chars().count()).unwrap_or(0)
    }

    /// True when every row has exactly the given dimensions.
    pub fn matches(&self, width: usize, height: usize) -> bool {
        self.rows.len() == height && self.rows.iter().all(|r| r.chars().count() == width)
    }
}

/// Forward-only streaming reader over a store.
///
/// Construction consumes and validates the header line; each call to
/// [`FrameReader::next_frame`] then yields the next complete frame.
/// A truncated trailing frame reads as end-of-stream, not an error, so a
/// cut-off store plays back everything it has and stops.
pub struct FrameReader<R: BufRead> {
    reader: R,
    header: Header,
    finished: bool,
}

impl FrameReader<BufReader<fs::File>> {
    /// Open a store file and parse its header.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let file = fs::File::open(path)?;
        let reader = Self::new(BufReader::new(file))?;
        debug!(
            path = %path.display(),
            delay_ms = reader.header.frame_delay_ms,
            width = reader.header.width,
            height = reader.header.height,
            "opened animation store"
        );
        Ok(reader)
    }
}

impl<R: BufRead> FrameReader<R> {
    /// Wrap any buffered reader, consuming the header line.
    pub fn new(mut reader: R) -> Result<Self, StoreError> {
        let mut line = String::new();
        let n = reader.read_line(&mut line)?;
        if n == 0 {
            return Err(StoreError::format("store is empty"));
        }
        let header = Header::parse(line.trim_end_matches(&['\n', '\r'][..]))?;
        Ok(Self {
            reader,
            header,
            finished: false,
        })
    }

    /// The parsed store header.
    #[inline]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Read the next frame, or `None` at end-of-stream.
    ///
    /// A frame with fewer than `height` rows remaining (truncated store)
    /// also ends the stream.
    pub fn next_frame(&mut self) -> Result<Option<TextFrame>, StoreError> {
        if self.finished {
            return Ok(None);
        }

        let mut rows = Vec::with_capacity(self.header.height);
        for _ in 0..self.header.height {
            let mut line = String::new();
            let n = self.reader.read_line(&mut line)?;
            if n == 0 {
                self.finished = true;
                if !rows.is_empty() {
                    warn!(
                        rows = rows.len(),
                        expected = self.header.height,
                        "store ends mid-frame; treating as end of stream"
                    );
                }
                return Ok(None);
            }
            while line.ends_with('\n') || line.ends_with('\r') {
                line.pop();
            }
            rows.push(line);
        }

        Ok(Some(TextFrame::new(rows)))
    }
}

/// Complete in-memory animation: header plus every frame.
///
/// [`FrameReader`] is what playback uses; this type exists for encoding
/// output, inspection (`glyphcast info`) and round-trip tests.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFile {
    pub header: Header,
    pub frames: Vec<TextFrame>,
}

impl AnimationFile {
    /// Create an empty animation with the given header.
    pub fn new(header: Header) -> Self {
        Self {
            header,
            frames: Vec::new(),
        }
    }

    /// Parse a store file from a path.
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let file = fs::File::open(path.as_ref())?;
        Self::parse_reader(BufReader::new(file))
    }

    /// Parse a store from any buffered reader.
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<Self, StoreError> {
        let mut frame_reader = FrameReader::new(reader)?;
        let mut frames = Vec::new();
        while let Some(frame) = frame_reader.next_frame()? {
            frames.push(frame);
        }
        Ok(Self {
            header: *frame_reader.header(),
            frames,
        })
    }

    /// Parse a store from a string.
    pub fn parse_str(content: &str) -> Result<Self, StoreError> {
        Self::parse_reader(BufReader::new(content.as_bytes()))
    }

    /// Write the store to a path.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        let mut file = fs::File::create(path.as_ref())?;
        self.write_to(&mut file)
    }

    /// Write the store to any writer.
    ///
    /// Refuses to emit a structurally inconsistent store: there must be at
    /// least one frame and every frame must match the header dimensions.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), StoreError> {
        if self.frames.is_empty() {
            return Err(StoreError::format("a store must contain at least one frame"));
        }
        for (idx, frame) in self.frames.iter().enumerate() {
            if !frame.matches(self.header.width, self.header.height) {
                return Err(StoreError::format(format!(
                    "frame {} is {}x{}, header says {}x{}",
                    idx,
                    frame.width(),
                    frame.height(),
                    self.header.width,
                    self.header.height
                )));
            }
        }

        writeln!(writer, "{}", self.header)?;
        for frame in &self.frames {
            for row in &frame.rows {
                writeln!(writer, "{}", row)?;
            }
        }
        Ok(())
    }

    /// Serialize the store to a string.
    pub fn to_string(&self) -> Result<String, StoreError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        String::from_utf8(buffer).map_err(|_| StoreError::format("store is not valid UTF-8"))
    }

    /// Number of frames.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Total playback duration at the intended frame delay.
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.header.frame_delay_ms * self.frames.len() as f64 / 1000.0)
    }
}
