//! Frame-image to text-animation encoder
//!
//! Takes a directory of still frames (one image per frame, produced by the
//! video extractor or any other tool), downsamples each to the target grid,
//! maps every pixel to a glyph by perceived luminance and streams the result
//! into a `.gcast` store.
//!
//! Frames are processed strictly in file-name order, one at a time, so peak
//! memory stays at a single decoded image regardless of animation length.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::DynamicImage;
use tracing::debug;

use crate::ramp::GlyphRamp;
use crate::store::{Header, TextFrame};

/// Errors from assembling a frame set or encoding it.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// A frame image exists but cannot be decoded. Always fatal: skipping a
    /// frame would silently change the animation's timing.
    #[error("failed to decode frame image {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("no usable frame images found in {}", dir.display())]
    EmptyInput { dir: PathBuf },

    #[error("frame set contains no images")]
    EmptyFrameSet,

    /// Options that would produce a header the reader rejects.
    #[error("invalid encode options: {reason}")]
    InvalidOptions { reason: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl EncodeError {
    fn decode(path: &Path, source: image::ImageError) -> Self {
        EncodeError::Decode {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// An ordered list of frame image paths.
#[derive(Debug, Clone)]
pub struct FrameSet {
    paths: Vec<PathBuf>,
}

impl FrameSet {
    /// Collect the frame images of a directory, sorted by file name.
    ///
    /// The last file in sort order is dropped: the extractor may still have
    /// been writing it when extraction was interrupted, and a partial image
    /// would fail to decode. A directory therefore needs at least two files
    /// to yield one usable frame.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, EncodeError> {
        let dir = dir.as_ref();
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                paths.push(entry.path());
            }
        }
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        if paths.len() < 2 {
            return Err(EncodeError::EmptyInput {
                dir: dir.to_path_buf(),
            });
        }
        paths.pop();

        debug!(dir = %dir.display(), frames = paths.len(), "collected frame set");
        Ok(Self { paths })
    }

    /// Build a frame set from explicit paths, in the given order.
    ///
    /// Unlike [`FrameSet::from_dir`] this keeps every path: an explicit list
    /// has no trailing partial file to guard against.
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    #[inline]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

/// Target geometry, glyph ramp and pacing for one encode run.
///
/// Width and height must be at least 1 and the delay positive and finite,
/// the same bounds the store header enforces; encoding rejects anything
/// else before a byte is written.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Target columns per row.
    pub width: usize,
    /// Target rows per frame.
    pub height: usize,
    /// Glyph ramp pixels are mapped through.
    pub ramp: GlyphRamp,
    /// Intended milliseconds between frames, recorded in the store header.
    pub frame_delay_ms: f64,
}

/// Render a single decoded image onto the target glyph grid.
///
/// The image is stretched to exactly `width` x `height` with nearest-neighbor
/// sampling (aspect ratio is the caller's concern, terminal cells are not
/// square anyway), then each pixel becomes one glyph.
pub fn encode_frame(
    image: &DynamicImage,
    width: usize,
    height: usize,
    ramp: &GlyphRamp,
) -> TextFrame {
    let resized = image.resize_exact(width as u32, height as u32, FilterType::Nearest);
    let rgb = resized.to_rgb8();

    let mut rows = Vec::with_capacity(height);
    for y in 0..rgb.height() {
        let mut row = String::with_capacity(width);
        for x in 0..rgb.width() {
            let pixel = rgb.get_pixel(x, y);
            row.push(ramp.glyph_for(pixel[0], pixel[1], pixel[2]));
        }
        rows.push(row);
    }

    TextFrame::new(rows)
}

/// Encode a frame set into a store, streaming frames as they are produced.
///
/// `progress` is called after every finished frame with
/// `(frames_done, frames_total)`.
///
/// # Returns
///
/// The number of frames written.
pub fn encode_to_writer<W: Write>(
    frames: &FrameSet,
    options: &EncodeOptions,
    writer: &mut W,
    mut progress: impl FnMut(usize, usize),
) -> Result<usize, EncodeError> {
    if frames.is_empty() {
        return Err(EncodeError::EmptyFrameSet);
    }
    if options.width == 0 || options.height == 0 {
        return Err(EncodeError::InvalidOptions {
            reason: format!(
                "grid must be at least 1x1, got {}x{}",
                options.width, options.height
            ),
        });
    }
    if !options.frame_delay_ms.is_finite() || options.frame_delay_ms <= 0.0 {
        return Err(EncodeError::InvalidOptions {
            reason: format!(
                "frame delay must be a positive number of milliseconds, got {}",
                options.frame_delay_ms
            ),
        });
    }

    let header = Header {
        frame_delay_ms: options.frame_delay_ms,
        width: options.width,
        height: options.height,
    };
    writeln!(writer, "{}", header)?;

    let total = frames.len();
    for (index, path) in frames.paths().iter().enumerate() {
        let image = image::open(path).map_err(|source| EncodeError::decode(path, source))?;
        let frame = encode_frame(&image, options.width, options.height, &options.ramp);
        for row in &frame.rows {
            writeln!(writer, "{}", row)?;
        }
        progress(index + 1, total);
    }

    debug!(
        frames = total,
        width = options.width,
        height = options.height,
        delay_ms = options.frame_delay_ms,
        "encoded frame set"
    );
    Ok(total)
}

/// Encode a frame set into a store file on disk.
pub fn encode_to_path<P: AsRef<Path>>(
    frames: &FrameSet,
    options: &EncodeOptions,
    path: P,
    progress: impl FnMut(usize, usize),
) -> Result<usize, EncodeError> {
    let file = fs::File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    let written = encode_to_writer(frames, options, &mut writer, progress)?;
    writer.flush()?;
    Ok(written)
}
