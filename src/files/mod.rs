//! Filesystem helpers for animation stores

pub mod filename;

use std::path::Path;

use anyhow::{Context, Result};
use humansize::{format_size, DECIMAL};

/// Human-readable size of a file on disk.
pub fn file_size_display(path: &Path) -> Result<String> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("failed to stat {}", path.display()))?;
    Ok(format_size(metadata.len(), DECIMAL))
}
