//! Store filename generation and sanitization
//!
//! Default output names are derived from the source (frame folder or video
//! file) plus a timestamp, sanitized so they are safe on common
//! filesystems.

use chrono::Local;
use deunicode::deunicode;

use crate::store::STORE_EXT;

/// Windows reserved device names that cannot be used as filenames.
const WINDOWS_RESERVED: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Characters that are invalid in filenames on common filesystems.
const INVALID_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Fallback when sanitization eats the whole name.
const FALLBACK_NAME: &str = "animation";

/// Maximum filename length for most filesystems.
const MAX_FILENAME_LENGTH: usize = 255;

/// Sanitize a string for use as a filename component.
///
/// Transliterates to ASCII, turns whitespace runs into single hyphens,
/// strips characters that are invalid on common filesystems, trims stray
/// edge punctuation and sidesteps Windows reserved device names.
pub fn sanitize(input: &str) -> String {
    let ascii = deunicode(input);

    let mut result = String::with_capacity(ascii.len());
    let mut last_was_hyphen = false;
    for c in ascii.chars() {
        if c.is_whitespace() || c == '-' {
            if !last_was_hyphen {
                result.push('-');
                last_was_hyphen = true;
            }
        } else if INVALID_CHARS.contains(&c) {
            continue;
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
            result.push(c);
            last_was_hyphen = false;
        }
        // Everything else that survived deunicode is dropped
    }

    let trimmed = result
        .trim_matches(|c| c == '.' || c == ' ' || c == '-')
        .to_string();
    let named = prefix_reserved_name(&trimmed);

    if named.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        named
    }
}

/// Default store filename for a source: `<name>_<yymmdd>_<HHMM>.gcast`.
pub fn default_store_name(source: &str) -> String {
    let now = Local::now();
    format!(
        "{}_{}_{}.{}",
        sanitize(source),
        now.format("%y%m%d"),
        now.format("%H%M"),
        STORE_EXT
    )
}

/// Append the store extension unless the name already carries it.
pub fn with_store_ext(name: &str) -> String {
    let suffix = format!(".{}", STORE_EXT);
    if name.ends_with(&suffix) {
        name.to_string()
    } else {
        format!("{}{}", name, suffix)
    }
}

/// Errors from filename validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilenameError {
    #[error("filename too long: {length} characters (max {max})")]
    TooLong { length: usize, max: usize },
}

/// Reject filenames that exceed the common filesystem limit.
pub fn validate_length(filename: &str) -> Result<(), FilenameError> {
    if filename.len() > MAX_FILENAME_LENGTH {
        Err(FilenameError::TooLong {
            length: filename.len(),
            max: MAX_FILENAME_LENGTH,
        })
    } else {
        Ok(())
    }
}

/// Prefix Windows reserved device names with an underscore.
fn prefix_reserved_name(name: &str) -> String {
    let base = match name.find('.') {
        Some(pos) => &name[..pos],
        None => name,
    };
    let upper = base.to_uppercase();
    if WINDOWS_RESERVED.contains(&upper.as_str()) {
        format!("_{}", name)
    } else {
        name.to_string()
    }
}
