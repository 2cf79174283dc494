//! Configuration file handling
//!
//! TOML config at `~/.config/glyphcast/config.toml`. Every field has a
//! default, so a partial file (or none at all) keeps working.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Frame delay used when neither the command line, the source video nor
/// the config file names one.
pub const DEFAULT_FRAME_DELAY_MS: f64 = 25.2;

/// User configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Glyph ramp: "1" (detailed), "2" (mono) or custom glyphs.
    pub ramp: String,
    /// Fallback frame delay in milliseconds.
    pub frame_delay_ms: f64,
    /// Directory new stores are written into; current directory when unset.
    pub output_dir: Option<PathBuf>,
    /// Grid width override; derived from the terminal when unset.
    pub width: Option<u16>,
    /// Grid height override; derived from the terminal when unset.
    pub height: Option<u16>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ramp: "1".to_string(),
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            output_dir: None,
            width: None,
            height: None,
        }
    }
}

impl Config {
    /// Load the config file, or defaults when none exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Parse a config from TOML text; missing fields take their defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no store could carry, with the same bounds the store
    /// header enforces.
    fn validate(&self) -> Result<()> {
        if !self.frame_delay_ms.is_finite() || self.frame_delay_ms <= 0.0 {
            bail!(
                "frame_delay_ms must be a positive number of milliseconds, got {}",
                self.frame_delay_ms
            );
        }
        if self.width == Some(0) {
            bail!("width must be at least 1");
        }
        if self.height == Some(0) {
            bail!("height must be at least 1");
        }
        Ok(())
    }

    /// Write the config to its canonical path, creating directories as
    /// needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("failed to write config file {}", path.display()))
    }

    /// Canonical config file location.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("could not determine the user config directory")?;
        Ok(base.join("glyphcast").join("config.toml"))
    }
}
