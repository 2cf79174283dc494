//! Glyph ramps and the luminance model.
//!
//! A glyph ramp is an ordered set of characters from darkest to brightest.
//! Each source pixel is reduced to a perceptual luminance value and mapped
//! to exactly one glyph from the active ramp.

use unicode_width::UnicodeWidthChar;

/// Nine-level ramp, recommended for colored source material.
pub const DETAILED_RAMP: &str = " .-+*#&%$";

/// Two-level ramp, recommended for black-and-white source material.
pub const MONO_RAMP: &str = " *";

// Perceptual weights for the sqrt-of-weighted-squares luminance
// approximation. They sum to 1.0, so pure white maps to exactly 255.
const WEIGHT_R: f64 = 0.241;
const WEIGHT_G: f64 = 0.691;
const WEIGHT_B: f64 = 0.068;

/// Errors from constructing a glyph ramp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RampError {
    #[error("glyph ramp must contain at least one character")]
    Empty,

    #[error("glyph {glyph:?} is not exactly one terminal column wide")]
    WideGlyph { glyph: char },
}

/// Perceived brightness of an RGB pixel, in `[0.0, 255.0]`.
///
/// Uses the green-weighted sqrt-of-squares approximation, which tracks
/// perceived brightness better than a linear channel average.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    (r * r * WEIGHT_R + g * g * WEIGHT_G + b * b * WEIGHT_B).sqrt()
}

/// An ordered, validated set of brightness glyphs.
///
/// Immutable once constructed; one ramp is chosen per encoding run and
/// every pixel of every frame goes through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
}

impl GlyphRamp {
    /// Build a ramp from a dark-to-bright character sequence.
    ///
    /// Fails if the sequence is empty or contains a glyph that does not
    /// occupy exactly one terminal column (wide glyphs would break the
    /// fixed-width frame grid).
    pub fn new(chars: &str) -> Result<Self, RampError> {
        let glyphs: Vec<char> = chars.chars().collect();
        if glyphs.is_empty() {
            return Err(RampError::Empty);
        }
        for &glyph in &glyphs {
            if glyph.width().unwrap_or(0) != 1 {
                return Err(RampError::WideGlyph { glyph });
            }
        }
        Ok(Self { glyphs })
    }

    /// The built-in nine-level ramp.
    pub fn detailed() -> Self {
        Self {
            glyphs: DETAILED_RAMP.chars().collect(),
        }
    }

    /// The built-in two-level ramp.
    pub fn mono() -> Self {
        Self {
            glyphs: MONO_RAMP.chars().collect(),
        }
    }

    /// Resolve a user selection: `"1"` = detailed, `"2"` = mono, anything
    /// else is validated as a custom dark-to-bright ramp.
    pub fn from_choice(choice: &str) -> Result<Self, RampError> {
        match choice {
            "1" => Ok(Self::detailed()),
            "2" => Ok(Self::mono()),
            custom => Self::new(custom),
        }
    }

    /// Number of brightness levels.
    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; ramps are validated non-empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The glyphs in dark-to-bright order.
    #[inline]
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Map a luminance value in `[0.0, 255.0]` to a glyph.
    ///
    /// Rounds (rather than truncates) the ramp index to reduce banding at
    /// level boundaries, then clamps into range. Total: never fails.
    #[inline]
    pub fn glyph_for_luma(&self, luma: f64) -> char {
        let top = self.glyphs.len() - 1;
        let idx = (luma / 255.0 * top as f64).round() as usize;
        self.glyphs[idx.min(top)]
    }

    /// Map an RGB pixel straight to a glyph.
    #[inline]
    pub fn glyph_for(&self, r: u8, g: u8, b: u8) -> char {
        self.glyph_for_luma(luminance(r, g, b))
    }
}

impl std::fmt::Display for GlyphRamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for glyph in &self.glyphs {
            write!(f, "{}", glyph)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_maps_to_first_glyph() {
        let ramp = GlyphRamp::detailed();
        assert_eq!(ramp.glyph_for(0, 0, 0), ' ');
    }

    #[test]
    fn white_maps_to_last_glyph() {
        let ramp = GlyphRamp::detailed();
        assert_eq!(ramp.glyph_for(255, 255, 255), '$');
    }

    #[test]
    fn white_luminance_is_exactly_255() {
        // Weights sum to 1.0, so pure white hits the top of the range
        assert!((luminance(255, 255, 255) - 255.0).abs() < 1e-9);
    }

    #[test]
    fn green_dominates_luminance() {
        assert!(luminance(0, 200, 0) > luminance(200, 0, 0));
        assert!(luminance(200, 0, 0) > luminance(0, 0, 200));
    }

    #[test]
    fn mapping_is_monotonic_in_luminance() {
        let ramp = GlyphRamp::detailed();
        let order = ramp.glyphs().to_vec();
        let mut last_idx = 0;
        for level in 0..=255u8 {
            let glyph = ramp.glyph_for(level, level, level);
            let idx = order.iter().position(|&g| g == glyph).unwrap();
            assert!(idx >= last_idx, "ramp went backwards at level {}", level);
            last_idx = idx;
        }
    }

    #[test]
    fn mid_gray_lands_mid_ramp() {
        let ramp = GlyphRamp::detailed();
        // L(128,128,128) = 128; round(128/255 * 8) = 4
        assert_eq!(ramp.glyph_for(128, 128, 128), '*');
    }

    #[test]
    fn single_glyph_ramp_is_constant() {
        let ramp = GlyphRamp::new("#").unwrap();
        assert_eq!(ramp.glyph_for(0, 0, 0), '#');
        assert_eq!(ramp.glyph_for(128, 64, 200), '#');
        assert_eq!(ramp.glyph_for(255, 255, 255), '#');
    }

    #[test]
    fn mono_ramp_splits_at_half() {
        let ramp = GlyphRamp::mono();
        assert_eq!(ramp.glyph_for(0, 0, 0), ' ');
        // round(100/255 * 1) = 0
        assert_eq!(ramp.glyph_for(100, 100, 100), ' ');
        // round(160/255 * 1) = 1
        assert_eq!(ramp.glyph_for(160, 160, 160), '*');
        assert_eq!(ramp.glyph_for(255, 255, 255), '*');
    }

    #[test]
    fn empty_ramp_rejected() {
        assert_eq!(GlyphRamp::new(""), Err(RampError::Empty));
    }

    #[test]
    fn wide_glyph_rejected() {
        let err = GlyphRamp::new(" .日").unwrap_err();
        assert_eq!(err, RampError::WideGlyph { glyph: '日' });
    }

    #[test]
    fn zero_width_glyph_rejected() {
        // Combining accent has no column width of its own
        assert!(matches!(
            GlyphRamp::new("a\u{0301}"),
            Err(RampError::WideGlyph { .. })
        ));
    }

    #[test]
    fn from_choice_resolves_builtins_and_custom() {
        assert_eq!(GlyphRamp::from_choice("1").unwrap(), GlyphRamp::detailed());
        assert_eq!(GlyphRamp::from_choice("2").unwrap(), GlyphRamp::mono());
        let custom = GlyphRamp::from_choice(" @").unwrap();
        assert_eq!(custom.len(), 2);
        assert_eq!(custom.glyphs(), &[' ', '@']);
    }

    #[test]
    fn display_round_trips_the_charset() {
        assert_eq!(GlyphRamp::detailed().to_string(), DETAILED_RAMP);
        assert_eq!(GlyphRamp::mono().to_string(), MONO_RAMP);
    }
}
