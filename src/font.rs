//! Font metrics for text measurement

#[cfg(feature = "ttf-parser")]
use crate::constants::DEFAULT_CHAR_WIDTH_RATIO;

/// Trait for measuring text dimensions.
///
/// Used by [`crate::LopdfSurface`] for alignment, wrapping and ellipsis
/// clipping. Without metrics the surface falls back to a fixed
/// width-per-character estimate.
pub trait FontMetrics {
    /// Width of a single character in points at the given font size
    fn char_width(&self, ch: char, font_size: f32) -> f32;

    /// Total width of a string in points at the given font size
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().map(|ch| self.char_width(ch, font_size)).sum()
    }
}

/// TrueType font metrics using ttf-parser for glyph advance widths.
///
/// Only measurement is provided; the surface still draws with standard
/// Type1 fonts.
#[cfg(feature = "ttf-parser")]
pub struct TtfFontMetrics {
    font_data: Vec<u8>,
    units_per_em: f32,
}

#[cfg(feature = "ttf-parser")]
impl TtfFontMetrics {
    /// Create new font metrics from raw TTF/TTC font data.
    ///
    /// Validates the font by parsing it and extracting units_per_em.
    pub fn new(font_data: Vec<u8>) -> crate::Result<Self> {
        let face = ttf_parser::Face::parse(&font_data, 0).map_err(|e| {
            crate::error::RenderError::TextError(format!("Failed to parse font: {e}"))
        })?;
        let units_per_em = face.units_per_em() as f32;
        Ok(Self {
            font_data,
            units_per_em,
        })
    }

    fn advance(&self, face: &ttf_parser::Face<'_>, ch: char, font_size: f32) -> f32 {
        face.glyph_index(ch)
            .and_then(|gid| face.glyph_hor_advance(gid))
            .map(|advance| advance as f32 / self.units_per_em * font_size)
            .unwrap_or(font_size * DEFAULT_CHAR_WIDTH_RATIO)
    }
}

#[cfg(feature = "ttf-parser")]
impl FontMetrics for TtfFontMetrics {
    fn char_width(&self, ch: char, font_size: f32) -> f32 {
        match ttf_parser::Face::parse(&self.font_data, 0) {
            Ok(face) => self.advance(&face, ch, font_size),
            Err(_) => font_size * DEFAULT_CHAR_WIDTH_RATIO,
        }
    }

    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        // Parse once per string rather than once per char
        match ttf_parser::Face::parse(&self.font_data, 0) {
            Ok(face) => text
                .chars()
                .map(|ch| self.advance(&face, ch, font_size))
                .sum(),
            Err(_) => crate::drawing_utils::estimate_text_width(text, font_size),
        }
    }
}

#[cfg(feature = "ttf-parser")]
impl std::fmt::Debug for TtfFontMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtfFontMetrics")
            .field("units_per_em", &self.units_per_em)
            .field("font_data_len", &self.font_data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Monospace(f32);

    impl FontMetrics for Monospace {
        fn char_width(&self, _ch: char, font_size: f32) -> f32 {
            self.0 * font_size
        }
    }

    #[test]
    fn test_default_text_width_sums_chars() {
        let metrics = Monospace(0.6);
        assert!((metrics.text_width("abc", 10.0) - 18.0).abs() < 1e-4);
        assert_eq!(metrics.text_width("", 10.0), 0.0);
    }

    #[cfg(feature = "ttf-parser")]
    fn load_test_font() -> Option<Vec<u8>> {
        let paths = [
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ];
        paths.iter().find_map(|path| std::fs::read(path).ok())
    }

    #[cfg(feature = "ttf-parser")]
    #[test]
    fn test_ttf_font_metrics_invalid_data() {
        assert!(TtfFontMetrics::new(vec![0, 1, 2, 3]).is_err());
    }

    #[cfg(feature = "ttf-parser")]
    #[test]
    fn test_ttf_text_width_sums_char_widths() {
        let Some(font_data) = load_test_font() else {
            eprintln!("Skipping test: no system font found");
            return;
        };
        let metrics = TtfFontMetrics::new(font_data).unwrap();
        let single = metrics.char_width('A', 12.0);
        assert!(single > 0.0);
        assert!((metrics.text_width("AAA", 12.0) - single * 3.0).abs() < 0.01);
    }
}
