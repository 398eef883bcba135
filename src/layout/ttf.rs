//! TrueType glyph metrics and 1-bit rasterization via ab_glyph.
//!
//! Sizes are em sizes: at size 28 the font's em square is 28 pixels, the
//! convention desktop imaging libraries use for `truetype(path, size)`.
//! Anti-aliased coverage is thresholded at 0.5, so a pixel is black when a
//! glyph covers at least half of it.

use std::path::Path;

use ab_glyph::{Font, FontVec, PxScale, ScaleFont, point};

use crate::error::FortunaError;
use crate::render::canvas::MonoCanvas;

use super::metrics::{GlyphMetrics, GlyphRasterizer};

const COVERAGE_THRESHOLD: f32 = 0.5;

/// A parsed TrueType/OpenType font.
pub struct TtfFont {
    font: FontVec,
}

impl std::fmt::Debug for TtfFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtfFont")
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl TtfFont {
    /// Load a font file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FortunaError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| FortunaError::Font(format!("{}: {}", path.display(), e)))?;
        Self::from_bytes(bytes)
            .map_err(|e| FortunaError::Font(format!("{}: {}", path.display(), e)))
    }

    /// Parse font data already in memory.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, FortunaError> {
        let font = FontVec::try_from_vec(bytes).map_err(|e| FortunaError::Font(e.to_string()))?;
        Ok(Self { font })
    }

    /// ab_glyph scales by ascent-to-descent height; convert from em size.
    fn scale(&self, size: u32) -> PxScale {
        let units_per_em = self.font.units_per_em().unwrap_or(1000.0);
        PxScale::from(size as f32 * self.font.height_unscaled() / units_per_em)
    }
}

impl GlyphMetrics for TtfFont {
    fn text_width(&self, text: &str, size: u32) -> u32 {
        let scaled = self.font.as_scaled(self.scale(size));
        let mut caret = 0.0f32;
        let mut prev = None;

        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = prev {
                caret += scaled.kern(prev, id);
            }
            caret += scaled.h_advance(id);
            prev = Some(id);
        }
        caret.ceil().max(0.0) as u32
    }

    fn line_height(&self, size: u32) -> u32 {
        let scaled = self.font.as_scaled(self.scale(size));
        (scaled.ascent() - scaled.descent()).ceil().max(0.0) as u32
    }
}

impl GlyphRasterizer for TtfFont {
    fn draw_text(&self, canvas: &mut MonoCanvas, x: i32, y: i32, text: &str, size: u32) {
        let scale = self.scale(size);
        let scaled = self.font.as_scaled(scale);
        let baseline = y as f32 + scaled.ascent();
        let mut caret = x as f32;
        let mut prev = None;

        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = prev {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(scale, point(caret, baseline));
            caret += scaled.h_advance(id);
            prev = Some(id);

            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                if coverage >= COVERAGE_THRESHOLD {
                    canvas.set_signed(
                        bounds.min.x as i32 + gx as i32,
                        bounds.min.y as i32 + gy as i32,
                        true,
                    );
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_font_bytes() {
        let err = TtfFont::from_bytes(b"definitely not a font".to_vec()).unwrap_err();
        assert!(matches!(err, FortunaError::Font(_)));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = TtfFont::load("/nonexistent/fortune.ttf").unwrap_err();
        match err {
            FortunaError::Font(msg) => assert!(msg.contains("/nonexistent/fortune.ttf")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
