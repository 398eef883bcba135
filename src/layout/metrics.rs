//! Glyph metrics boundary.
//!
//! The layout engine only needs two numbers from a font: how wide a string
//! is at a size, and how tall a line is. Drawing is a separate trait so the
//! layout can be computed (and tested) without rasterizing anything.

use crate::render::canvas::MonoCanvas;

/// Text measurement at a pixel size.
pub trait GlyphMetrics {
    /// Rendered width of `text` in pixels.
    fn text_width(&self, text: &str, size: u32) -> u32;

    /// Representative line height in pixels (ascender to descender).
    fn line_height(&self, size: u32) -> u32;
}

/// Text drawing onto a 1-bit canvas.
pub trait GlyphRasterizer: GlyphMetrics {
    /// Draw `text` with its top-left corner at (x, y).
    fn draw_text(&self, canvas: &mut MonoCanvas, x: i32, y: i32, text: &str, size: u32);
}

impl<T: GlyphMetrics + ?Sized> GlyphMetrics for &T {
    fn text_width(&self, text: &str, size: u32) -> u32 {
        (**self).text_width(text, size)
    }

    fn line_height(&self, size: u32) -> u32 {
        (**self).line_height(size)
    }
}

impl<T: GlyphRasterizer + ?Sized> GlyphRasterizer for &T {
    fn draw_text(&self, canvas: &mut MonoCanvas, x: i32, y: i32, text: &str, size: u32) {
        (**self).draw_text(canvas, x, y, text, size)
    }
}

/// Fixed-advance font that draws every non-space character as a solid box.
///
/// Each character advances `size / 2` pixels (at least 1) and a line is
/// `size` pixels tall. Useful for previews without a font file and for
/// deterministic layout tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockFont;

impl BlockFont {
    fn advance(size: u32) -> u32 {
        (size / 2).max(1)
    }
}

impl GlyphMetrics for BlockFont {
    fn text_width(&self, text: &str, size: u32) -> u32 {
        text.chars().count() as u32 * Self::advance(size)
    }

    fn line_height(&self, size: u32) -> u32 {
        size
    }
}

impl GlyphRasterizer for BlockFont {
    fn draw_text(&self, canvas: &mut MonoCanvas, x: i32, y: i32, text: &str, size: u32) {
        let advance = Self::advance(size) as i32;
        let glyph_w = (advance - 1).max(1);
        // Leave a quarter of the line for the descender gap
        let glyph_h = (size as i32 * 3 / 4).max(1);

        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let gx = x + i as i32 * advance;
            canvas.fill_rect(gx, y, gx + glyph_w - 1, y + glyph_h - 1);
        }
    }
}
