//! # Slip Rendering
//!
//! Renders one fortune into a packed bitmap, end to end:
//!
//! 1. Truncate the canvas width to a multiple of 8
//! 2. Lay out the text inside the horizontal margins (fixed or best-fit size)
//! 3. Pick the canvas height (fixed, or derived from the content)
//! 4. Draw every line centered, then burn the corner index marks
//! 5. Rotate, crop and pack
//!
//! The result is what the asset generator stores and what the printer
//! session's `print_bitmap` consumes.

use crate::error::FortunaError;
use crate::layout::{self, GlyphRasterizer, LayoutResult};

use super::canvas::MonoCanvas;
use super::pack::{PackedBitmap, rasterize};
use super::rotate::Rotation;

/// Minimum canvas height when the height follows the content.
const MIN_AUTO_HEIGHT: u32 = 60;
/// Minimum vertical padding around the text block.
const MIN_PAD_Y: u32 = 12;

/// How the primary font size is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSizing {
    Fixed(u32),
    /// Best-fit search over an inclusive range
    Auto { min: u32, max: u32 },
}

/// Slip geometry and rendering options.
#[derive(Debug, Clone, PartialEq)]
pub struct SlipOptions {
    /// Canvas width before rotation (truncated to a multiple of 8)
    pub width: u32,
    /// Canvas height before rotation, ignored with `auto_height`
    pub height: u32,
    pub auto_height: bool,
    /// Horizontal margin on each side as a fraction of the width
    pub margin: f32,
    pub sizing: FontSizing,
    pub rotation: Rotation,
    pub block_width: u32,
    pub block_height: u32,
}

impl Default for SlipOptions {
    fn default() -> Self {
        Self {
            width: 384,
            height: 120,
            auto_height: false,
            margin: 0.06,
            sizing: FontSizing::Fixed(28),
            rotation: Rotation::Deg90,
            block_width: 18,
            block_height: 10,
        }
    }
}

impl SlipOptions {
    /// Settings used for batch generation of the built-in slips.
    pub fn batch() -> Self {
        Self {
            width: 650,
            height: 364,
            margin: 0.04,
            sizing: FontSizing::Auto { min: 24, max: 80 },
            ..Self::default()
        }
    }
}

/// A rendered slip and the layout it was drawn from.
#[derive(Debug, Clone)]
pub struct RenderedSlip {
    pub bitmap: PackedBitmap,
    pub layout: LayoutResult,
    /// Canvas height before rotation
    pub canvas_height: u32,
}

/// Render `text` into a packed, rotated slip bitmap.
pub fn render_slip<F: GlyphRasterizer + ?Sized>(
    font: &F,
    text: &str,
    options: &SlipOptions,
) -> Result<RenderedSlip, FortunaError> {
    let width = options.width - options.width % 8;
    if width == 0 {
        return Err(FortunaError::InvalidDimensions(format!(
            "slip width {} is narrower than one byte",
            options.width
        )));
    }

    let margin_x = (width as f32 * options.margin.max(0.0)) as u32;
    let text_width = width.saturating_sub(2 * margin_x);

    let result = match options.sizing {
        FontSizing::Fixed(size) => layout::layout_at(font, text, size, text_width),
        FontSizing::Auto { min, max } => layout::layout(font, text, min, max, text_width),
    };

    let pad_y = ((result.primary_line_height as f32 * 0.6) as u32).max(MIN_PAD_Y);
    let height = if options.auto_height {
        (result.total_height + 2 * pad_y + 2 * options.block_height).max(MIN_AUTO_HEIGHT)
    } else {
        options.height
    };
    if height == 0 {
        return Err(FortunaError::InvalidDimensions(
            "slip height must be positive".to_string(),
        ));
    }

    let mut canvas = MonoCanvas::new(width as usize, height as usize);
    for line in result.place(width, height) {
        font.draw_text(&mut canvas, line.x, line.y, line.text, line.size);
    }
    canvas.burn_corner_marks(options.block_width as usize, options.block_height as usize);

    let bitmap = rasterize(&canvas, options.rotation);
    log::debug!(
        "rendered slip {}x{} -> {}x{} ({} bytes, size {})",
        width,
        height,
        bitmap.width,
        bitmap.height,
        bitmap.data.len(),
        result.primary_size
    );

    Ok(RenderedSlip {
        bitmap,
        layout: result,
        canvas_height: height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::BlockFont;

    fn unrotated() -> SlipOptions {
        SlipOptions {
            rotation: Rotation::Deg0,
            ..SlipOptions::default()
        }
    }

    #[test]
    fn test_fixed_geometry_unrotated() {
        let slip = render_slip(&BlockFont, "Hello", &unrotated()).unwrap();
        assert_eq!(slip.bitmap.width, 384);
        assert_eq!(slip.bitmap.height, 120);
        assert_eq!(slip.bitmap.data.len(), 48 * 120);
    }

    #[test]
    fn test_rotation_swaps_and_crops() {
        // 120 rows become the width, already byte aligned
        let slip = render_slip(&BlockFont, "Hello", &SlipOptions::default()).unwrap();
        assert_eq!(slip.bitmap.width, 120);
        assert_eq!(slip.bitmap.height, 384);

        // 100 rows become a 96-wide bitmap
        let options = SlipOptions {
            height: 100,
            ..SlipOptions::default()
        };
        let slip = render_slip(&BlockFont, "Hello", &options).unwrap();
        assert_eq!(slip.bitmap.width, 96);
        assert_eq!(slip.bitmap.data.len(), 12 * 384);
    }

    #[test]
    fn test_width_truncated_to_byte_multiple() {
        let options = SlipOptions {
            width: 390,
            ..unrotated()
        };
        let slip = render_slip(&BlockFont, "Hi", &options).unwrap();
        assert_eq!(slip.bitmap.width, 384);
    }

    #[test]
    fn test_corner_marks_present_on_empty_text() {
        let slip = render_slip(&BlockFont, "", &unrotated()).unwrap();
        let bm = &slip.bitmap;
        assert!(bm.is_black(0, 0));
        assert!(bm.is_black(383, 0));
        assert!(bm.is_black(0, 119));
        assert!(bm.is_black(383, 119));
        assert!(!bm.is_black(192, 60));
        // only the four 19x11 marks
        let ink: usize = bm.data.iter().map(|b| b.count_ones() as usize).sum();
        assert_eq!(ink, 4 * 19 * 11);
    }

    #[test]
    fn test_auto_height_follows_content() {
        let options = SlipOptions {
            auto_height: true,
            sizing: FontSizing::Fixed(20),
            ..unrotated()
        };
        let slip = render_slip(&BlockFont, "one line", &options).unwrap();
        // total 22, pad max(12, 12) = 12, blocks 2 * 10
        assert_eq!(slip.canvas_height, (22 + 24 + 20).max(60));
        assert_eq!(slip.bitmap.height, 66);

        let slip = render_slip(&BlockFont, "", &options).unwrap();
        assert_eq!(slip.canvas_height, 60);
    }

    #[test]
    fn test_text_is_drawn_between_margins() {
        let options = SlipOptions {
            sizing: FontSizing::Fixed(20),
            ..unrotated()
        };
        let slip = render_slip(&BlockFont, "abc", &options).unwrap();
        // 30px wide, centered on 384 -> x in 177..207
        let row = slip.layout.top_offset(120) as usize;
        assert!(slip.bitmap.is_black(177, row));
        assert!(!slip.bitmap.is_black(176, row));
    }

    #[test]
    fn test_auto_size_within_bounds() {
        let options = SlipOptions::batch();
        let text = "You will commit a very small crime against productivity.\n\nLucky numbers: 4, 8, 15, 16, 23, 42";
        let slip = render_slip(&BlockFont, text, &options).unwrap();
        assert!((24..=80).contains(&slip.layout.primary_size));
        assert_eq!(slip.bitmap.width % 8, 0);
        assert_eq!(slip.bitmap.height, 648);
    }

    #[test]
    fn test_zero_width_rejected() {
        let options = SlipOptions {
            width: 7,
            ..SlipOptions::default()
        };
        assert!(matches!(
            render_slip(&BlockFont, "x", &options),
            Err(FortunaError::InvalidDimensions(_))
        ));
    }
}
