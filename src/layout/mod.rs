//! # Text Layout Engine
//!
//! Turns a fortune into positioned lines for a fixed-width canvas.
//!
//! ## Composite layout
//!
//! Text is split at its first blank line into a primary section and an
//! optional footer (the lucky numbers):
//!
//! ```text
//!   ┌──────────────────────────────┐
//!   │   Adventure awaits around    │  primary, best-fit size
//!   │         the corner.          │  each line: height + leading
//!   │                              │  spacing (only with a footer)
//!   │  Lucky numbers: 3, 17, 42    │  footer, 60% of primary size
//!   └──────────────────────────────┘
//! ```
//!
//! Every line is centered on its own. The block as a whole is centered
//! vertically on the canvas by [`LayoutResult::top_offset`].
//!
//! ## Example
//!
//! ```
//! use fortuna::layout::{self, BlockFont};
//!
//! let result = layout::layout(&BlockFont, "Good things come.\n\nLucky numbers: 1, 2", 10, 40, 200);
//! assert!(result.footer_size.is_some());
//! assert!(result.primary_size >= 10 && result.primary_size <= 40);
//! ```

pub mod fit;
pub mod metrics;
pub mod ttf;
pub mod wrap;

pub use fit::{FitResult, best_fit};
pub use metrics::{BlockFont, GlyphMetrics, GlyphRasterizer};
pub use ttf::TtfFont;
pub use wrap::{wrap_chars, wrap_pixels};

/// Split text at its first blank line into (primary, footer).
///
/// Blank lines before the first text are not separators. The footer is
/// `None` when there is no blank line or nothing follows it.
pub fn split_sections(text: &str) -> (&str, Option<&str>) {
    let mut offset = 0;
    let mut seen_content = false;

    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            if seen_content {
                let primary = text[..offset].trim_end();
                let rest = text[offset + line.len()..].trim();
                return (primary, (!rest.is_empty()).then_some(rest));
            }
        } else {
            seen_content = true;
        }
        offset += line.len();
    }

    (text.trim_end(), None)
}

/// Which font a laid-out line is set in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontVariant {
    Primary,
    Footer,
}

/// One wrapped line with its measured width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutLine {
    pub text: String,
    pub variant: FontVariant,
    pub width: u32,
}

/// A line positioned on a canvas, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedLine<'a> {
    pub text: &'a str,
    pub size: u32,
    pub x: i32,
    pub y: i32,
}

/// Tuning knobs for the composite layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Footer size as a fraction of the primary size
    pub footer_ratio: f32,
    /// Smallest footer size in pixels
    pub footer_min_size: u32,
    /// Extra pixels below every line
    pub leading: u32,
    /// Smallest gap between primary and footer blocks
    pub min_spacing: u32,
    /// Gap as a fraction of the primary line height
    pub spacing_ratio: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            footer_ratio: 0.6,
            footer_min_size: 12,
            leading: 2,
            min_spacing: 8,
            spacing_ratio: 0.5,
        }
    }
}

/// Computed layout for one slip.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub primary_size: u32,
    pub footer_size: Option<u32>,
    /// Primary lines first, then footer lines
    pub lines: Vec<LayoutLine>,
    pub primary_line_height: u32,
    pub footer_line_height: u32,
    /// Gap between the blocks, zero without a footer
    pub spacing: u32,
    pub leading: u32,
    pub total_height: u32,
    /// Whether the primary block fits the target width
    pub fits: bool,
}

impl LayoutResult {
    /// Y of the first line when the block is centered in `canvas_height`.
    pub fn top_offset(&self, canvas_height: u32) -> u32 {
        canvas_height.saturating_sub(self.total_height) / 2
    }

    pub fn primary_lines(&self) -> impl Iterator<Item = &LayoutLine> {
        self.lines.iter().filter(|l| l.variant == FontVariant::Primary)
    }

    pub fn footer_lines(&self) -> impl Iterator<Item = &LayoutLine> {
        self.lines.iter().filter(|l| l.variant == FontVariant::Footer)
    }

    /// Position every line on a `canvas_width` × `canvas_height` canvas.
    pub fn place(&self, canvas_width: u32, canvas_height: u32) -> Vec<PlacedLine<'_>> {
        let mut y = self.top_offset(canvas_height) as i32;
        let mut placed = Vec::with_capacity(self.lines.len());
        let mut in_footer = false;

        for line in &self.lines {
            let (size, height) = match line.variant {
                FontVariant::Primary => (self.primary_size, self.primary_line_height),
                FontVariant::Footer => {
                    if !in_footer {
                        y += self.spacing as i32;
                        in_footer = true;
                    }
                    (
                        self.footer_size.unwrap_or(self.primary_size),
                        self.footer_line_height,
                    )
                }
            };

            placed.push(PlacedLine {
                text: &line.text,
                size,
                x: (canvas_width as i32 - line.width as i32).div_euclid(2),
                y,
            });
            y += (height + self.leading) as i32;
        }
        placed
    }
}

/// Lay out `text` with the best-fit primary size in `[min_size, max_size]`.
pub fn layout<M: GlyphMetrics + ?Sized>(
    metrics: &M,
    text: &str,
    min_size: u32,
    max_size: u32,
    target_width: u32,
) -> LayoutResult {
    layout_with(
        metrics,
        text,
        min_size,
        max_size,
        target_width,
        &LayoutOptions::default(),
    )
}

/// Lay out `text` at a fixed primary size.
pub fn layout_at<M: GlyphMetrics + ?Sized>(
    metrics: &M,
    text: &str,
    size: u32,
    target_width: u32,
) -> LayoutResult {
    layout(metrics, text, size, size, target_width)
}

/// [`layout`] with explicit options.
pub fn layout_with<M: GlyphMetrics + ?Sized>(
    metrics: &M,
    text: &str,
    min_size: u32,
    max_size: u32,
    target_width: u32,
    options: &LayoutOptions,
) -> LayoutResult {
    let (primary, footer) = split_sections(text);
    let fit = best_fit(metrics, primary, min_size, max_size, target_width);
    let size = fit.size;
    let primary_line_height = metrics.line_height(size);

    let mut lines: Vec<LayoutLine> = fit
        .lines
        .into_iter()
        .map(|text| LayoutLine {
            width: metrics.text_width(&text, size),
            text,
            variant: FontVariant::Primary,
        })
        .collect();
    let primary_count = lines.len() as u32;

    let footer_size =
        ((size as f32 * options.footer_ratio) as u32).max(options.footer_min_size);
    let footer_lines = footer
        .map(|f| wrap_pixels(metrics, f, footer_size, target_width))
        .unwrap_or_default();
    let has_footer = !footer_lines.is_empty();

    let footer_line_height = if has_footer {
        metrics.line_height(footer_size)
    } else {
        0
    };
    let spacing = if has_footer {
        ((primary_line_height as f32 * options.spacing_ratio) as u32).max(options.min_spacing)
    } else {
        0
    };

    let footer_count = footer_lines.len() as u32;
    lines.extend(footer_lines.into_iter().map(|text| LayoutLine {
        width: metrics.text_width(&text, footer_size),
        text,
        variant: FontVariant::Footer,
    }));

    let total_height = primary_count * (primary_line_height + options.leading)
        + spacing
        + footer_count * (footer_line_height + options.leading);

    log::debug!(
        "layout: primary {}px x {} lines, footer {:?} x {} lines, height {}",
        size,
        primary_count,
        has_footer.then_some(footer_size),
        footer_count,
        total_height
    );

    LayoutResult {
        primary_size: size,
        footer_size: has_footer.then_some(footer_size),
        lines,
        primary_line_height,
        footer_line_height,
        spacing,
        leading: options.leading,
        total_height,
        fits: fit.fits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sections() {
        assert_eq!(split_sections("hello"), ("hello", None));
        assert_eq!(
            split_sections("hello\n\nLucky numbers: 1, 2"),
            ("hello", Some("Lucky numbers: 1, 2"))
        );
        assert_eq!(split_sections("a\nb\n  \nc\n\nd"), ("a\nb", Some("c\n\nd")));
        assert_eq!(split_sections("hello\n\n"), ("hello", None));
        assert_eq!(split_sections(""), ("", None));
    }

    #[test]
    fn test_leading_blank_line_is_not_a_separator() {
        assert_eq!(split_sections("\nhello"), ("\nhello", None));
        assert_eq!(
            split_sections("\n\nLucky numbers: 1, 2"),
            ("\n\nLucky numbers: 1, 2", None)
        );
        assert_eq!(
            split_sections(" \n\nhello\n\nLucky numbers: 1, 2"),
            (" \n\nhello", Some("Lucky numbers: 1, 2"))
        );
    }

    #[test]
    fn test_primary_only_height() {
        // BlockFont size 20: 10px per char, line height 20
        let result = layout_at(&BlockFont, "one two three four five", 20, 100);
        assert_eq!(result.primary_lines().count(), 3);
        assert_eq!(result.footer_size, None);
        assert_eq!(result.spacing, 0);
        assert_eq!(result.total_height, 3 * (20 + 2));
    }

    #[test]
    fn test_footer_size_spacing_and_height() {
        let result = layout_at(&BlockFont, "abc\n\nLucky numbers: 1", 40, 1000);
        assert_eq!(result.primary_size, 40);
        assert_eq!(result.footer_size, Some(24));
        assert_eq!(result.spacing, 20);
        assert_eq!(result.footer_lines().count(), 1);
        assert_eq!(result.total_height, (40 + 2) + 20 + (24 + 2));
    }

    #[test]
    fn test_footer_floors() {
        // 0.6 * 14 = 8 -> 12; 0.5 * 14 = 7 -> 8
        let result = layout_at(&BlockFont, "abc\n\nxyz", 14, 1000);
        assert_eq!(result.footer_size, Some(12));
        assert_eq!(result.spacing, 8);
    }

    #[test]
    fn test_empty_text_has_zero_height() {
        let result = layout(&BlockFont, "", 18, 72, 300);
        assert!(result.lines.is_empty());
        assert_eq!(result.total_height, 0);
        assert_eq!(result.top_offset(120), 60);
    }

    #[test]
    fn test_top_offset_saturates() {
        let result = layout_at(&BlockFont, "a b c d e f", 20, 10);
        assert!(result.total_height > 50);
        assert_eq!(result.top_offset(50), 0);
    }

    #[test]
    fn test_place_centers_lines_and_stacks_blocks() {
        let result = layout_at(&BlockFont, "abcd\n\nxy", 20, 200);
        // primary: 40px wide, 20 tall; footer size 12: 12px wide, 12 tall
        let placed = result.place(200, 100);
        assert_eq!(placed.len(), 2);

        let top = result.top_offset(100) as i32;
        assert_eq!(placed[0].x, 80);
        assert_eq!(placed[0].y, top);
        assert_eq!(placed[0].size, 20);

        assert_eq!(placed[1].x, (200 - 12) / 2);
        assert_eq!(placed[1].y, top + 22 + result.spacing as i32);
        assert_eq!(placed[1].size, 12);
    }
}
