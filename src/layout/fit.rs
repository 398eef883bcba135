//! Best-fit font size search.
//!
//! For every candidate size in `[min_size, max_size]` the text is wrapped at
//! the target width and its widest line measured. Sizes whose widest line
//! overflows are discarded; among the rest the one with the highest fill
//! ratio (`widest / target`) wins. The first size reaching the best ratio is
//! kept, so ties go to the smaller size.
//!
//! When nothing fits (a single word wider than the target at every size)
//! the minimum size is used anyway: a slip is always printed.

use super::metrics::GlyphMetrics;
use super::wrap::wrap_pixels;

/// Outcome of [`best_fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    /// Chosen pixel size, always within the requested bounds
    pub size: u32,
    /// Text wrapped at `size`
    pub lines: Vec<String>,
    /// Widest line at `size`
    pub widest: u32,
    /// Whether `widest` is within the target width
    pub fits: bool,
}

impl FitResult {
    /// Fraction of the target width used by the widest line.
    pub fn fill(&self, target_width: u32) -> f32 {
        if target_width == 0 {
            0.0
        } else {
            self.widest as f32 / target_width as f32
        }
    }
}

/// Widest wrapped line in pixels.
fn widest_line<M: GlyphMetrics + ?Sized>(metrics: &M, lines: &[String], size: u32) -> u32 {
    lines
        .iter()
        .map(|line| metrics.text_width(line, size))
        .max()
        .unwrap_or(0)
}

/// Search `[min_size, max_size]` for the size that best fills `target_width`.
///
/// A reversed range is treated as the single size `min_size`.
pub fn best_fit<M: GlyphMetrics + ?Sized>(
    metrics: &M,
    text: &str,
    min_size: u32,
    max_size: u32,
    target_width: u32,
) -> FitResult {
    let max_size = max_size.max(min_size);
    let mut best: Option<(f32, FitResult)> = None;

    for size in min_size..=max_size {
        let lines = wrap_pixels(metrics, text, size, target_width);
        let widest = widest_line(metrics, &lines, size);
        if widest > target_width {
            continue;
        }

        let candidate = FitResult {
            size,
            lines,
            widest,
            fits: true,
        };
        let score = candidate.fill(target_width);

        match &best {
            Some((best_score, _)) if score <= *best_score => {}
            _ => best = Some((score, candidate)),
        }
    }

    match best {
        Some((score, result)) => {
            log::debug!(
                "best fit: size {} fills {:.0}% of {}px",
                result.size,
                score * 100.0,
                target_width
            );
            result
        }
        None => {
            let lines = wrap_pixels(metrics, text, min_size, target_width);
            let widest = widest_line(metrics, &lines, min_size);
            log::warn!(
                "no size in {}..={} fits {}px, using {} (widest line {}px)",
                min_size,
                max_size,
                target_width,
                min_size,
                widest
            );
            FitResult {
                size: min_size,
                lines,
                widest,
                fits: false,
            }
        }
    }
}
