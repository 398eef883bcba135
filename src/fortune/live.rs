//! Live text slips, printed with the printer's own font when no bitmap
//! asset is available.
//!
//! ```text
//!   feed(lead)
//!   ██                       ██   border_rows × corner blocks
//!   feed(gap)
//!        Adventure awaits          double height, centered,
//!        around the corner.        chars_per_line per line
//!   feed(gap)
//!   ██                       ██
//!   feed(max(pad_base - pad_per_line × lines, pad_floor))
//! ```

use serde::{Deserialize, Serialize};

use crate::error::FortunaError;
use crate::ir::PrintCommand;
use crate::layout::wrap_chars;
use crate::printer::PrinterSession;
use crate::protocol::text::{FontScale, Justify};
use crate::transport::Transport;

/// Geometry of a live text slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveSlipStyle {
    /// Wrap width in characters
    pub chars_per_line: usize,
    pub block_width_px: u16,
    /// Corner block lines at the top and the bottom
    pub border_rows: u8,
    /// Blank lines before the top border
    pub lead_feed: u8,
    /// Blank lines between the borders and the text
    pub gap_feed: u8,
    pub pad_base: u8,
    pub pad_per_line: u8,
    /// Never feed fewer lines than this after the slip
    pub pad_floor: u8,
    pub left_margin_dots: u16,
    pub right_margin_dots: u16,
}

impl Default for LiveSlipStyle {
    fn default() -> Self {
        Self {
            chars_per_line: 28,
            block_width_px: 18,
            border_rows: 2,
            lead_feed: 2,
            gap_feed: 1,
            pad_base: 18,
            pad_per_line: 2,
            pad_floor: 8,
            left_margin_dots: 0,
            right_margin_dots: 0,
        }
    }
}

impl LiveSlipStyle {
    /// Trailing feed for a slip of `line_count` text lines.
    pub fn pad_lines(&self, line_count: usize) -> u8 {
        let used = line_count.saturating_mul(self.pad_per_line as usize);
        let pad = (self.pad_base as usize).saturating_sub(used);
        // pad <= pad_base, so this always fits
        pad.max(self.pad_floor as usize) as u8
    }

    fn border<T: Transport>(&self, session: &mut PrinterSession<T>) -> Result<(), FortunaError> {
        session.print_corner_blocks(
            self.block_width_px,
            self.border_rows,
            self.left_margin_dots,
            self.right_margin_dots,
        )
    }
}

/// Print `text` as a framed, double-height slip. Returns the wrapped lines.
pub fn print_live<T: Transport>(
    session: &mut PrinterSession<T>,
    text: &str,
    style: &LiveSlipStyle,
) -> Result<Vec<String>, FortunaError> {
    let lines = wrap_chars(text, style.chars_per_line);

    session.feed(style.lead_feed)?;
    style.border(session)?;
    session.feed(style.gap_feed)?;

    session.issue(&PrintCommand::SetFontScale(FontScale::DoubleHeight))?;
    for line in &lines {
        session.print_line(line, Justify::Center)?;
    }
    session.issue(&PrintCommand::SetFontScale(FontScale::Normal))?;

    session.feed(style.gap_feed)?;
    style.border(session)?;
    session.feed(style.pad_lines(lines.len()))?;

    log::info!("printed live slip ({} lines)", lines.len());
    Ok(lines)
}
