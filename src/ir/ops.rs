//! # Print Commands
//!
//! This module defines the print intents the session issues. Each
//! [`PrintCommand`] is a single, atomic printer operation; [`encode`] turns
//! it into ESC/POS bytes.
//!
//! ```text
//! Session API → PrintCommand (inspectable) → encode → Bytes → Transport
//! ```
//!
//! [`encode`]: super::encode

use crate::protocol::text::{FontScale, Justify, LineSpacing};

/// Printer print intents.
///
/// Each variant maps to exactly one command byte layout. The IR can be
/// inspected in tests (`{:?}`) before it reaches the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintCommand {
    /// Reset the printer (ESC @).
    Initialize,

    /// Set line justification.
    SetJustify(Justify),

    /// Set the print mode scale bits.
    SetFontScale(FontScale),

    /// Enable/disable bold.
    SetBold(bool),

    /// Enable/disable underline.
    SetUnderline(bool),

    /// Set the line pitch.
    SetLineSpacing(LineSpacing),

    /// Text bytes, sent as-is. Include `\n` to print the line.
    Text(Vec<u8>),

    /// Print and feed `n` lines.
    Feed(u8),

    /// Move the print head to a dot offset on the current line.
    SetAbsolutePosition(u16),

    /// One row of bit image data.
    BitImageRow { mode: u8, data: Vec<u8> },

    /// Raw bytes passed through untouched.
    Raw(Vec<u8>),
}

impl PrintCommand {
    /// Absolute position from a signed dot offset.
    ///
    /// Negative offsets clamp to 0, matching what the firmware would do with
    /// a left-of-margin request.
    ///
    /// ## Panics
    ///
    /// If `dots` exceeds 65535; the offset cannot be encoded.
    pub fn absolute_position(dots: i32) -> Self {
        let dots = dots.max(0);
        assert!(
            dots <= u16::MAX as i32,
            "absolute position {} does not fit in 16 bits",
            dots
        );
        Self::SetAbsolutePosition(dots as u16)
    }

    /// A line of text terminated by LF.
    pub fn line(text: &str) -> Self {
        let mut bytes = crate::protocol::text::to_printer_bytes(text);
        bytes.push(crate::protocol::commands::LF);
        Self::Text(bytes)
    }
}

/// Printer mode state tracked by the session.
///
/// Mirrors what the firmware currently has latched so the session knows
/// which reset commands are needed before handing control back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrinterState {
    pub justify: Justify,
    pub font_scale: FontScale,
    pub bold: bool,
    pub underline: bool,
    pub line_spacing: LineSpacing,
}

impl PrinterState {
    /// Update state to reflect a command having been sent.
    pub fn apply(&mut self, cmd: &PrintCommand) {
        match cmd {
            PrintCommand::Initialize => *self = Self::default(),
            PrintCommand::SetJustify(j) => self.justify = *j,
            PrintCommand::SetFontScale(s) => self.font_scale = *s,
            PrintCommand::SetBold(on) => self.bold = *on,
            PrintCommand::SetUnderline(on) => self.underline = *on,
            PrintCommand::SetLineSpacing(s) => self.line_spacing = *s,
            PrintCommand::Text(_)
            | PrintCommand::Feed(_)
            | PrintCommand::SetAbsolutePosition(_)
            | PrintCommand::BitImageRow { .. }
            | PrintCommand::Raw(_) => {}
        }
    }

    /// Commands that bring this state back to the power-on defaults.
    ///
    /// Only fields that differ from the default produce a command.
    pub fn reset_commands(&self) -> Vec<PrintCommand> {
        let defaults = Self::default();
        let mut cmds = Vec::new();
        if self.line_spacing != defaults.line_spacing {
            cmds.push(PrintCommand::SetLineSpacing(defaults.line_spacing));
        }
        if self.justify != defaults.justify {
            cmds.push(PrintCommand::SetJustify(defaults.justify));
        }
        if self.font_scale != defaults.font_scale {
            cmds.push(PrintCommand::SetFontScale(defaults.font_scale));
        }
        if self.bold != defaults.bold {
            cmds.push(PrintCommand::SetBold(defaults.bold));
        }
        if self.underline != defaults.underline {
            cmds.push(PrintCommand::SetUnderline(defaults.underline));
        }
        cmds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_position_clamps_negative() {
        assert_eq!(
            PrintCommand::absolute_position(-20),
            PrintCommand::SetAbsolutePosition(0)
        );
        assert_eq!(
            PrintCommand::absolute_position(366),
            PrintCommand::SetAbsolutePosition(366)
        );
    }

    #[test]
    #[should_panic(expected = "does not fit in 16 bits")]
    fn test_absolute_position_overflow_panics() {
        PrintCommand::absolute_position(70_000);
    }

    #[test]
    fn test_line_appends_lf() {
        assert_eq!(PrintCommand::line("hi"), PrintCommand::Text(b"hi\n".to_vec()));
    }

    #[test]
    fn test_state_tracks_style_commands() {
        let mut state = PrinterState::default();
        state.apply(&PrintCommand::SetJustify(Justify::Center));
        state.apply(&PrintCommand::SetBold(true));
        state.apply(&PrintCommand::Feed(2));
        assert_eq!(state.justify, Justify::Center);
        assert!(state.bold);

        state.apply(&PrintCommand::Initialize);
        assert_eq!(state, PrinterState::default());
    }

    #[test]
    fn test_reset_commands_only_for_dirty_fields() {
        assert!(PrinterState::default().reset_commands().is_empty());

        let state = PrinterState {
            font_scale: FontScale::DoubleHeight,
            underline: true,
            ..Default::default()
        };
        assert_eq!(
            state.reset_commands(),
            vec![
                PrintCommand::SetFontScale(FontScale::Normal),
                PrintCommand::SetUnderline(false),
            ]
        );
    }
}
