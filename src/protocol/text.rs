//! # ESC/POS Text Styling Commands
//!
//! This module implements the text formatting commands supported by the
//! QR203-class printers.
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Justify | ESC a n | Left / center / right |
//! | Print mode | ESC ! n | Double height and/or width |
//! | Bold | ESC E n | **Emphasized** text |
//! | Underline | ESC - n | Underlined text |
//! | Line spacing | ESC 2 / ESC 3 n | Default or custom line pitch |
//!
//! ## Text Alignment
//!
//! ```text
//! Left aligned (default)    |LEFT TEXT
//! Center aligned            |  CENTER TEXT
//! Right aligned             |      RIGHT TEXT
//! ```

use serde::{Deserialize, Serialize};

use super::commands::ESC;

// ============================================================================
// JUSTIFICATION
// ============================================================================

/// Line justification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justify {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// # Select Justification (ESC a n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
///
/// - `n = 0`: Left (default)
/// - `n = 1`: Center
/// - `n = 2`: Right
///
/// Takes effect at the start of the next line.
///
/// ## Example
///
/// ```
/// use fortuna::protocol::text::{justify, Justify};
///
/// assert_eq!(justify(Justify::Center), vec![0x1B, 0x61, 0x01]);
/// ```
pub fn justify(j: Justify) -> Vec<u8> {
    vec![ESC, b'a', j as u8]
}

// ============================================================================
// PRINT MODE (FONT SCALE)
// ============================================================================

/// Character scale selected through the print mode byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontScale {
    #[default]
    Normal = 0,
    DoubleHeight = 16,
    DoubleWidth = 32,
    DoubleBoth = 48,
}

/// # Select Print Mode (ESC ! n)
///
/// Only the scale bits are used: bit 4 doubles the height, bit 5 doubles
/// the width.
///
/// | Scale | n |
/// |-------|---|
/// | Normal | 0 |
/// | Double height | 16 |
/// | Double width | 32 |
/// | Both | 48 |
///
/// ## Example
///
/// ```
/// use fortuna::protocol::text::{font_scale, FontScale};
///
/// assert_eq!(font_scale(FontScale::DoubleHeight), vec![0x1B, 0x21, 16]);
/// ```
pub fn font_scale(scale: FontScale) -> Vec<u8> {
    vec![ESC, b'!', scale as u8]
}

// ============================================================================
// EMPHASIS
// ============================================================================

/// # Bold (ESC E n)
///
/// `n = 1` turns emphasis on, `n = 0` turns it off.
pub fn bold(on: bool) -> Vec<u8> {
    vec![ESC, b'E', on as u8]
}

/// # Underline (ESC - n)
///
/// `n = 1` turns the 1-dot underline on, `n = 0` turns it off.
pub fn underline(on: bool) -> Vec<u8> {
    vec![ESC, b'-', on as u8]
}

// ============================================================================
// LINE SPACING
// ============================================================================

/// Line pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSpacing {
    /// Firmware default pitch (ESC 2)
    #[default]
    Default,
    /// Custom pitch in dots (ESC 3 n)
    Custom(u8),
}

/// # Set Line Spacing (ESC 2 / ESC 3 n)
///
/// ## Example
///
/// ```
/// use fortuna::protocol::text::{line_spacing, LineSpacing};
///
/// assert_eq!(line_spacing(LineSpacing::Default), vec![0x1B, 0x32]);
/// assert_eq!(line_spacing(LineSpacing::Custom(24)), vec![0x1B, 0x33, 24]);
/// ```
pub fn line_spacing(spacing: LineSpacing) -> Vec<u8> {
    match spacing {
        LineSpacing::Default => vec![ESC, b'2'],
        LineSpacing::Custom(dots) => vec![ESC, b'3', dots],
    }
}

// ============================================================================
// TEXT ENCODING
// ============================================================================

/// Convert text to the printer's single-byte character set.
///
/// The firmware only prints 7-bit ASCII reliably. Typographic punctuation
/// is folded to its ASCII look-alike, anything else becomes `?`.
///
/// ## Example
///
/// ```
/// use fortuna::protocol::text::to_printer_bytes;
///
/// assert_eq!(to_printer_bytes("Today\u{2019}s plan"), b"Today's plan".to_vec());
/// assert_eq!(to_printer_bytes("caf\u{e9}"), b"caf?".to_vec());
/// ```
pub fn to_printer_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            c if c.is_ascii() => c as u8,
            '\u{2018}' | '\u{2019}' => b'\'',
            '\u{201C}' | '\u{201D}' => b'"',
            '\u{2013}' | '\u{2014}' => b'-',
            '\u{00A0}' => b' ',
            _ => b'?',
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
