//! # ESC/POS Bit Image Commands
//!
//! This module implements the positioning and bit image commands used to
//! print bitmaps on 58mm printers.
//!
//! ## Coordinate System
//!
//! ```text
//! (0,0) ──────────────────────► X (horizontal, 384 dots max)
//!   │
//!   │   ████████  ← Each dot is ~0.125mm (203 DPI)
//!   │   ████████
//!   ▼
//!   Y (vertical, paper feed direction)
//! ```
//!
//! ## Bit Packing
//!
//! - Bit 7 (MSB) = leftmost dot
//! - Bit 0 (LSB) = rightmost dot
//! - 1 = black (print), 0 = white (no print)
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0xFF = 11111111 = ████████
//! ```

use super::commands::{ESC, u16_le};

/// # Set Absolute Print Position (ESC $ nL nH)
///
/// Moves the print head to `dots` from the left margin for the current line.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC $ nL nH |
/// | Hex     | 1B 24 nL nH |
///
/// ## Example
///
/// ```
/// use fortuna::protocol::graphics;
///
/// assert_eq!(graphics::absolute_position(366), vec![0x1B, 0x24, 0x6E, 0x01]);
/// ```
pub fn absolute_position(dots: u16) -> Vec<u8> {
    let [lo, hi] = u16_le(dots);
    vec![ESC, b'$', lo, hi]
}

/// # Select Bit Image Mode (ESC * m nL nH d1...dk)
///
/// Prints one row of bit image data. This firmware treats every data byte as
/// 8 horizontal dots (MSB left), so one call prints a single dot row that is
/// `row.len() * 8` dots wide.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC * m nL nH d1...dk |
/// | Hex     | 1B 2A m nL nH d1...dk |
///
/// ## Panics
///
/// If `row` is longer than 65535 bytes. The length field cannot express it
/// and truncating would desynchronize the printer's parser.
///
/// ## Example
///
/// ```
/// use fortuna::protocol::graphics;
///
/// let cmd = graphics::bit_image_row(0, &[0xFF, 0xFF, 0xFF]);
/// assert_eq!(cmd, vec![0x1B, 0x2A, 0, 3, 0, 0xFF, 0xFF, 0xFF]);
/// ```
pub fn bit_image_row(mode: u8, row: &[u8]) -> Vec<u8> {
    assert!(
        row.len() <= u16::MAX as usize,
        "bit image row of {} bytes exceeds the 16-bit length field",
        row.len()
    );

    let [lo, hi] = u16_le(row.len() as u16);
    let mut cmd = Vec::with_capacity(5 + row.len());
    cmd.extend_from_slice(&[ESC, b'*', mode, lo, hi]);
    cmd.extend_from_slice(row);
    cmd
}

// ============================================================================
// TESTS
// ============================================================================
