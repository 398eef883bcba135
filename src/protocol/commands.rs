//! # ESC/POS Printer Commands
//!
//! This module implements the basic ESC/POS commands understood by the
//! GOOJPRT QR203 and similar 58mm thermal printers.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`
//! - Two bytes: `ESC @`, `ESC 2`
//! - Multi-byte with parameters: `ESC d n`, `ESC * m nL nH d1...dk`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Every command this printer family accepts begins with ESC (0x1B).
pub const ESC: u8 = 0x1B;

/// LF (Line Feed) - Print the line buffer and advance one line
pub const LF: u8 = 0x0A;

/// Feed one line (ESC d 1)
///
/// Hand-written shortcut for the most common feed. Byte-identical to
/// `feed_lines(1)`.
pub const FEED_1_LINE: [u8; 3] = [ESC, b'd', 1];

/// Feed three lines (ESC d 3)
///
/// Hand-written shortcut, byte-identical to `feed_lines(3)`.
pub const FEED_3_LINES: [u8; 3] = [ESC, b'd', 3];

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Clears the print buffer and resets the printer to its power-on mode.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
///
/// ## Example
///
/// ```
/// use fortuna::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// PAPER FEED COMMANDS
// ============================================================================

/// # Print and Feed n Lines (ESC d n)
///
/// Prints the line buffer and feeds `n` lines.
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC d n  |
/// | Hex     | 1B 64 n  |
/// | Decimal | 27 100 n |
///
/// Counts of 1 and 3 go through the fixed shortcuts; every path produces
/// the same bytes.
///
/// ## Example
///
/// ```
/// use fortuna::protocol::commands;
///
/// assert_eq!(commands::feed_lines(5), vec![0x1B, 0x64, 5]);
/// assert_eq!(commands::feed_lines(3), vec![0x1B, 0x64, 3]);
/// ```
#[inline]
pub fn feed_lines(n: u8) -> Vec<u8> {
    match n {
        1 => FEED_1_LINE.to_vec(),
        3 => FEED_3_LINES.to_vec(),
        n => vec![ESC, b'd', n],
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// ## Example
///
/// ```
/// use fortuna::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(384), [0x80, 0x01]); // 384 = 0x0180
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        assert_eq!(init(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_feed_lines() {
        assert_eq!(feed_lines(0), vec![0x1B, 0x64, 0x00]);
        assert_eq!(feed_lines(5), vec![0x1B, 0x64, 0x05]);
        assert_eq!(feed_lines(255), vec![0x1B, 0x64, 0xFF]);
    }

    #[test]
    fn test_feed_shortcuts_match_general_form() {
        assert_eq!(feed_lines(1), vec![ESC, b'd', 1]);
        assert_eq!(feed_lines(3), vec![ESC, b'd', 3]);
        assert_eq!(FEED_1_LINE.to_vec(), vec![0x1B, 0x64, 0x01]);
        assert_eq!(FEED_3_LINES.to_vec(), vec![0x1B, 0x64, 0x03]);
    }

    #[test]
    fn test_u16_le() {
        assert_eq!(u16_le(0x0000), [0x00, 0x00]);
        assert_eq!(u16_le(0x00FF), [0xFF, 0x00]);
        assert_eq!(u16_le(0xFF00), [0x00, 0xFF]);
        assert_eq!(u16_le(0x1234), [0x34, 0x12]);
        assert_eq!(u16_le(384), [0x80, 0x01]); // 58mm print width
    }
}
