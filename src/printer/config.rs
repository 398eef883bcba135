//! # Printer Model
//!
//! Physical limits of the printer a session talks to. Fortune slips are
//! rendered for the narrow edge of a 58mm roll, so the only model shipped
//! is the GOOJPRT QR203 panel printer.
//!
//! ```
//! use fortuna::printer::PrinterConfig;
//!
//! let qr203 = PrinterConfig::QR203;
//! assert_eq!(qr203.width_bytes(), 48);
//! assert_eq!(qr203.right_mark_dot(18, 0), 366);
//! ```

/// Print area and text geometry of one printer model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterConfig {
    pub name: &'static str,

    /// Printable dots across the paper
    pub width_dots: u16,

    /// Dots per inch (203 dpi is 8 dots per mm)
    pub dpi: u16,

    /// Characters of the built-in font on one line at normal scale
    pub chars_per_line: u8,
}

impl PrinterConfig {
    /// GOOJPRT QR203: 58mm paper, 48mm printable, TTL serial.
    pub const QR203: Self = Self {
        name: "GOOJPRT QR203",
        width_dots: 384,
        dpi: 203,
        chars_per_line: 32,
    };

    /// Bytes in one full-width bit-image row.
    pub fn width_bytes(&self) -> usize {
        self.width_dots as usize / 8
    }

    /// Dot where a right-hand corner mark of `block_width` starts so that it
    /// ends `right_margin` dots before the edge. May be negative when the
    /// mark does not fit; the encoder clamps it to 0.
    pub fn right_mark_dot(&self, block_width: u16, right_margin: u16) -> i32 {
        self.width_dots as i32 - right_margin as i32 - block_width as i32
    }

    /// Whether a bitmap this many dots wide prints without wrapping.
    pub fn fits_width(&self, width: usize) -> bool {
        width <= self.width_dots as usize
    }

    pub fn width_mm(&self) -> f32 {
        self.width_dots as f32 * 25.4 / self.dpi as f32
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::QR203
    }
}
