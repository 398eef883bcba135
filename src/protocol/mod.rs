//! # ESC/POS Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/POS dialect
//! spoken by 58mm thermal printers such as the GOOJPRT QR203.
//!
//! ## Module Structure
//!
//! - [`commands`]: Basic printer commands (init, feed)
//! - [`graphics`]: Absolute positioning and bit image rows
//! - [`text`]: Text styling (justification, print mode, bold, underline)
//!
//! ## Usage Example
//!
//! ```
//! use fortuna::protocol::{commands, graphics, text};
//!
//! let mut data = Vec::new();
//!
//! data.extend(text::justify(text::Justify::Center));
//! data.extend(text::font_scale(text::FontScale::DoubleHeight));
//! data.extend(b"FORTUNE\n");
//! data.extend(text::font_scale(text::FontScale::Normal));
//! data.extend(text::justify(text::Justify::Left));
//!
//! // A 16-dot black mark
//! data.extend(graphics::bit_image_row(0, &[0xFF, 0xFF]));
//! data.push(commands::LF);
//!
//! data.extend(commands::feed_lines(3));
//! ```

pub mod commands;
pub mod graphics;
pub mod text;
