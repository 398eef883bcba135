//! # Print Command IR
//!
//! This module provides the command layer between the printer session and
//! raw ESC/POS bytes.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────┐     ┌───────────┐
//! │   Session   │ ──► │ PrintCommand │ ──► │  encode  │ ──► │ Transport │
//! │ (stateful)  │     │ (inspectable)│     │ (bytes)  │     │           │
//! └─────────────┘     └──────────────┘     └──────────┘     └───────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use fortuna::ir::{encode_all, PrintCommand};
//! use fortuna::protocol::text::{FontScale, Justify};
//!
//! let job = vec![
//!     PrintCommand::SetJustify(Justify::Center),
//!     PrintCommand::SetFontScale(FontScale::DoubleHeight),
//!     PrintCommand::line("GOOD LUCK"),
//!     PrintCommand::SetFontScale(FontScale::Normal),
//!     PrintCommand::SetJustify(Justify::Left),
//!     PrintCommand::Feed(3),
//! ];
//!
//! let bytes = encode_all(&job);
//! assert_eq!(&bytes[..3], &[0x1B, b'a', 1]);
//! ```

mod codegen;
mod ops;

pub use codegen::{encode, encode_all};
pub use ops::*;
