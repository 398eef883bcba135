//! # Fortuna - Thermal Fortune Printer
//!
//! Fortuna prints fortune-cookie slips on a 58mm ESC/POS thermal printer
//! when a lid is opened or a button is pressed. It provides:
//!
//! - **Protocol encoding**: print commands to exact ESC/POS bytes
//! - **Printer session**: line, bitmap and corner-mark printing over a UART
//! - **Text layout**: word wrap and best-fit font sizing with a footer
//! - **Rasterizing**: rotation and MSB-first 1-bit packing
//! - **Orchestration**: precomputed slips with a live text fallback
//! - **Triggers**: debounced lid switch and push button
//!
//! ## Quick Start
//!
//! ```no_run
//! use fortuna::{
//!     config::AppConfig,
//!     fortune::{FortunePrinter, assets::MemoryRegistry},
//!     printer::{PrinterConfig, PrinterSession},
//! };
//!
//! let config = AppConfig::default();
//!
//! // Open the UART printer; an error means printing is disabled
//! let mut session = PrinterSession::open(&config.uart, PrinterConfig::QR203)?;
//!
//! // No precomputed slips: prints the text with the printer font
//! let printer = FortunePrinter::new(MemoryRegistry::new(), config.fortune.clone());
//! printer.print(&mut session, Some("Adventure awaits around the corner."))?;
//!
//! # Ok::<(), fortuna::FortunaError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders |
//! | [`ir`] | Print commands, printer state and the encoder |
//! | [`transport`] | UART and in-memory byte sinks |
//! | [`printer`] | Printer configuration and session |
//! | [`layout`] | Glyph metrics, word wrap, best-fit layout |
//! | [`render`] | Canvas, rotation, packing, slips, PNG previews |
//! | [`fortune`] | Fortunes, slip assets, print orchestration |
//! | [`trigger`] | Debouncers, input pins, control loop |
//! | [`config`] | Application configuration |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! Currently tested with:
//! - GOOJPRT QR203 (58mm paper, 203 DPI, TTL serial)
//!
//! Other 58mm ESC/POS printers should work with the same configuration.

pub mod config;
pub mod error;
pub mod fortune;
pub mod ir;
pub mod layout;
pub mod printer;
pub mod protocol;
pub mod render;
pub mod transport;
pub mod trigger;

// Re-exports for convenience
pub use error::FortunaError;
pub use printer::{PrinterConfig, PrinterSession};
pub use transport::{MemoryTransport, SerialTransport, Transport};
