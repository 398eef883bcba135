//! # Printer Module
//!
//! This module provides printer configurations and the stateful session
//! that drives a printer over a transport.
//!
//! ## Modules
//!
//! - [`config`]: Print area of the supported printer model
//! - [`session`]: Line, paragraph and bitmap printing API

pub mod config;
pub mod session;

pub use config::PrinterConfig;
pub use session::PrinterSession;
