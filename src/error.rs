//! # Error Types
//!
//! This module defines error types used throughout the fortuna library.
//!
//! Failures split into two groups:
//!
//! - **Caller contract violations** inside the encoder and rasterizer (an
//!   oversized bit-image row, an out-of-range dot offset). These panic, since
//!   emitting corrupt bytes would damage the physical output.
//! - **Runtime failures** (printer missing, bad asset, write error). These are
//!   returned as [`FortunaError`] and, when they happen inside a print started
//!   from the control loop, end up as a logged no-op.

use thiserror::Error;

/// Main error type for fortuna operations
#[derive(Debug, Error)]
pub enum FortunaError {
    /// The printer transport could not be opened or initialized.
    ///
    /// Fatal to printing for that session: callers disable printing instead
    /// of retrying.
    #[error("Printer unavailable: {0}")]
    TransportUnavailable(String),

    /// A write or flush failed on an open transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// Bitmap dimensions that the printer cannot accept
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// A precomputed slip is missing or corrupt
    #[error("Asset unavailable: {0}")]
    AssetUnavailable(String),

    /// Any failure while printing a fortune
    #[error("Print job failed: {0}")]
    PrintJobFailed(String),

    /// Font file could not be parsed
    #[error("Font error: {0}")]
    Font(String),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// Invalid configuration
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
