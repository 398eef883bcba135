//! # Printer Transport Layer
//!
//! This module provides the byte sinks printer sessions write to.
//!
//! ## Available Transports
//!
//! - [`serial`]: UART device node in raw mode (Linux)
//! - [`MemoryTransport`]: records writes in memory, for tests and dry runs
//!
//! Writes are blocking: `write_all` returns once the bytes have been handed
//! to the device, so consecutive calls never interleave.

pub mod serial;

pub use serial::SerialTransport;

use crate::error::FortunaError;

/// A blocking byte sink connected to a printer.
pub trait Transport {
    /// Send `data` to the printer, returning once it has been written.
    fn write_all(&mut self, data: &[u8]) -> Result<(), FortunaError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write_all(&mut self, data: &[u8]) -> Result<(), FortunaError> {
        (**self).write_all(data)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write_all(&mut self, data: &[u8]) -> Result<(), FortunaError> {
        (**self).write_all(data)
    }
}

/// # In-Memory Transport
///
/// Keeps every `write_all` call as its own chunk, so tests can assert on
/// command boundaries as well as on the flattened byte stream.
///
/// ## Example
///
/// ```
/// use fortuna::transport::{MemoryTransport, Transport};
///
/// let mut transport = MemoryTransport::new();
/// transport.write_all(&[0x1B, 0x40])?;
/// transport.write_all(b"hi\n")?;
///
/// assert_eq!(transport.writes().len(), 2);
/// assert_eq!(transport.bytes(), vec![0x1B, 0x40, b'h', b'i', b'\n']);
/// # Ok::<(), fortuna::error::FortunaError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryTransport {
    writes: Vec<Vec<u8>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every write call, in order.
    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    /// All written bytes, concatenated.
    pub fn bytes(&self) -> Vec<u8> {
        self.writes.concat()
    }

    /// Forget everything written so far.
    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl Transport for MemoryTransport {
    fn write_all(&mut self, data: &[u8]) -> Result<(), FortunaError> {
        self.writes.push(data.to_vec());
        Ok(())
    }
}
