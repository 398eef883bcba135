//! # UART Serial Transport
//!
//! This module talks to the printer over its TTL serial port, exposed by
//! the host as a TTY device node (for example `/dev/ttyS1` on a single-board
//! computer, or `/dev/ttyUSB0` through an adapter).
//!
//! ## Wiring
//!
//! ```text
//! Host TX ──────► Printer RX
//! Host RX ◄────── Printer TX
//! GND ─────────── GND
//! ```
//!
//! ## TTY Configuration
//!
//! The device is opened in raw mode so binary data is transmitted without
//! modification:
//!
//! - **No input processing**: Disable IGNBRK, BRKINT, PARMRK, ISTRIP, etc.
//! - **No output processing**: Disable OPOST (no CR/LF translation)
//! - **8-bit characters**: CS8 (8 data bits, no parity)
//! - **No echo**: Disable ECHO, ECHONL
//! - **Non-canonical mode**: Disable ICANON (no line buffering)
//!
//! ## Pacing
//!
//! Cheap 58mm printers have small receive buffers and no flow control.
//! Every write is followed by a short pause (`write_delay_ms`, 10ms by
//! default), and large writes are split into chunks.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::io::AsRawFd;
use std::thread;
use std::time::Duration;

use super::Transport;
use crate::config::UartConfig;
use crate::error::FortunaError;

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 256;

/// # Serial Printer Transport
///
/// ## Example
///
/// ```no_run
/// use fortuna::config::UartConfig;
/// use fortuna::transport::{SerialTransport, Transport};
/// use fortuna::protocol::commands;
///
/// let mut transport = SerialTransport::open(&UartConfig::default())?;
/// transport.write_all(&commands::init())?;
/// # Ok::<(), fortuna::error::FortunaError>(())
/// ```
pub struct SerialTransport {
    file: File,
    chunk_size: usize,
    write_delay: Duration,
}

impl SerialTransport {
    /// Open the UART device and configure the line.
    ///
    /// ## Errors
    ///
    /// Returns [`FortunaError::TransportUnavailable`] if:
    /// - The device doesn't exist or permission is denied (dialout group)
    /// - The baud rate is not a standard rate
    /// - TTY configuration fails
    pub fn open(config: &UartConfig) -> Result<Self, FortunaError> {
        let speed = baud_constant(config.baud_rate).ok_or_else(|| {
            FortunaError::TransportUnavailable(format!(
                "Unsupported baud rate {}",
                config.baud_rate
            ))
        })?;

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&config.device)
            .map_err(|e| {
                FortunaError::TransportUnavailable(format!(
                    "Failed to open {}: {}",
                    config.device, e
                ))
            })?;

        configure_tty_raw(file.as_raw_fd(), speed, config.timeout_ms)?;

        log::debug!(
            "opened {} at {} baud (timeout {}ms)",
            config.device,
            config.baud_rate,
            config.timeout_ms
        );

        Ok(Self {
            file,
            chunk_size: CHUNK_SIZE,
            write_delay: Duration::from_millis(config.write_delay_ms),
        })
    }
}

impl Transport for SerialTransport {
    /// Write data to the printer.
    ///
    /// Large writes are chunked; every chunk is followed by the pacing delay.
    fn write_all(&mut self, data: &[u8]) -> Result<(), FortunaError> {
        for chunk in data.chunks(self.chunk_size) {
            self.file
                .write_all(chunk)
                .map_err(|e| FortunaError::Transport(format!("Write failed: {}", e)))?;

            if !self.write_delay.is_zero() {
                thread::sleep(self.write_delay);
            }
        }

        self.file
            .flush()
            .map_err(|e| FortunaError::Transport(format!("Flush failed: {}", e)))?;

        Ok(())
    }
}

/// Map a numeric baud rate to its termios speed constant.
fn baud_constant(baud: u32) -> Option<libc::speed_t> {
    let speed = match baud {
        1200 => libc::B1200,
        2400 => libc::B2400,
        4800 => libc::B4800,
        9600 => libc::B9600,
        19200 => libc::B19200,
        38400 => libc::B38400,
        57600 => libc::B57600,
        115200 => libc::B115200,
        _ => return None,
    };
    Some(speed)
}

/// Configure a file descriptor for raw 8N1 at `speed`.
///
/// ## What Gets Disabled
///
/// - **Input flags**: IGNBRK, BRKINT, PARMRK, ISTRIP, INLCR, IGNCR, ICRNL, IXON, IXOFF, IXANY
/// - **Output flags**: OPOST
/// - **Local flags**: ECHO, ECHONL, ICANON, ISIG, IEXTEN
/// - **Control flags**: CSIZE, PARENB (then CS8 is set)
///
/// IXON/IXOFF must be off: 0x11 and 0x13 occur in bitmap rows.
fn configure_tty_raw(fd: i32, speed: libc::speed_t, timeout_ms: u64) -> Result<(), FortunaError> {
    use std::mem::MaybeUninit;

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(FortunaError::TransportUnavailable(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);

    termios.c_oflag &= !libc::OPOST;

    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8 | libc::CREAD | libc::CLOCAL;

    // Reads return after VTIME deciseconds without data
    termios.c_cc[libc::VMIN] = 0;
    termios.c_cc[libc::VTIME] = timeout_deciseconds(timeout_ms);

    let result = unsafe {
        libc::cfsetispeed(&mut termios, speed) | libc::cfsetospeed(&mut termios, speed)
    };
    if result != 0 {
        return Err(FortunaError::TransportUnavailable(format!(
            "cfsetspeed failed: {}",
            io::Error::last_os_error()
        )));
    }

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(FortunaError::TransportUnavailable(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

/// VTIME is a u8 count of tenths of a second.
fn timeout_deciseconds(timeout_ms: u64) -> libc::cc_t {
    (timeout_ms.div_ceil(100)).min(255) as libc::cc_t
}
