//! # Printer Session
//!
//! A [`PrinterSession`] owns one transport and tracks the printer's latched
//! mode (justification, print mode, bold, underline). Everything it sends
//! goes through [`PrintCommand`] and [`encode`], one transport write per
//! command, so the byte stream is exactly what the encoder produces.
//!
//! ## Justification Guarantee
//!
//! [`PrinterSession::print_line`] always finishes by selecting left
//! justification, whatever alignment was requested. Callers can rely on the
//! printer being left-justified after any `print_line`.
//!
//! ## Example
//!
//! ```
//! use fortuna::printer::{PrinterConfig, PrinterSession};
//! use fortuna::protocol::text::Justify;
//! use fortuna::transport::MemoryTransport;
//!
//! let mut session = PrinterSession::new(MemoryTransport::new(), PrinterConfig::QR203)?;
//! session.print_line("FORTUNE", Justify::Center)?;
//! session.feed(3)?;
//!
//! let bytes = session.transport().bytes();
//! assert!(bytes.ends_with(&[0x1B, b'd', 3]));
//! # Ok::<(), fortuna::error::FortunaError>(())
//! ```

use std::thread;
use std::time::Duration;

use crate::config::UartConfig;
use crate::error::FortunaError;
use crate::ir::{PrintCommand, PrinterState, encode};
use crate::printer::PrinterConfig;
use crate::protocol::commands::LF;
use crate::protocol::text::{FontScale, Justify, LineSpacing};
use crate::transport::{SerialTransport, Transport};

/// Bit image mode used for every bitmap row
const BIT_IMAGE_MODE: u8 = 0;

/// Stateful printing API over a transport.
pub struct PrinterSession<T: Transport> {
    transport: T,
    config: PrinterConfig,
    state: PrinterState,
}

impl PrinterSession<SerialTransport> {
    /// Open the UART printer and run the init sequence.
    ///
    /// ## Errors
    ///
    /// [`FortunaError::TransportUnavailable`] when the port cannot be opened
    /// or the init sequence cannot be written. Callers should disable
    /// printing rather than retry.
    pub fn open(uart: &UartConfig, config: PrinterConfig) -> Result<Self, FortunaError> {
        let transport = SerialTransport::open(uart)?;
        let session = Self::new(transport, config)?;

        // Give the firmware time to apply the init sequence
        thread::sleep(Duration::from_millis(uart.init_delay_ms));

        log::info!("{} initialized on {}", config.name, uart.device);
        Ok(session)
    }
}

impl<T: Transport> PrinterSession<T> {
    /// Wrap a transport and send the init sequence.
    ///
    /// ## Errors
    ///
    /// [`FortunaError::TransportUnavailable`] when the init sequence cannot
    /// be written, whatever the transport reported.
    pub fn new(transport: T, config: PrinterConfig) -> Result<Self, FortunaError> {
        let mut session = Self {
            transport,
            config,
            state: PrinterState::default(),
        };
        session.init().map_err(|e| match e {
            e @ FortunaError::TransportUnavailable(_) => e,
            other => FortunaError::TransportUnavailable(format!("init failed: {}", other)),
        })?;
        Ok(session)
    }

    /// Reset line spacing, justification, print mode, bold and underline.
    ///
    /// Every command is sent unconditionally; the printer may have been left
    /// in any mode by a previous program.
    pub fn init(&mut self) -> Result<(), FortunaError> {
        self.issue(&PrintCommand::SetLineSpacing(LineSpacing::Default))?;
        self.issue(&PrintCommand::SetJustify(Justify::Left))?;
        self.issue(&PrintCommand::SetFontScale(FontScale::Normal))?;
        self.issue(&PrintCommand::SetBold(false))?;
        self.issue(&PrintCommand::SetUnderline(false))?;
        Ok(())
    }

    /// Send raw bytes. Blocks until the transport has taken them.
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), FortunaError> {
        self.transport.write_all(bytes)
    }

    /// Encode and send one command, tracking its effect on printer state.
    pub fn issue(&mut self, cmd: &PrintCommand) -> Result<(), FortunaError> {
        self.transport.write_all(&encode(cmd))?;
        self.state.apply(cmd);
        Ok(())
    }

    /// Current printer mode as far as this session knows.
    pub fn state(&self) -> PrinterState {
        self.state
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    // ========================================================================
    // TEXT
    // ========================================================================

    /// Print a line of text with the current style.
    pub fn print_text(&mut self, text: &str) -> Result<(), FortunaError> {
        self.issue(&PrintCommand::line(text))
    }

    /// Print a line with the given justification, then select left.
    pub fn print_line(&mut self, text: &str, align: Justify) -> Result<(), FortunaError> {
        self.issue(&PrintCommand::SetJustify(align))?;
        self.print_text(text)?;
        self.issue(&PrintCommand::SetJustify(Justify::Left))
    }

    pub fn print_bold(&mut self, text: &str) -> Result<(), FortunaError> {
        self.issue(&PrintCommand::SetBold(true))?;
        self.print_text(text)?;
        self.issue(&PrintCommand::SetBold(false))
    }

    pub fn print_underline(&mut self, text: &str) -> Result<(), FortunaError> {
        self.issue(&PrintCommand::SetUnderline(true))?;
        self.print_text(text)?;
        self.issue(&PrintCommand::SetUnderline(false))
    }

    /// Print a line at the given scale, then return to normal size.
    pub fn print_scaled(&mut self, text: &str, scale: FontScale) -> Result<(), FortunaError> {
        self.issue(&PrintCommand::SetFontScale(scale))?;
        self.print_text(text)?;
        self.issue(&PrintCommand::SetFontScale(FontScale::Normal))
    }

    pub fn print_double_height(&mut self, text: &str) -> Result<(), FortunaError> {
        self.print_scaled(text, FontScale::DoubleHeight)
    }

    pub fn print_double_width(&mut self, text: &str) -> Result<(), FortunaError> {
        self.print_scaled(text, FontScale::DoubleWidth)
    }

    pub fn print_large(&mut self, text: &str) -> Result<(), FortunaError> {
        self.print_scaled(text, FontScale::DoubleBoth)
    }

    /// Print a row of `ch` repeated `len` times.
    pub fn print_separator(&mut self, ch: char, len: usize) -> Result<(), FortunaError> {
        let line: String = std::iter::repeat_n(ch, len).collect();
        self.print_text(&line)
    }

    // ========================================================================
    // PAPER
    // ========================================================================

    /// Feed `lines` blank lines.
    pub fn feed(&mut self, lines: u8) -> Result<(), FortunaError> {
        self.issue(&PrintCommand::Feed(lines))
    }

    /// Reset the printer (ESC @), dropping anything still buffered.
    pub fn clear_buffer(&mut self) -> Result<(), FortunaError> {
        self.issue(&PrintCommand::Initialize)
    }

    /// Send only the commands needed to get back to default mode.
    pub fn restore_defaults(&mut self) -> Result<(), FortunaError> {
        for cmd in self.state.reset_commands() {
            self.issue(&cmd)?;
        }
        Ok(())
    }

    // ========================================================================
    // GRAPHICS
    // ========================================================================

    /// Print a packed 1-bit bitmap, one bit image command per row.
    ///
    /// `data` is row-major, MSB = leftmost dot, bit set = black. `scale`
    /// selects the print mode used while the rows are sent; normal mode is
    /// restored afterwards.
    ///
    /// ## Errors
    ///
    /// [`FortunaError::InvalidDimensions`] if `width` is not a multiple of 8
    /// or `data` holds fewer than `width / 8 * height` bytes. Nothing is sent
    /// in that case.
    pub fn print_bitmap(
        &mut self,
        data: &[u8],
        width: usize,
        height: usize,
        scale: FontScale,
    ) -> Result<(), FortunaError> {
        if width % 8 != 0 {
            return Err(FortunaError::InvalidDimensions(format!(
                "bitmap width {} is not a multiple of 8",
                width
            )));
        }

        let bytes_per_line = width / 8;
        let needed = bytes_per_line * height;
        if data.len() < needed {
            return Err(FortunaError::InvalidDimensions(format!(
                "bitmap {}x{} needs {} bytes, got {}",
                width,
                height,
                needed,
                data.len()
            )));
        }

        if !self.config.fits_width(width) {
            log::warn!(
                "bitmap is {} dots wide, {} prints at most {}",
                width,
                self.config.name,
                self.config.width_dots
            );
        }

        self.issue(&PrintCommand::SetFontScale(scale))?;

        if bytes_per_line > 0 {
            for row in data[..needed].chunks(bytes_per_line) {
                self.issue(&PrintCommand::BitImageRow {
                    mode: BIT_IMAGE_MODE,
                    data: row.to_vec(),
                })?;
                self.write(&[LF])?;
            }
        }

        self.issue(&PrintCommand::SetFontScale(FontScale::Normal))
    }

    /// Print solid square marks at the left and right margins.
    ///
    /// Each of the `rows` lines carries one `block_width_px` wide mark at
    /// `left_margin_dots` and one ending `right_margin_dots` before the right
    /// edge of the print area.
    pub fn print_corner_blocks(
        &mut self,
        block_width_px: u16,
        rows: u8,
        left_margin_dots: u16,
        right_margin_dots: u16,
    ) -> Result<(), FortunaError> {
        let bytes_per_row = (block_width_px as usize).div_ceil(8);
        let row_bytes = vec![0xFF; bytes_per_row];
        let right_pos = self.config.right_mark_dot(block_width_px, right_margin_dots);

        for _ in 0..rows {
            self.issue(&PrintCommand::absolute_position(left_margin_dots as i32))?;
            self.issue(&PrintCommand::BitImageRow {
                mode: BIT_IMAGE_MODE,
                data: row_bytes.clone(),
            })?;
            self.issue(&PrintCommand::absolute_position(right_pos))?;
            self.issue(&PrintCommand::BitImageRow {
                mode: BIT_IMAGE_MODE,
                data: row_bytes.clone(),
            })?;
            self.write(&[LF])?;
        }
        Ok(())
    }

    // ========================================================================
    // SELF TEST
    // ========================================================================

    /// Print a page exercising every style the printer supports.
    pub fn test_print(&mut self) -> Result<(), FortunaError> {
        let width = self.config.chars_per_line as usize;

        self.print_separator('=', width)?;
        self.print_line("THERMAL PRINTER TEST", Justify::Center)?;
        self.print_separator('=', width)?;
        self.feed(1)?;

        self.print_bold(self.config.name)?;
        self.print_text(&format!("{} dots, {} dpi", self.config.width_dots, self.config.dpi))?;
        self.feed(1)?;

        self.print_text("Font Size Tests:")?;
        self.print_text("Normal text")?;
        self.print_double_height("Double Height")?;
        self.print_double_width("Double Width")?;
        self.print_large("Double Both")?;
        self.print_underline("Underlined Text")?;
        self.feed(1)?;

        self.print_text("Alignment Tests:")?;
        self.print_line("Left aligned", Justify::Left)?;
        self.print_line("Center aligned", Justify::Center)?;
        self.print_line("Right aligned", Justify::Right)?;
        self.feed(1)?;

        self.print_corner_blocks(16, 2, 0, 0)?;
        self.print_separator('-', width)?;
        self.print_text("ABCDEFGHIJKLMNOPQRSTUVWXYZ")?;
        self.print_text("abcdefghijklmnopqrstuvwxyz")?;
        self.print_text("0123456789 !@#$%^&*()")?;
        self.print_separator('-', width)?;
        self.feed(3)
    }
}

// ============================================================================
// TESTS
// ============================================================================
