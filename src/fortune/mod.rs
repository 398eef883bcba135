//! # Fortune Print Orchestrator
//!
//! Decides how one fortune reaches paper:
//!
//! 1. Ask the [`AssetRegistry`] for a slip (random or fixed, per config).
//!    If it loads, send it with `print_bitmap` and feed the tail.
//! 2. Otherwise print the text live with the printer font
//!    ([`live::print_live`]).
//!
//! Any failure on either path comes back as
//! [`FortunaError::PrintJobFailed`], which the control loop logs and drops.
//!
//! ## Example
//!
//! ```
//! use fortuna::config::FortuneConfig;
//! use fortuna::fortune::{FortunePrinter, PrintedSlip};
//! use fortuna::fortune::assets::MemoryRegistry;
//! use fortuna::printer::{PrinterConfig, PrinterSession};
//! use fortuna::transport::MemoryTransport;
//!
//! let mut session = PrinterSession::new(MemoryTransport::new(), PrinterConfig::QR203)?;
//! let printer = FortunePrinter::new(MemoryRegistry::new(), FortuneConfig::default());
//!
//! // No assets: the text is printed live
//! let slip = printer.print(&mut session, Some("A surprise gift will be yours."))?;
//! assert!(matches!(slip, PrintedSlip::Live { .. }));
//! # Ok::<(), fortuna::FortunaError>(())
//! ```

pub mod assets;
pub mod fortunes;
pub mod live;

use rand::RngCore;

use crate::config::FortuneConfig;
use crate::error::FortunaError;
use crate::printer::PrinterSession;
use crate::protocol::text::FontScale;
use crate::transport::Transport;

use assets::{AssetRegistry, FortuneAsset};

/// What was printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintedSlip {
    /// A precomputed bitmap slip
    Asset {
        name: String,
        width: usize,
        height: usize,
    },
    /// Live text through the printer font
    Live { text: String, lines: Vec<String> },
}

/// Prints fortunes from a registry of slips, falling back to live text.
pub struct FortunePrinter<R: AssetRegistry> {
    registry: R,
    config: FortuneConfig,
}

impl<R: AssetRegistry> FortunePrinter<R> {
    pub fn new(registry: R, config: FortuneConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn config(&self) -> &FortuneConfig {
        &self.config
    }

    /// Print one fortune. `text` is used on the live path; `None` picks one
    /// from the configured list.
    pub fn print<T: Transport>(
        &self,
        session: &mut PrinterSession<T>,
        text: Option<&str>,
    ) -> Result<PrintedSlip, FortunaError> {
        self.print_with_rng(session, text, &mut rand::rng())
    }

    /// [`print`](Self::print) with an explicit random source.
    pub fn print_with_rng<T: Transport>(
        &self,
        session: &mut PrinterSession<T>,
        text: Option<&str>,
        rng: &mut dyn RngCore,
    ) -> Result<PrintedSlip, FortunaError> {
        if let Some((name, asset)) = self.pick_asset(rng) {
            log::info!("printing slip {} ({}x{})", name, asset.width(), asset.height());
            self.print_asset(session, &asset)
                .map_err(|e| FortunaError::PrintJobFailed(format!("slip {}: {}", name, e)))?;
            return Ok(PrintedSlip::Asset {
                name,
                width: asset.width(),
                height: asset.height(),
            });
        }

        let text = match text {
            Some(t) => t.to_string(),
            None => fortunes::choose(&self.config.fortunes, rng).to_string(),
        };
        log::warn!("no slip asset available, printing text");

        let lines = live::print_live(session, &text, &self.config.live)
            .map_err(|e| FortunaError::PrintJobFailed(format!("live slip: {}", e)))?;
        Ok(PrintedSlip::Live { text, lines })
    }

    fn pick_asset(&self, rng: &mut dyn RngCore) -> Option<(String, FortuneAsset)> {
        let name = self.registry.select(&self.config.selection, rng)?;
        let asset = self.registry.try_load(&name)?;
        Some((name, asset))
    }

    fn print_asset<T: Transport>(
        &self,
        session: &mut PrinterSession<T>,
        asset: &FortuneAsset,
    ) -> Result<(), FortunaError> {
        session.print_bitmap(
            asset.bitmap(),
            asset.width(),
            asset.height(),
            FontScale::Normal,
        )?;
        session.feed(self.config.feed_after_asset)
    }
}
