//! # Application Configuration
//!
//! Everything the device needs at startup lives in one [`AppConfig`] value,
//! loaded once and passed by reference into the transport, debouncer and
//! fortune printer constructors.
//!
//! ## File Format
//!
//! JSON, every field optional:
//!
//! ```json
//! {
//!   "uart": { "device": "/dev/ttyS1", "baud_rate": 9600 },
//!   "trigger": { "source": "lid", "pin": 4, "lid": { "cooldown_ms": 8000 } },
//!   "fortune": { "asset_dir": "/opt/fortuna/slips" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FortunaError;
use crate::fortune::fortunes::FORTUNES;
use crate::fortune::live::LiveSlipStyle;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Printer UART parameters
    pub uart: UartConfig,
    /// When false, the device runs without opening the printer
    pub printer_enabled: bool,
    /// Polling cadence of the control loop
    pub poll_interval_ms: u64,
    /// Physical trigger (lid switch or button)
    pub trigger: TriggerConfig,
    /// Fortune selection and slip styling
    pub fortune: FortuneConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            uart: UartConfig::default(),
            printer_enabled: true,
            poll_interval_ms: 100,
            trigger: TriggerConfig::default(),
            fortune: FortuneConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load a configuration file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FortunaError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
            .map_err(|e| FortunaError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, FortunaError> {
        serde_json::from_str(json).map_err(|e| FortunaError::Config(e.to_string()))
    }
}

/// Serial line parameters for the printer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UartConfig {
    /// UART device node
    pub device: String,
    /// Line speed
    pub baud_rate: u32,
    /// Read timeout
    pub timeout_ms: u64,
    /// Pause after every write so the printer can keep up
    pub write_delay_ms: u64,
    /// Pause after the init sequence
    pub init_delay_ms: u64,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            device: "/dev/ttyS1".to_string(),
            baud_rate: 9600,
            timeout_ms: 1000,
            write_delay_ms: 10,
            init_delay_ms: 100,
        }
    }
}

/// Which physical input starts a print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerSource {
    /// Reed switch on the box lid
    #[default]
    Lid,
    /// Momentary push button
    Button,
}

/// Trigger input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerConfig {
    pub source: TriggerSource,
    /// GPIO line number
    pub pin: u32,
    pub lid: LidConfig,
    pub button: ButtonConfig,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            source: TriggerSource::Lid,
            pin: 4,
            lid: LidConfig::default(),
            button: ButtonConfig::default(),
        }
    }
}

/// Lid switch timing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LidConfig {
    /// Minimum time between accepted transitions
    pub debounce_ms: u64,
    /// Minimum time between two prints
    pub cooldown_ms: u64,
    /// How long the lid must read closed before the next open counts
    pub closed_stable_ms: u64,
    /// Raw pin level that means "open". With the pull-up enabled a reed
    /// switch reads high once the magnet moves away.
    pub open_level: bool,
}

impl Default for LidConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 75,
            cooldown_ms: 5000,
            closed_stable_ms: 1000,
            open_level: true,
        }
    }
}

/// Push button timing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// A press must come strictly later than this after the previous press
    pub min_interval_ms: u64,
    /// Raw pin level while pressed (active low with the pull-up)
    pub pressed_level: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: 500,
            pressed_level: false,
        }
    }
}

/// How a precomputed slip is picked
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetSelection {
    /// Uniformly random among the registry's assets
    #[default]
    Random,
    /// Always the named asset
    Fixed(String),
}

/// Fortune printing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FortuneConfig {
    /// Directory of precomputed slip assets (`*.json`)
    pub asset_dir: Option<PathBuf>,
    pub selection: AssetSelection,
    /// Blank lines fed after a bitmap slip
    pub feed_after_asset: u8,
    /// Live text fallback styling
    pub live: LiveSlipStyle,
    /// Texts used when no fortune is given
    pub fortunes: Vec<String>,
}

impl Default for FortuneConfig {
    fn default() -> Self {
        Self {
            asset_dir: None,
            selection: AssetSelection::Random,
            feed_after_asset: 6,
            live: LiveSlipStyle::default(),
            fortunes: FORTUNES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
