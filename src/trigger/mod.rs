//! # Physical Triggers
//!
//! Turns raw pin samples into print decisions.
//!
//! ```text
//!  InputPin ──level──► Trigger ──decision──► ControlLoop ──► FortunePrinter
//!   (sysfs)          (debounce)            (every poll tick)
//! ```
//!
//! A [`Trigger`] is sampled once per polling tick and answers with at most
//! one [`TriggerDecision`]. Two implementations exist:
//!
//! - [`LidDebouncer`]: a reed switch on the box lid, with a debounce window,
//!   a closed-stability guard and a print cooldown
//! - [`ButtonDebouncer`]: a push button that fires on the press edge, at most
//!   once per interval

pub mod control;
pub mod debounce;
pub mod pin;

pub use control::{ControlLoop, TickOutcome};
pub use debounce::{ButtonDebouncer, DebounceState, LidDebouncer, LidPhase};
pub use pin::{InputPin, ScriptedPin, SysfsPin};

use crate::config::{TriggerConfig, TriggerSource};

/// Outcome of one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerDecision {
    /// Nothing to do
    Idle,
    /// A genuine event: print now
    Print,
    /// A genuine event inside the cooldown
    Suppressed { remaining_ms: u64 },
}

/// A debounced input sampled on a fixed cadence.
pub trait Trigger {
    /// Feed one raw pin level observed at `now_ms` (monotonic milliseconds).
    fn sample(&mut self, level: bool, now_ms: u64) -> TriggerDecision;
}

impl<T: Trigger + ?Sized> Trigger for Box<T> {
    fn sample(&mut self, level: bool, now_ms: u64) -> TriggerDecision {
        (**self).sample(level, now_ms)
    }
}

/// Build the trigger selected in the configuration.
pub fn from_config(config: &TriggerConfig) -> Box<dyn Trigger + Send> {
    match config.source {
        TriggerSource::Lid => Box::new(LidDebouncer::new(&config.lid)),
        TriggerSource::Button => Box::new(ButtonDebouncer::new(&config.button)),
    }
}
