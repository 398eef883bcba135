//! # Control Loop
//!
//! One thread, one pin, one printer. Each tick samples the pin, feeds the
//! trigger and, on a print decision, runs the whole print job before
//! returning. Print failures are logged and swallowed so the loop never
//! stops.

use std::thread;
use std::time::{Duration, Instant};

use crate::fortune::assets::AssetRegistry;
use crate::fortune::{FortunePrinter, PrintedSlip};
use crate::printer::PrinterSession;
use crate::transport::Transport;

use super::pin::InputPin;
use super::{Trigger, TriggerDecision};

/// What happened during one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Printed(PrintedSlip),
    /// The print was attempted and failed; the error was logged
    PrintFailed,
    /// An event arrived inside the cooldown
    Suppressed { remaining_ms: u64 },
    /// An event arrived but printing is disabled
    PrinterMissing,
    /// The pin could not be read this tick
    PinError,
}

/// Polling loop wiring a pin and trigger to the fortune printer.
pub struct ControlLoop<P, G, T, R>
where
    P: InputPin,
    G: Trigger,
    T: Transport,
    R: AssetRegistry,
{
    pin: P,
    trigger: G,
    session: Option<PrinterSession<T>>,
    printer: FortunePrinter<R>,
    poll_interval: Duration,
}

impl<P, G, T, R> ControlLoop<P, G, T, R>
where
    P: InputPin,
    G: Trigger,
    T: Transport,
    R: AssetRegistry,
{
    /// `session` is `None` when the printer could not be opened; events are
    /// then reported as [`TickOutcome::PrinterMissing`].
    pub fn new(
        pin: P,
        trigger: G,
        session: Option<PrinterSession<T>>,
        printer: FortunePrinter<R>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            pin,
            trigger,
            session,
            printer,
            poll_interval,
        }
    }

    pub fn session(&self) -> Option<&PrinterSession<T>> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut PrinterSession<T>> {
        self.session.as_mut()
    }

    /// Run one polling step at `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        let level = match self.pin.read() {
            Ok(level) => level,
            Err(e) => {
                log::warn!("pin read failed: {}", e);
                return TickOutcome::PinError;
            }
        };

        match self.trigger.sample(level, now_ms) {
            TriggerDecision::Idle => TickOutcome::Idle,
            TriggerDecision::Suppressed { remaining_ms } => {
                TickOutcome::Suppressed { remaining_ms }
            }
            TriggerDecision::Print => self.print(),
        }
    }

    fn print(&mut self) -> TickOutcome {
        let Some(session) = self.session.as_mut() else {
            log::warn!("print triggered but the printer is not available");
            return TickOutcome::PrinterMissing;
        };

        log::info!("printing fortune");
        match self.printer.print(session, None) {
            Ok(slip) => TickOutcome::Printed(slip),
            Err(e) => {
                log::error!("fortune print failed: {}", e);
                if let Err(e) = session.restore_defaults() {
                    log::error!("could not restore printer defaults: {}", e);
                }
                TickOutcome::PrintFailed
            }
        }
    }

    /// Poll forever at the configured interval.
    pub fn run(&mut self) -> ! {
        let start = Instant::now();
        log::info!("polling every {:?}", self.poll_interval);
        loop {
            let now_ms = start.elapsed().as_millis() as u64;
            self.tick(now_ms);
            thread::sleep(self.poll_interval);
        }
    }
}
