//! # Debouncers
//!
//! ## Lid
//!
//! ```text
//!            open→closed                  closed ≥ closed_stable_ms
//!   OpenActive ─────────► ClosedSettling ─────────────────────────► IdleClosed
//!       ▲                      │                                        │
//!       │   open (ignored:     │                  open, debounce window │
//!       └── not ready) ────────┘                  elapsed: EVENT ───────┘
//! ```
//!
//! An event prints unless the previous print was less than `cooldown_ms`
//! ago, in which case it is reported as suppressed. The very first sample
//! only establishes the level: a lid that is open at boot has to close and
//! settle before it can trigger.
//!
//! ## Button
//!
//! A released→pressed edge prints when the previous press was more than
//! `min_interval_ms` ago (or there was none). No stability requirement.

use crate::config::{ButtonConfig, LidConfig};

use super::{Trigger, TriggerDecision};

/// Everything the lid debouncer remembers between ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebounceState {
    /// Last sample, `true` = open; `None` before the first sample
    pub last_open: Option<bool>,
    /// When the last transition was accepted
    pub last_transition_ms: Option<u64>,
    /// Set once the lid has been closed for the stability window
    pub ready_for_open: bool,
    /// When the lid last went from open to closed
    pub closed_since_ms: Option<u64>,
    pub last_print_ms: Option<u64>,
}

/// Coarse lid state, for status indication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LidPhase {
    OpenActive,
    /// Closed, stability window still running
    ClosedSettling,
    /// Closed long enough; the next open counts
    IdleClosed,
}

/// Debounced lid switch.
#[derive(Debug, Clone)]
pub struct LidDebouncer {
    debounce_ms: u64,
    cooldown_ms: u64,
    closed_stable_ms: u64,
    open_level: bool,
    state: DebounceState,
}

impl LidDebouncer {
    pub fn new(config: &LidConfig) -> Self {
        Self {
            debounce_ms: config.debounce_ms,
            cooldown_ms: config.cooldown_ms,
            closed_stable_ms: config.closed_stable_ms,
            open_level: config.open_level,
            state: DebounceState::default(),
        }
    }

    pub fn state(&self) -> &DebounceState {
        &self.state
    }

    pub fn phase(&self) -> LidPhase {
        match self.state.last_open {
            Some(true) => LidPhase::OpenActive,
            _ if self.state.ready_for_open => LidPhase::IdleClosed,
            _ => LidPhase::ClosedSettling,
        }
    }

    /// Feed one sample expressed as open/closed.
    pub fn sample_open(&mut self, open: bool, now_ms: u64) -> TriggerDecision {
        let decision = match self.state.last_open {
            None => {
                if !open {
                    self.state.closed_since_ms = Some(now_ms);
                }
                TriggerDecision::Idle
            }
            Some(true) if !open => {
                self.state.closed_since_ms = Some(now_ms);
                self.state.last_transition_ms = Some(now_ms);
                log::debug!("lid closed at {}ms", now_ms);
                TriggerDecision::Idle
            }
            Some(false) if open => {
                self.state.closed_since_ms = None;
                self.on_open(now_ms)
            }
            Some(_) => TriggerDecision::Idle,
        };

        if !open && !self.state.ready_for_open {
            if let Some(since) = self.state.closed_since_ms {
                if now_ms.saturating_sub(since) >= self.closed_stable_ms {
                    self.state.ready_for_open = true;
                    log::debug!("lid stable closed at {}ms", now_ms);
                }
            }
        }

        self.state.last_open = Some(open);
        decision
    }

    fn on_open(&mut self, now_ms: u64) -> TriggerDecision {
        let debounced = self
            .state
            .last_transition_ms
            .is_none_or(|t| now_ms.saturating_sub(t) >= self.debounce_ms);

        if !debounced || !self.state.ready_for_open {
            log::debug!(
                "lid open at {}ms ignored (debounced: {}, ready: {})",
                now_ms,
                debounced,
                self.state.ready_for_open
            );
            return TriggerDecision::Idle;
        }

        self.state.ready_for_open = false;
        self.state.last_transition_ms = Some(now_ms);
        log::info!("lid opened");

        match self.state.last_print_ms {
            Some(last) if now_ms.saturating_sub(last) < self.cooldown_ms => {
                let remaining_ms = self.cooldown_ms - now_ms.saturating_sub(last);
                log::info!("cooldown active, print suppressed ({}ms left)", remaining_ms);
                TriggerDecision::Suppressed { remaining_ms }
            }
            _ => {
                self.state.last_print_ms = Some(now_ms);
                TriggerDecision::Print
            }
        }
    }
}

impl Trigger for LidDebouncer {
    fn sample(&mut self, level: bool, now_ms: u64) -> TriggerDecision {
        self.sample_open(level == self.open_level, now_ms)
    }
}

/// Edge-triggered push button.
#[derive(Debug, Clone)]
pub struct ButtonDebouncer {
    min_interval_ms: u64,
    pressed_level: bool,
    last_pressed: Option<bool>,
    last_press_ms: Option<u64>,
}

impl ButtonDebouncer {
    pub fn new(config: &ButtonConfig) -> Self {
        Self {
            min_interval_ms: config.min_interval_ms,
            pressed_level: config.pressed_level,
            last_pressed: None,
            last_press_ms: None,
        }
    }

    /// Feed one sample expressed as pressed/released.
    pub fn sample_pressed(&mut self, pressed: bool, now_ms: u64) -> TriggerDecision {
        let edge = pressed && self.last_pressed == Some(false);
        self.last_pressed = Some(pressed);

        if !edge {
            return TriggerDecision::Idle;
        }

        let spaced = self
            .last_press_ms
            .is_none_or(|t| now_ms.saturating_sub(t) > self.min_interval_ms);
        if !spaced {
            log::debug!("button press at {}ms too soon", now_ms);
            return TriggerDecision::Idle;
        }

        self.last_press_ms = Some(now_ms);
        log::info!("button pressed");
        TriggerDecision::Print
    }
}

impl Trigger for ButtonDebouncer {
    fn sample(&mut self, level: bool, now_ms: u64) -> TriggerDecision {
        self.sample_pressed(level == self.pressed_level, now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lid() -> LidDebouncer {
        LidDebouncer::new(&LidConfig::default())
    }

    /// Feed open/closed samples starting at `start`, `step` ms apart.
    fn feed(d: &mut LidDebouncer, samples: &[u8], start: u64, step: u64) -> Vec<TriggerDecision> {
        samples
            .iter()
            .enumerate()
            .map(|(i, &s)| d.sample_open(s == 1, start + i as u64 * step))
            .collect()
    }

    fn prints(decisions: &[TriggerDecision]) -> usize {
        decisions
            .iter()
            .filter(|d| **d == TriggerDecision::Print)
            .count()
    }

    #[test]
    fn test_no_event_before_closed_stability() {
        let mut d = lid();
        let out = feed(&mut d, &[1, 1, 1, 0, 0, 0, 1, 1], 0, 100);
        assert!(out.iter().all(|o| *o == TriggerDecision::Idle));
        assert_eq!(d.phase(), LidPhase::OpenActive);
    }

    #[test]
    fn test_open_after_stable_close_prints() {
        let mut d = lid();
        // closed from t=0 through t=1000, open at 1100
        let mut closed: Vec<u8> = vec![0; 11];
        closed.push(1);
        let out = feed(&mut d, &closed, 0, 100);
        assert_eq!(out.last(), Some(&TriggerDecision::Print));
        assert_eq!(prints(&out), 1);
    }

    #[test]
    fn test_phase_progression() {
        let mut d = lid();
        d.sample_open(true, 0);
        assert_eq!(d.phase(), LidPhase::OpenActive);
        d.sample_open(false, 100);
        assert_eq!(d.phase(), LidPhase::ClosedSettling);
        d.sample_open(false, 1100);
        assert_eq!(d.phase(), LidPhase::IdleClosed);
        assert_eq!(d.sample_open(true, 1200), TriggerDecision::Print);
        assert_eq!(d.phase(), LidPhase::OpenActive);
    }

    #[test]
    fn test_second_open_needs_new_stable_close() {
        let mut d = lid();
        d.sample_open(false, 0);
        d.sample_open(false, 1000);
        assert_eq!(d.sample_open(true, 1100), TriggerDecision::Print);

        // quick close/open bounce: not ready again
        d.sample_open(false, 1200);
        assert_eq!(d.sample_open(true, 1300), TriggerDecision::Idle);
    }

    #[test]
    fn test_cooldown_suppresses_second_event() {
        let mut d = lid();
        d.sample_open(false, 0);
        d.sample_open(false, 1000);
        assert_eq!(d.sample_open(true, 1100), TriggerDecision::Print);

        d.sample_open(false, 1200);
        d.sample_open(false, 2200);
        assert_eq!(
            d.sample_open(true, 2300),
            TriggerDecision::Suppressed { remaining_ms: 3800 }
        );

        // after the cooldown the next genuine open prints again
        d.sample_open(false, 2400);
        d.sample_open(false, 6200);
        assert_eq!(d.sample_open(true, 6300), TriggerDecision::Print);
        assert_eq!(d.state().last_print_ms, Some(6300));
    }

    #[test]
    fn test_suppressed_event_still_consumes_readiness() {
        let mut d = lid();
        d.sample_open(false, 0);
        d.sample_open(false, 1000);
        d.sample_open(true, 1100);
        d.sample_open(false, 1200);
        d.sample_open(false, 2200);
        assert!(matches!(
            d.sample_open(true, 2300),
            TriggerDecision::Suppressed { .. }
        ));
        assert!(!d.state().ready_for_open);
    }

    #[test]
    fn test_debounce_window_rejects_fast_reopen() {
        let config = LidConfig {
            closed_stable_ms: 0,
            ..LidConfig::default()
        };
        let mut d = LidDebouncer::new(&config);
        d.sample_open(true, 0);
        d.sample_open(false, 10);
        assert!(d.state().ready_for_open);
        // 40ms after the close transition: inside the 75ms window
        assert_eq!(d.sample_open(true, 50), TriggerDecision::Idle);

        d.sample_open(false, 60);
        assert_eq!(d.sample_open(true, 200), TriggerDecision::Print);
    }

    #[test]
    fn test_level_polarity() {
        let config = LidConfig {
            open_level: false,
            ..LidConfig::default()
        };
        let mut d = LidDebouncer::new(&config);
        d.sample(true, 0);
        d.sample(true, 1000);
        assert_eq!(d.sample(false, 1100), TriggerDecision::Print);
    }

    #[test]
    fn test_button_edges_and_interval() {
        let mut b = ButtonDebouncer::new(&ButtonConfig::default());
        // pressed = low
        assert_eq!(b.sample(true, 0), TriggerDecision::Idle);
        assert_eq!(b.sample(false, 100), TriggerDecision::Print);
        // held: no repeat
        assert_eq!(b.sample(false, 200), TriggerDecision::Idle);
        assert_eq!(b.sample(true, 300), TriggerDecision::Idle);
        // 500ms after the last press is not strictly more than 500
        assert_eq!(b.sample(false, 600), TriggerDecision::Idle);
        assert_eq!(b.sample(true, 601), TriggerDecision::Idle);
        assert_eq!(b.sample(false, 700), TriggerDecision::Print);
    }

    #[test]
    fn test_button_pressed_at_boot_does_not_fire() {
        let mut b = ButtonDebouncer::new(&ButtonConfig::default());
        assert_eq!(b.sample(false, 0), TriggerDecision::Idle);
        assert_eq!(b.sample(false, 100), TriggerDecision::Idle);
    }
}
