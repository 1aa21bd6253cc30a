//! Latch that oscillates between an on-phase and an off-phase

use super::State;
use crate::clock::{Clock, Millis};

/// A state that, once entered, alternates between reading true for
/// `true_period` milliseconds and false for `false_period` milliseconds
/// until `exit` is called.
///
/// `initial_state` picks which phase the oscillation starts in at entry.
/// `enter` while already entered keeps the current phase alignment;
/// `force_enter` restarts the oscillation from the initial phase.
///
/// `true_period + false_period` must be non-zero; this is the caller's
/// responsibility and is only checked in debug builds.
pub struct RepeatingTimedState<C> {
    clock: C,
    entered: bool,
    reference: Millis,
    true_period: Millis,
    false_period: Millis,
    initial_state: bool,
}

impl<C: Clock> RepeatingTimedState<C> {
    /// Create an exited state with fixed phase durations in milliseconds.
    pub fn new(clock: C, true_period: Millis, false_period: Millis, initial_state: bool) -> Self {
        debug_assert!(
            true_period.wrapping_add(false_period) != 0,
            "combined period must be non-zero"
        );
        Self {
            clock,
            entered: false,
            reference: 0,
            true_period,
            false_period,
            initial_state,
        }
    }

    /// The on-phase duration in milliseconds.
    pub fn true_period(&self) -> Millis {
        self.true_period
    }

    /// The off-phase duration in milliseconds.
    pub fn false_period(&self) -> Millis {
        self.false_period
    }

    /// Combined length of one full oscillation in milliseconds.
    pub fn cycle(&self) -> Millis {
        self.true_period + self.false_period
    }
}

impl<C: Clock> State for RepeatingTimedState<C> {
    fn enter(&mut self) {
        // Checks the entered flag, not is_inside: re-entering during the
        // off-phase must not restart the oscillation.
        if !self.entered {
            self.force_enter();
        }
    }

    fn force_enter(&mut self) {
        self.entered = true;
        self.reference = self.clock.now();
    }

    fn exit(&mut self) {
        self.entered = false;
    }

    fn is_inside(&self) -> bool {
        if !self.entered {
            return false;
        }
        let now = self.clock.now();
        if now < self.reference {
            // Counter wrapped since entry. Reading outside here suppresses
            // the overflow false-positive; the cycle arithmetic below is
            // deliberately not made wraparound-exact beyond this guard.
            return false;
        }
        let phase = (now - self.reference) % (self.true_period + self.false_period);
        if self.initial_state {
            phase < self.true_period
        } else {
            phase >= self.false_period
        }
    }
}
