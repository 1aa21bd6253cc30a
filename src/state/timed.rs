//! Latch that expires after a fixed period

use super::State;
use crate::clock::{Clock, Millis};

/// Margin added when poisoning the reference time on exit, so the stored
/// timestamp is strictly more than `period` in the past.
const EXIT_MARGIN_MS: Millis = 100;

/// A state that exits itself `period` milliseconds after entry.
///
/// Once entered, [`State::is_inside`] reads true until `exit` is called or
/// the period elapses, whichever comes first. Expiry is detected lazily at
/// poll time. `force_enter` restarts the period from the current clock
/// reading; `enter` while still inside does not.
pub struct TimedState<C> {
    clock: C,
    entered: bool,
    reference: Millis,
    period: Millis,
}

impl<C: Clock> TimedState<C> {
    /// Create an exited state with a fixed period in milliseconds.
    pub fn new(clock: C, period: Millis) -> Self {
        Self {
            clock,
            entered: false,
            reference: 0,
            period,
        }
    }

    /// The configured period in milliseconds.
    pub fn period(&self) -> Millis {
        self.period
    }
}

impl<C: Clock> State for TimedState<C> {
    fn enter(&mut self) {
        if !self.is_inside() {
            self.force_enter();
        }
    }

    fn force_enter(&mut self) {
        self.entered = true;
        self.reference = self.clock.now();
    }

    fn exit(&mut self) {
        self.entered = false;
        // Rewrite the reference into the past so a poll right after exit
        // reads false, and so the stale timestamp cannot land back inside
        // the period window after the counter wraps.
        self.reference = self
            .clock
            .now()
            .wrapping_sub(self.period)
            .wrapping_sub(EXIT_MARGIN_MS);
    }

    fn is_inside(&self) -> bool {
        // Wrapping subtraction keeps the elapsed computation correct across
        // the counter overflow at u32::MAX.
        self.entered && self.clock.now().wrapping_sub(self.reference) <= self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;

    #[test]
    fn test_outside_until_entered() {
        let clock = MockClock::new();
        let state = TimedState::new(&clock, 100);
        assert!(!state.is_inside());

        clock.advance(1000);
        assert!(!state.is_inside());
    }

    #[test]
    fn test_period_bound_is_inclusive() {
        let clock = MockClock::new();
        let mut state = TimedState::new(&clock, 100);
        state.force_enter();

        assert!(state.is_inside());
        clock.set(50);
        assert!(state.is_inside());
        clock.set(100);
        assert!(state.is_inside());
        clock.set(101);
        assert!(!state.is_inside());
    }

    #[test]
    fn test_enter_while_inside_does_not_reset_timer() {
        let clock = MockClock::new();
        let mut state = TimedState::new(&clock, 100);
        state.force_enter();

        clock.set(50);
        state.enter();

        clock.set(101);
        assert!(!state.is_inside());
    }

    #[test]
    fn test_enter_after_expiry_rearms() {
        let clock = MockClock::new();
        let mut state = TimedState::new(&clock, 100);
        state.force_enter();

        clock.set(200);
        assert!(!state.is_inside());

        state.enter();
        assert!(state.is_inside());
        clock.set(300);
        assert!(state.is_inside());
        clock.set(301);
        assert!(!state.is_inside());
    }

    #[test]
    fn test_force_enter_resets_timer() {
        let clock = MockClock::new();
        let mut state = TimedState::new(&clock, 100);
        state.force_enter();

        clock.set(50);
        state.force_enter();

        clock.set(150);
        assert!(state.is_inside());
        clock.set(151);
        assert!(!state.is_inside());
    }

    #[test]
    fn test_exit_reads_false_immediately() {
        let clock = MockClock::new();
        let mut state = TimedState::new(&clock, 100);
        state.force_enter();
        state.exit();
        assert!(!state.is_inside());
    }

    #[test]
    fn test_inside_across_counter_wrap() {
        let clock = MockClock::at(u32::MAX - 20);
        let mut state = TimedState::new(&clock, 100);
        state.force_enter();

        clock.advance(50); // now = 29 after wrap
        assert!(state.is_inside());
        clock.advance(50); // elapsed = 100
        assert!(state.is_inside());
        clock.advance(1); // elapsed = 101
        assert!(!state.is_inside());
    }

    #[test]
    fn test_poisoned_reference_survives_wrap() {
        let clock = MockClock::at(u32::MAX - 50);
        let mut state = TimedState::new(&clock, 100);
        state.force_enter();
        state.exit();

        // Without a fresh entry the state must stay outside no matter how
        // far the counter moves, including across the wrap.
        for _ in 0..10 {
            clock.advance(25);
            assert!(!state.is_inside());
        }
    }
}
