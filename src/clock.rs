//! Millisecond clock abstraction
//!
//! The only external collaborator of this crate: a free-running counter of
//! milliseconds since an arbitrary epoch (typically device boot). The
//! counter must be monotonic non-decreasing except for wrapping at
//! `u32::MAX`, which happens roughly every 49.7 days of uptime.

use core::cell::Cell;

/// Millisecond count from a [`Clock`], wrapping at `u32::MAX`.
pub type Millis = u32;

/// A monotonic millisecond counter.
///
/// Takes `&self` because reading a free-running counter needs no mutable
/// access; implementations are typically zero-sized handles to a hardware
/// timer.
pub trait Clock {
    /// Milliseconds elapsed since the clock's epoch, mod `u32::MAX + 1`.
    fn now(&self) -> Millis;
}

/// One hardware counter can back any number of states.
impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Millis {
        (**self).now()
    }
}

/// A manually advanced clock for host-side tests.
///
/// Starts at zero; tests move it forward with [`MockClock::advance`] or pin
/// it with [`MockClock::set`]. Uses interior mutability so a single
/// instance can be shared by reference between the test and the state
/// under test.
#[derive(Debug, Default)]
pub struct MockClock {
    now: Cell<Millis>,
}

impl MockClock {
    /// Create a clock reading zero.
    pub const fn new() -> Self {
        Self { now: Cell::new(0) }
    }

    /// Create a clock reading `now`.
    pub const fn at(now: Millis) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    /// Set the current reading.
    pub fn set(&self, now: Millis) {
        self.now.set(now);
    }

    /// Advance the reading by `delta_ms`, wrapping like the real counter.
    pub fn advance(&self, delta_ms: Millis) {
        self.now.set(self.now.get().wrapping_add(delta_ms));
    }
}

impl Clock for MockClock {
    fn now(&self) -> Millis {
        self.now.get()
    }
}

/// The embassy-time uptime counter as a [`Clock`].
///
/// Truncates `Instant::as_millis()` to 32 bits, which reintroduces the
/// 49.7-day wrap the state arithmetic is written for.
#[cfg(feature = "embassy")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embassy")]
impl Clock for EmbassyClock {
    fn now(&self) -> Millis {
        embassy_time::Instant::now().as_millis() as Millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_clock_starts_at_zero() {
        let clock = MockClock::new();
        assert_eq!(clock.now(), 0);
    }

    #[test]
    fn test_advance_wraps() {
        let clock = MockClock::at(u32::MAX - 1);
        clock.advance(3);
        assert_eq!(clock.now(), 1);
    }

    #[test]
    fn test_shared_reference_reads_through() {
        let clock = MockClock::new();
        let borrowed: &MockClock = &clock;
        clock.set(42);
        assert_eq!(borrowed.now(), 42);
    }
}
