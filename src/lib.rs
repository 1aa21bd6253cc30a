//! Time-driven state primitives for embedded control loops
//!
//! A state is something a control loop can be "inside": enter it, poll it,
//! leave it. Three variants share one contract:
//!
//! - [`SimpleState`] - a plain latch with no timing
//! - [`TimedState`] - a latch that expires after a fixed period
//! - [`RepeatingTimedState`] - a latch that oscillates between an on-phase
//!   and an off-phase until explicitly exited
//!
//! All timing is relative to a free-running millisecond counter supplied
//! through the [`Clock`] trait; expiry and phase changes are detected
//! lazily at poll time, so no interrupts or background timers are needed.
//! Every operation is O(1) and non-suspending, intended for a single
//! cooperative loop.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod clock;
pub mod state;

pub use clock::{Clock, Millis, MockClock};
pub use state::{RepeatingTimedState, SimpleState, State, TimedState};

#[cfg(feature = "embassy")]
pub use clock::EmbassyClock;
