//! Plain latch with no timing

use super::State;

/// A state that is inside exactly between `enter` and `exit`.
///
/// `force_enter` and `enter` are equivalent here since there is no timer
/// to reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SimpleState {
    entered: bool,
}

impl SimpleState {
    /// Create an exited latch.
    pub const fn new() -> Self {
        Self { entered: false }
    }
}

impl State for SimpleState {
    fn enter(&mut self) {
        self.force_enter();
    }

    fn force_enter(&mut self) {
        self.entered = true;
    }

    fn exit(&mut self) {
        self.entered = false;
    }

    fn is_inside(&self) -> bool {
        self.entered
    }
}
