//! State variants for control loops
//!
//! One shared contract, three implementations. A driver loop calls
//! [`State::enter`], [`State::force_enter`], and [`State::exit`] in
//! response to events and polls [`State::is_inside`] every tick to decide
//! behavior.

pub mod repeating;
pub mod simple;
pub mod timed;

pub use repeating::RepeatingTimedState;
pub use simple::SimpleState;
pub use timed::TimedState;

/// The capability set shared by every state variant.
pub trait State {
    /// Enter the state. Has no effect if the state is already active;
    /// timed variants in particular do not reset their timer.
    fn enter(&mut self);

    /// Enter the state unconditionally, restarting any timer. Useful for
    /// re-arming a variant that exits itself automatically.
    fn force_enter(&mut self);

    /// Exit the state. After this call `is_inside` reads false until the
    /// next `enter` or `force_enter`, though timed variants may also have
    /// exited on their own before `exit` was ever called.
    fn exit(&mut self);

    /// Whether the state is currently active.
    ///
    /// Pure with respect to the stored state and the clock reading: polling
    /// it repeatedly without a state change or clock advance returns the
    /// same answer.
    fn is_inside(&self) -> bool;
}
