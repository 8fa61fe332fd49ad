//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine. Events originate from user interaction
//! (keyboard, resize) and from the periodic tick that drives deadline-based
//! transitions.

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Periodic tick. Drives the error auto-revert and celebration frames.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),
}
