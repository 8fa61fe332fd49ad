//! Terminal UI for the password chest.
//!
//! A thin shell over [`chest_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic
//! [`chest_app::Runtime`]; this crate handles rendering, key conversion,
//! and the best-effort speech/playback effects.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod effects;
pub mod terminal;
pub mod ui;

pub use terminal::{TerminalDriver, TerminalError};
