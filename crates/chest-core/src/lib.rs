//! Core logic for the password chest.
//!
//! Pure state machines and validation with no I/O. The screen state machine
//! is generic over an instant type so tests can drive it with virtual time,
//! the same way it runs against the real clock in production.
//!
//! # Components
//!
//! - [`parse`]: raw submitted text to an ordered integer sequence
//! - [`SecretCode`]: the fixed sequence a submission must match
//! - [`Screen`]: display-mode state machine (normal, success, error)

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod code;
pub mod config;
mod error;
mod screen;

pub use code::{SecretCode, parse};
pub use error::FormatError;
pub use screen::{ErrorKind, Screen, ScreenConfig, ScreenMode, Verdict};
