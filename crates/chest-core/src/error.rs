//! Error types for code validation.
//!
//! Format errors are always recoverable: the screen state machine converts
//! them into a transient error display and control returns to the idle
//! screen automatically. Nothing here is ever fatal to the process.

use thiserror::Error;

/// Raw input did not parse into the required count of well-formed integers.
///
/// The `Display` output of each variant is the exact message shown on
/// screen and spoken aloud.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Token count differs from the secret's fixed length.
    #[error("Enter exactly {expected} numbers.")]
    WrongCount {
        /// Number of tokens the secret requires.
        expected: usize,
    },

    /// A token is not an optional leading `-` followed by decimal digits.
    #[error("Only whole numbers allowed.")]
    NotANumber,
}
