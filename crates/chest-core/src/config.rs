//! Built-in configuration constants.
//!
//! Supplied at process start and fixed for the life of the session; none of
//! these are user-configurable at runtime.

use std::time::Duration;

/// Default secret sequence guarding the chest.
pub const DEFAULT_SECRET: [i64; 4] = [2, 7, 1, 9];

/// Message displayed and announced when the code matches.
pub const WIN_TEXT: &str = "Congratulations! You win a vacation home to Spruce Grove.";

/// Generic message for a well-formed code that does not match.
pub const WRONG_TEXT: &str = "Wrong password.";

/// How long a format error stays on screen before reverting to idle.
pub const FORMAT_ERROR_DWELL: Duration = Duration::from_millis(1000);

/// How long a wrong-password error stays on screen before reverting.
pub const WRONG_CODE_DWELL: Duration = Duration::from_millis(1200);

/// Delay between celebration frames after an unlock.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(220);

/// Celebration frames played after an unlock, in order. The sequence stops
/// on the final frame.
pub const CELEBRATION_FRAMES: &[&str] =
    &["🧰", "🧰 ✨", "🧰 ✨✨", "🎁 ✨✨", "🎁 ✨✨✨", "🏡 ✨✨✨"];
