//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.

use std::{future::Future, ops::Sub, time::Duration};

use crate::{App, AppEvent, AudioClip};

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This ensures
/// the same orchestration code runs in the production TUI and in tests.
///
/// # Implementations
///
/// - **TUI**: crossterm events, ratatui rendering, system commands for
///   speech and playback
/// - **Tests**: scripted events, recorded output, virtual time
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Time instant type. Enables virtual time in tests.
    type Instant: Copy + Ord + Send + Sync + Sub<Output = Duration>;

    /// Poll for the next input event.
    ///
    /// Resolves with the next event, or `None` once the input source is
    /// closed. Implementations are expected to surface a periodic
    /// [`AppEvent::Tick`] when no user input arrives, so deadline-based
    /// transitions keep moving.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<AppEvent>, Self::Error>> + Send;

    /// Current time instant.
    fn now(&self) -> Self::Instant;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App<Self::Instant>) -> Result<(), Self::Error>;

    /// Speak a message aloud.
    ///
    /// Best-effort: failures are swallowed inside the implementation and
    /// never surface to the caller.
    fn say(&mut self, text: &str);

    /// Play an audio clip from the start.
    ///
    /// Best-effort: failures are swallowed inside the implementation and
    /// never surface to the caller.
    fn play_audio(&mut self, clip: &AudioClip);

    /// Clean up platform resources.
    fn stop(&mut self);
}
