//! Screen state machine.
//!
//! Owns the full-screen display mode and the transition policy triggered by
//! submissions. Methods take time as input and return outcomes for the
//! caller to act on, which keeps the state machine pure (no I/O) and makes
//! testing straightforward.
//!
//! # State machine
//!
//! ```text
//!              Submit(match)
//! ┌────────┐ ───────────────────> ┌─────────┐
//! │ Normal │                      │ Success │──┐ Submit(any)
//! └────────┘ <──┐                 └─────────┘  │ re-enters
//!     │         │                              ↓
//!     │         │ tick at dwell            (step 1)
//!     │         │ deadline
//!     ↓         │
//! ┌────────┐ ───┘
//! │ Error  │
//! └────────┘
//!   Submit(mismatch or malformed)
//! ```
//!
//! Error is always transient: entering it records when it began, and a
//! later tick past the dwell reverts to Normal without further input.
//! Success is sticky until the next submission.

use std::{ops::Sub, time::Duration};

use crate::{
    code::{self, SecretCode},
    config,
    error::FormatError,
};

/// Display mode of the full-screen UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenMode {
    /// Idle, awaiting input.
    Normal,
    /// Code matched; sticky until the next submission.
    Success,
    /// Transient failure display; auto-reverts to Normal.
    Error,
}

/// Which failure an Error display is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raw input did not parse.
    Format,
    /// Input parsed but did not match the secret.
    WrongCode,
}

/// Outcome of a submission.
///
/// A mismatch is not an error in the technical sense, just a branch of the
/// comparison, so it gets its own variant rather than an error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Sequence matched the secret.
    Unlocked,
    /// Sequence parsed but did not equal the secret.
    WrongCode,
    /// Raw text did not parse into the required count of integers.
    Malformed(FormatError),
}

/// Screen state machine configuration.
#[derive(Debug, Clone)]
pub struct ScreenConfig {
    /// How long a format error stays visible.
    pub format_dwell: Duration,
    /// How long a wrong-password error stays visible.
    pub wrong_dwell: Duration,
    /// Delay between celebration frames.
    pub frame_interval: Duration,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            format_dwell: config::FORMAT_ERROR_DWELL,
            wrong_dwell: config::WRONG_CODE_DWELL,
            frame_interval: config::FRAME_INTERVAL,
        }
    }
}

/// Screen state machine.
///
/// One instance per session, created in [`ScreenMode::Normal`] and mutated
/// for the session's lifetime. Each submission is a fresh, independent
/// evaluation: there is no attempt counting and no lockout.
///
/// Generic over `Instant` to support both real time and virtual time for
/// deterministic testing.
#[derive(Debug, Clone)]
pub struct Screen<I>
where
    I: Copy + Ord + Send + Sync + Sub<Output = Duration>,
{
    /// Current display mode.
    mode: ScreenMode,
    /// Configuration.
    config: ScreenConfig,
    /// Secret the submissions are compared against.
    secret: SecretCode,
    /// Message shown under the headline. `None` in Normal mode.
    message: Option<String>,
    /// Failure kind while in Error mode.
    error_kind: Option<ErrorKind>,
    /// When the current Error display began.
    error_since: Option<I>,
    /// Dwell for the current Error display.
    error_dwell: Duration,
    /// Index into the celebration frames while in Success mode.
    frame: usize,
    /// When the current celebration frame was shown.
    frame_since: Option<I>,
}

impl<I> Screen<I>
where
    I: Copy + Ord + Send + Sync + Sub<Output = Duration>,
{
    /// Create a screen in Normal mode guarding the given secret.
    pub fn new(secret: SecretCode, config: ScreenConfig) -> Self {
        Self {
            mode: ScreenMode::Normal,
            config,
            secret,
            message: None,
            error_kind: None,
            error_since: None,
            error_dwell: Duration::ZERO,
            frame: 0,
            frame_since: None,
        }
    }

    /// Current display mode.
    #[must_use]
    pub fn mode(&self) -> ScreenMode {
        self.mode
    }

    /// Message shown under the headline. `None` in Normal mode.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Failure kind while in Error mode. `None` otherwise.
    #[must_use]
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error_kind
    }

    /// The secret this screen validates against.
    #[must_use]
    pub fn secret(&self) -> &SecretCode {
        &self.secret
    }

    /// Celebration frame currently due. `None` outside Success mode.
    #[must_use]
    pub fn celebration_frame(&self) -> Option<&'static str> {
        if self.mode == ScreenMode::Success {
            config::CELEBRATION_FRAMES.get(self.frame).copied()
        } else {
            None
        }
    }

    /// Process a submission.
    ///
    /// Re-enters the machine from any mode: a pending error revert is
    /// cancelled and the outcome alone decides the next mode. Parse failure
    /// enters Error with the parse error's message; a match enters Success
    /// and starts the celebration; a mismatch enters Error with the canned
    /// wrong-password message.
    pub fn submit(&mut self, raw: &str, now: I) -> Verdict {
        match code::parse(raw, self.secret.len()) {
            Err(err) => {
                self.enter_error(
                    err.to_string(),
                    ErrorKind::Format,
                    self.config.format_dwell,
                    now,
                );
                Verdict::Malformed(err)
            },
            Ok(values) if self.secret.matches(&values) => {
                tracing::debug!("code accepted");
                self.mode = ScreenMode::Success;
                self.message = Some(config::WIN_TEXT.to_string());
                self.error_kind = None;
                self.error_since = None;
                self.frame = 0;
                self.frame_since = Some(now);
                Verdict::Unlocked
            },
            Ok(_) => {
                self.enter_error(
                    config::WRONG_TEXT.to_string(),
                    ErrorKind::WrongCode,
                    self.config.wrong_dwell,
                    now,
                );
                Verdict::WrongCode
            },
        }
    }

    /// Process periodic maintenance (error revert and celebration frames).
    ///
    /// Returns `true` if the display changed: an Error display past its
    /// dwell reverts to Normal, and a Success display advances to the next
    /// celebration frame once the frame interval has elapsed.
    pub fn tick(&mut self, now: I) -> bool {
        match self.mode {
            ScreenMode::Error => {
                let Some(since) = self.error_since else {
                    return false;
                };
                if now - since >= self.error_dwell {
                    tracing::debug!("error display reverting to normal");
                    self.reset();
                    return true;
                }
                false
            },
            ScreenMode::Success => {
                let Some(since) = self.frame_since else {
                    return false;
                };
                let last = config::CELEBRATION_FRAMES.len().saturating_sub(1);
                if self.frame < last && now - since >= self.config.frame_interval {
                    self.frame = self.frame.saturating_add(1);
                    self.frame_since = Some(now);
                    return true;
                }
                false
            },
            ScreenMode::Normal => false,
        }
    }

    fn enter_error(&mut self, message: String, kind: ErrorKind, dwell: Duration, now: I) {
        tracing::debug!(%message, "code rejected");
        self.mode = ScreenMode::Error;
        self.message = Some(message);
        self.error_kind = Some(kind);
        self.error_since = Some(now);
        self.error_dwell = dwell;
        self.frame_since = None;
    }

    fn reset(&mut self) {
        self.mode = ScreenMode::Normal;
        self.message = None;
        self.error_kind = None;
        self.error_since = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Virtual instant for driving the state machine without real time.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    struct TestInstant(Duration);

    impl Sub for TestInstant {
        type Output = Duration;

        fn sub(self, rhs: Self) -> Duration {
            self.0 - rhs.0
        }
    }

    fn at(millis: u64) -> TestInstant {
        TestInstant(Duration::from_millis(millis))
    }

    fn screen() -> Screen<TestInstant> {
        Screen::new(SecretCode::new(vec![2, 7, 1, 9]), ScreenConfig::default())
    }

    #[test]
    fn starts_in_normal_mode() {
        let screen = screen();
        assert_eq!(screen.mode(), ScreenMode::Normal);
        assert_eq!(screen.message(), None);
        assert_eq!(screen.celebration_frame(), None);
    }

    #[test]
    fn matching_code_enters_success_with_win_text() {
        let mut screen = screen();
        assert_eq!(screen.submit("2 7 1 9", at(0)), Verdict::Unlocked);
        assert_eq!(screen.mode(), ScreenMode::Success);
        assert_eq!(screen.message(), Some(config::WIN_TEXT));
        assert_eq!(screen.celebration_frame(), Some("🧰"));
    }

    #[test]
    fn comma_separated_code_also_unlocks() {
        let mut screen = screen();
        assert_eq!(screen.submit("2,7,1,9", at(0)), Verdict::Unlocked);
        assert_eq!(screen.mode(), ScreenMode::Success);
    }

    #[test]
    fn wrong_count_enters_error_with_count_in_message() {
        let mut screen = screen();
        let verdict = screen.submit("1 2 3", at(0));
        assert_eq!(verdict, Verdict::Malformed(FormatError::WrongCount { expected: 4 }));
        assert_eq!(screen.mode(), ScreenMode::Error);
        assert_eq!(screen.error_kind(), Some(ErrorKind::Format));
        assert_eq!(screen.message(), Some("Enter exactly 4 numbers."));
    }

    #[test]
    fn non_numeric_token_enters_error() {
        let mut screen = screen();
        let verdict = screen.submit("2 7 one 9", at(0));
        assert_eq!(verdict, Verdict::Malformed(FormatError::NotANumber));
        assert_eq!(screen.error_kind(), Some(ErrorKind::Format));
        assert_eq!(screen.message(), Some("Only whole numbers allowed."));
    }

    #[test]
    fn mismatch_enters_error_with_wrong_text() {
        let mut screen = screen();
        assert_eq!(screen.submit("2 7 1 8", at(0)), Verdict::WrongCode);
        assert_eq!(screen.mode(), ScreenMode::Error);
        assert_eq!(screen.error_kind(), Some(ErrorKind::WrongCode));
        assert_eq!(screen.message(), Some(config::WRONG_TEXT));
    }

    #[test]
    fn negated_first_value_is_a_mismatch_not_a_format_error() {
        let mut screen = screen();
        assert_eq!(screen.submit("-2 7 1 9", at(0)), Verdict::WrongCode);
        assert_eq!(screen.error_kind(), Some(ErrorKind::WrongCode));
    }

    #[test]
    fn format_error_reverts_after_its_dwell() {
        let mut screen = screen();
        let _ = screen.submit("1 2 3", at(0));

        assert!(!screen.tick(at(999)), "dwell not elapsed yet");
        assert_eq!(screen.mode(), ScreenMode::Error);

        assert!(screen.tick(at(1000)), "revert must report a display change");
        assert_eq!(screen.mode(), ScreenMode::Normal);
        assert_eq!(screen.message(), None);
        assert_eq!(screen.error_kind(), None);
    }

    #[test]
    fn wrong_code_dwell_is_longer_than_format_dwell() {
        let mut screen = screen();
        let _ = screen.submit("2 7 1 8", at(0));

        assert!(!screen.tick(at(1000)));
        assert_eq!(screen.mode(), ScreenMode::Error);

        assert!(screen.tick(at(1200)));
        assert_eq!(screen.mode(), ScreenMode::Normal);
    }

    #[test]
    fn success_is_sticky_across_ticks() {
        let mut screen = screen();
        let _ = screen.submit("2 7 1 9", at(0));

        for millis in [1000, 5000, 60_000] {
            let _ = screen.tick(at(millis));
            assert_eq!(screen.mode(), ScreenMode::Success);
        }
    }

    #[test]
    fn celebration_frames_advance_and_stop_on_last() {
        let mut screen = screen();
        let _ = screen.submit("2 7 1 9", at(0));
        assert_eq!(screen.celebration_frame(), Some("🧰"));

        assert!(!screen.tick(at(100)), "frame interval not elapsed");
        assert!(screen.tick(at(220)));
        assert_eq!(screen.celebration_frame(), Some("🧰 ✨"));

        // Walk to the final frame.
        let mut now = 220;
        for _ in 0..10 {
            now += 220;
            let _ = screen.tick(at(now));
        }
        assert_eq!(screen.celebration_frame(), Some("🏡 ✨✨✨"));
        assert!(!screen.tick(at(now + 220)), "final frame must hold");
    }

    #[test]
    fn submit_during_error_dwell_cancels_pending_revert() {
        let mut screen = screen();
        let _ = screen.submit("1 2 3", at(0));
        assert_eq!(screen.submit("2 7 1 9", at(500)), Verdict::Unlocked);

        // The old revert deadline must not knock the screen out of Success.
        let _ = screen.tick(at(1100));
        assert_eq!(screen.mode(), ScreenMode::Success);
    }

    #[test]
    fn resubmission_overwrites_success() {
        let mut screen = screen();
        let _ = screen.submit("2 7 1 9", at(0));
        assert_eq!(screen.submit("2 7 1 8", at(1000)), Verdict::WrongCode);
        assert_eq!(screen.mode(), ScreenMode::Error);
        assert_eq!(screen.celebration_frame(), None);
    }

    #[test]
    fn error_revert_requires_no_new_submission() {
        let mut screen = screen();
        let _ = screen.submit("", at(0));
        assert_eq!(screen.mode(), ScreenMode::Error);

        // Only ticks, no further submit.
        let _ = screen.tick(at(2000));
        assert_eq!(screen.mode(), ScreenMode::Normal);
    }
}
