//! Application state machine.
//!
//! This module defines the [`App`] state machine, which manages the
//! interactive state of the chest completely decoupled from I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Owns the screen state machine and the text input line.
//! - Decides the announcement side effects after each submission.
//! - Stores terminal dimensions to handle resize events.

use std::{ops::Sub, time::Duration};

use chest_core::{Screen, ScreenConfig, SecretCode, Verdict, config};

use crate::{AppAction, AppEvent, AudioClip, InputState, KeyInput};

/// Application state machine.
///
/// One instance per session; owns that session's screen state so nothing
/// leaks across sessions. No I/O dependencies, fully testable with virtual
/// time.
#[derive(Debug, Clone)]
pub struct App<I>
where
    I: Copy + Ord + Send + Sync + Sub<Output = Duration>,
{
    /// Screen state machine.
    screen: Screen<I>,
    /// Text input line.
    input: InputState,
    /// Custom wrong-password clip supplied at startup. `None` falls back to
    /// speech.
    wrong_audio: Option<AudioClip>,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
}

impl<I> App<I>
where
    I: Copy + Ord + Send + Sync + Sub<Output = Duration>,
{
    /// Create a new App guarding the given secret.
    pub fn new(secret: SecretCode, wrong_audio: Option<AudioClip>) -> Self {
        Self {
            screen: Screen::new(secret, ScreenConfig::default()),
            input: InputState::new(),
            wrong_audio,
            terminal_size: (80, 24),
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent, now: I) -> Vec<AppAction> {
        match event {
            AppEvent::Tick => {
                if self.screen.tick(now) {
                    vec![AppAction::Render]
                } else {
                    vec![]
                }
            },
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::Key(key) => self.handle_key(key, now),
        }
    }

    /// Screen state machine.
    #[must_use]
    pub fn screen(&self) -> &Screen<I> {
        &self.screen
    }

    /// Text input line.
    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Terminal dimensions (columns, rows).
    #[must_use]
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    fn handle_key(&mut self, key: KeyInput, now: I) -> Vec<AppAction> {
        match key {
            KeyInput::Char(c) => {
                self.input.insert(c);
                vec![AppAction::Render]
            },
            KeyInput::Backspace => {
                self.input.backspace();
                vec![AppAction::Render]
            },
            KeyInput::Delete => {
                self.input.delete();
                vec![AppAction::Render]
            },
            KeyInput::Left => {
                self.input.move_left();
                vec![AppAction::Render]
            },
            KeyInput::Right => {
                self.input.move_right();
                vec![AppAction::Render]
            },
            KeyInput::Home => {
                self.input.move_home();
                vec![AppAction::Render]
            },
            KeyInput::End => {
                self.input.move_end();
                vec![AppAction::Render]
            },
            KeyInput::Enter => self.submit(now),
            KeyInput::Esc => vec![AppAction::Quit],
        }
    }

    /// Submit the current input buffer.
    ///
    /// An empty buffer is submitted as-is; it fails the arity check and
    /// shows the wrong-count message like any other short input. Side
    /// effects are decided after the transition: the verdict picks the
    /// announcement, and a custom clip replaces the spoken message on the
    /// wrong-password path.
    fn submit(&mut self, now: I) -> Vec<AppAction> {
        let raw = self.input.take();
        let verdict = self.screen.submit(&raw, now);

        let announce = match verdict {
            Verdict::Unlocked => AppAction::Say { text: config::WIN_TEXT.to_string() },
            Verdict::WrongCode => self.wrong_audio.as_ref().map_or_else(
                || AppAction::Say { text: config::WRONG_TEXT.to_string() },
                |clip| AppAction::PlayAudio { clip: clip.clone() },
            ),
            Verdict::Malformed(err) => AppAction::Say { text: err.to_string() },
        };

        vec![AppAction::Render, announce]
    }
}
