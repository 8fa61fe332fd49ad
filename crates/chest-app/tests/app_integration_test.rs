//! Integration tests for the App/Runtime orchestration.
//!
//! A scripted driver feeds a fixed event sequence with virtual timestamps
//! through the real [`Runtime`] loop and records everything the driver was
//! asked to do. Tests end with oracle checks over the recording: which
//! screens were rendered, what was spoken, what was played.

use std::{
    collections::VecDeque,
    convert::Infallible,
    ops::Sub,
    sync::{Arc, Mutex},
    time::Duration,
};

use chest_app::{App, AppEvent, AudioClip, AudioFormat, Driver, KeyInput, Runtime};
use chest_core::{ScreenMode, SecretCode};

/// Virtual instant for deterministic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct TestInstant(Duration);

impl Sub for TestInstant {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        self.0 - rhs.0
    }
}

/// What the runtime asked the driver to do, in order.
#[derive(Debug, Default)]
struct Recording {
    /// Screen mode and message at each render.
    renders: Vec<(ScreenMode, Option<String>)>,
    /// Spoken texts.
    says: Vec<String>,
    /// Played clips.
    plays: Vec<AudioClip>,
    /// Whether stop was called.
    stopped: bool,
}

/// Driver that replays a scripted event sequence under virtual time.
struct ScriptedDriver {
    /// Events paired with the virtual time they arrive at, in millis.
    script: VecDeque<(u64, AppEvent)>,
    /// Current virtual time in millis.
    now: u64,
    recording: Arc<Mutex<Recording>>,
}

impl ScriptedDriver {
    fn new(script: Vec<(u64, AppEvent)>) -> (Self, Arc<Mutex<Recording>>) {
        let recording = Arc::new(Mutex::new(Recording::default()));
        let driver =
            Self { script: script.into_iter().collect(), now: 0, recording: Arc::clone(&recording) };
        (driver, recording)
    }

    fn record(&self) -> std::sync::MutexGuard<'_, Recording> {
        self.recording.lock().expect("recording mutex should not be poisoned")
    }
}

impl Driver for ScriptedDriver {
    type Error = Infallible;
    type Instant = TestInstant;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        let Some((millis, event)) = self.script.pop_front() else {
            return Ok(None);
        };
        self.now = millis;
        Ok(Some(event))
    }

    fn now(&self) -> Self::Instant {
        TestInstant(Duration::from_millis(self.now))
    }

    fn render(&mut self, app: &App<Self::Instant>) -> Result<(), Self::Error> {
        let entry = (app.screen().mode(), app.screen().message().map(str::to_string));
        self.record().renders.push(entry);
        Ok(())
    }

    fn say(&mut self, text: &str) {
        self.record().says.push(text.to_string());
    }

    fn play_audio(&mut self, clip: &AudioClip) {
        self.record().plays.push(clip.clone());
    }

    fn stop(&mut self) {
        self.record().stopped = true;
    }
}

fn secret() -> SecretCode {
    SecretCode::new(vec![2, 7, 1, 9])
}

fn keys(text: &str) -> Vec<(u64, AppEvent)> {
    text.chars().map(|c| (0, AppEvent::Key(KeyInput::Char(c)))).collect()
}

async fn run_script(
    script: Vec<(u64, AppEvent)>,
    wrong_audio: Option<AudioClip>,
) -> Arc<Mutex<Recording>> {
    let (driver, recording) = ScriptedDriver::new(script);
    let runtime = Runtime::new(driver, secret(), wrong_audio);
    runtime.run().await.expect("scripted run should not fail");
    recording
}

#[tokio::test]
async fn unlock_flow_renders_success_and_speaks_win_text() {
    let mut script = keys("2 7 1 9");
    script.push((0, AppEvent::Key(KeyInput::Enter)));

    let recording = run_script(script, None).await;
    let recording = recording.lock().expect("recording mutex should not be poisoned");

    let last_mode = recording.renders.last().map(|(mode, _)| *mode);
    assert_eq!(last_mode, Some(ScreenMode::Success));
    assert_eq!(recording.says, vec![
        "Congratulations! You win a vacation home to Spruce Grove.".to_string()
    ]);
    assert!(recording.plays.is_empty());
    assert!(recording.stopped);
}

#[tokio::test]
async fn wrong_code_with_custom_clip_plays_instead_of_speaking() {
    let clip = AudioClip { bytes: vec![0x52, 0x49, 0x46, 0x46], format: AudioFormat::Wav };
    let mut script = keys("2 7 1 8");
    script.push((0, AppEvent::Key(KeyInput::Enter)));

    let recording = run_script(script, Some(clip.clone())).await;
    let recording = recording.lock().expect("recording mutex should not be poisoned");

    assert_eq!(recording.plays, vec![clip]);
    assert!(recording.says.is_empty());
}

#[tokio::test]
async fn format_error_reverts_on_tick_without_new_input() {
    let mut script = keys("1 2 3");
    script.push((0, AppEvent::Key(KeyInput::Enter)));
    script.push((500, AppEvent::Tick));
    script.push((1000, AppEvent::Tick));

    let recording = run_script(script, None).await;
    let recording = recording.lock().expect("recording mutex should not be poisoned");

    assert_eq!(recording.says, vec!["Enter exactly 4 numbers.".to_string()]);

    // The error screen was rendered, then the deadline tick rendered Normal
    // again with no message.
    let modes: Vec<ScreenMode> = recording.renders.iter().map(|(mode, _)| *mode).collect();
    assert!(modes.contains(&ScreenMode::Error));
    assert_eq!(recording.renders.last(), Some(&(ScreenMode::Normal, None)));
}

#[tokio::test]
async fn esc_quits_and_stops_the_driver() {
    let script = vec![
        (0, AppEvent::Key(KeyInput::Char('2'))),
        (0, AppEvent::Key(KeyInput::Esc)),
        // Anything after Esc must never be processed.
        (0, AppEvent::Key(KeyInput::Enter)),
    ];

    let recording = run_script(script, None).await;
    let recording = recording.lock().expect("recording mutex should not be poisoned");

    assert!(recording.stopped);
    assert!(recording.says.is_empty(), "the Enter after Esc was processed");
}

#[tokio::test]
async fn wrong_then_correct_overwrites_error_with_success() {
    let mut script = keys("2 7 1 8");
    script.push((0, AppEvent::Key(KeyInput::Enter)));
    let mut retry = keys("2 7 1 9");
    retry.push((600, AppEvent::Key(KeyInput::Enter)));
    script.extend(retry);

    let recording = run_script(script, None).await;
    let recording = recording.lock().expect("recording mutex should not be poisoned");

    let last_mode = recording.renders.last().map(|(mode, _)| *mode);
    assert_eq!(last_mode, Some(ScreenMode::Success));
    assert_eq!(recording.says.len(), 2, "wrong text then win text");
}
