//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between the
//! [`App`] state machine and the platform [`Driver`]: it polls events, feeds
//! them to the App with the current time, and executes the returned actions.

use chest_core::SecretCode;

use crate::{App, AppAction, AudioClip, Driver};

/// Generic runtime that orchestrates App and Driver.
pub struct Runtime<D>
where
    D: Driver,
{
    driver: D,
    app: App<D::Instant>,
}

impl<D> Runtime<D>
where
    D: Driver,
{
    /// Create a new runtime with the given driver and configuration.
    pub fn new(driver: D, secret: SecretCode, wrong_audio: Option<AudioClip>) -> Self {
        let app = App::new(secret, wrong_audio);
        Self { driver, app }
    }

    /// Run the main event loop.
    ///
    /// Renders once, then repeats: poll an event, feed it to the App with
    /// the current time, execute the resulting actions. Exits when the App
    /// asks to quit or the input source closes.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;

        loop {
            let Some(event) = self.driver.poll_event().await? else {
                tracing::debug!("input source closed");
                break;
            };

            let now = self.driver.now();
            let actions = self.app.handle(event, now);
            if self.process_actions(actions)? {
                break;
            }
        }

        self.driver.stop();
        Ok(())
    }

    /// Execute actions returned by the App. Returns `true` on quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Quit => return Ok(true),
                AppAction::Say { text } => self.driver.say(&text),
                AppAction::PlayAudio { clip } => self.driver.play_audio(&clip),
            }
        }
        Ok(false)
    }

    /// Get a reference to the App.
    pub fn app(&self) -> &App<D::Instant> {
        &self.app
    }
}
