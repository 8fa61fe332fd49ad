//! Best-effort speech and audio playback.
//!
//! Both effects spawn detached system commands and return immediately:
//! feedback sound must never block or fail the core validation flow. A
//! missing tool, a failed spawn, or a bad temp file is logged at debug
//! level and otherwise swallowed.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process::Stdio,
};

use chest_app::{AudioClip, AudioFormat};
use thiserror::Error;
use tokio::process::{Child, Command};

/// Candidate text-to-speech commands, tried in order.
const SPEAKERS: &[&str] = &["espeak-ng", "espeak", "say", "spd-say"];

/// Candidate audio players with their arguments, tried in order.
const PLAYERS: &[(&str, &[&str])] = &[
    ("ffplay", &["-nodisp", "-autoexit", "-loglevel", "quiet"]),
    ("mpv", &["--no-video", "--really-quiet"]),
    ("paplay", &[]),
    ("aplay", &["-q"]),
];

/// Errors from loading a custom clip at startup.
///
/// Unlike playback itself, loading happens before the session starts and
/// is allowed to fail loudly: a user who passed `--wrong-audio` wants to
/// know the file is unusable.
#[derive(Debug, Error)]
pub enum ClipError {
    /// The file has no extension or an unsupported one.
    #[error("unsupported audio format {0:?} (wav/mp3/ogg only)")]
    UnsupportedFormat(String),

    /// The file could not be read.
    #[error("failed to read audio file: {0}")]
    Io(#[from] io::Error),
}

/// Load a custom clip from disk, deriving its format from the extension.
pub fn load_clip(path: &Path) -> Result<AudioClip, ClipError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let format = AudioFormat::from_extension(ext)
        .ok_or_else(|| ClipError::UnsupportedFormat(ext.to_string()))?;
    let bytes = std::fs::read(path)?;
    Ok(AudioClip { bytes, format })
}

/// Reap a detached child so it does not linger as a zombie.
fn reap(mut child: Child) {
    tokio::spawn(async move {
        let _ = child.wait().await;
    });
}

/// Speech announcer backed by the first available system TTS command.
#[derive(Debug, Default)]
pub struct Announcer {
    /// Command that spawned successfully before, tried first afterwards.
    resolved: Option<&'static str>,
}

impl Announcer {
    /// Create an announcer; command resolution is lazy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Speak `text` aloud. Best-effort; failures are swallowed.
    pub fn say(&mut self, text: &str) {
        let candidates: Vec<&'static str> = match self.resolved {
            Some(cmd) => vec![cmd],
            None => SPEAKERS.to_vec(),
        };

        for cmd in candidates {
            let spawned = Command::new(cmd)
                .arg(text)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();

            match spawned {
                Ok(child) => {
                    self.resolved = Some(cmd);
                    reap(child);
                    return;
                },
                Err(err) => {
                    tracing::debug!(command = cmd, "speech command unavailable: {err}");
                },
            }
        }

        tracing::debug!("no speech command available, message not announced");
    }
}

/// Audio player backed by the first available system playback command.
///
/// The clip bytes are staged in a temp file so any external player can
/// read them; the file is removed once playback finishes.
#[derive(Debug, Default)]
pub struct AudioPlayer {
    /// Index into [`PLAYERS`] that spawned successfully before.
    resolved: Option<usize>,
}

impl AudioPlayer {
    /// Create a player; command resolution is lazy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Play `clip` from the start. Best-effort; failures are swallowed.
    pub fn play(&mut self, clip: &AudioClip) {
        let path = match stage_clip(clip) {
            Ok(path) => path,
            Err(err) => {
                tracing::debug!("failed to stage audio clip: {err}");
                return;
            },
        };

        let indices: Vec<usize> = match self.resolved {
            Some(idx) => vec![idx],
            None => (0..PLAYERS.len()).collect(),
        };

        for idx in indices {
            let (cmd, args) = PLAYERS[idx];
            let spawned = Command::new(cmd)
                .args(args)
                .arg(&path)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();

            match spawned {
                Ok(mut child) => {
                    self.resolved = Some(idx);
                    tokio::spawn(async move {
                        let _ = child.wait().await;
                        let _ = tokio::fs::remove_file(&path).await;
                    });
                    return;
                },
                Err(err) => {
                    tracing::debug!(command = cmd, "audio player unavailable: {err}");
                },
            }
        }

        tracing::debug!("no audio player available, clip not played");
        let _ = std::fs::remove_file(&path);
    }
}

/// Write the clip bytes to a temp file the players can open.
fn stage_clip(clip: &AudioClip) -> io::Result<PathBuf> {
    let mut file = tempfile::Builder::new()
        .prefix("chest-")
        .suffix(&format!(".{}", clip.format.extension()))
        .tempfile()?;
    file.write_all(&clip.bytes)?;

    // Persist so the file survives until the player task removes it.
    let (_handle, path) = file.keep().map_err(|err| err.error)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_clip_rejects_unsupported_extension() {
        let err = load_clip(Path::new("alarm.flac")).expect_err("flac must be rejected");
        assert!(matches!(err, ClipError::UnsupportedFormat(ext) if ext == "flac"));
    }

    #[test]
    fn load_clip_rejects_missing_extension() {
        let err = load_clip(Path::new("alarm")).expect_err("no extension must be rejected");
        assert!(matches!(err, ClipError::UnsupportedFormat(ext) if ext.is_empty()));
    }

    #[test]
    fn load_clip_reads_bytes_and_format() {
        let mut file = tempfile::Builder::new()
            .suffix(".wav")
            .tempfile()
            .expect("temp file should be created");
        file.write_all(b"RIFF").expect("temp write should succeed");

        let clip = load_clip(file.path()).expect("wav clip should load");
        assert_eq!(clip.format, AudioFormat::Wav);
        assert_eq!(clip.bytes, b"RIFF");
    }

    #[test]
    fn stage_clip_writes_bytes_with_extension() {
        let clip = AudioClip { bytes: vec![1, 2, 3], format: AudioFormat::Ogg };
        let path = stage_clip(&clip).expect("staging should succeed");

        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("ogg"));
        assert_eq!(std::fs::read(&path).expect("staged file should be readable"), vec![1, 2, 3]);
        let _ = std::fs::remove_file(path);
    }
}
