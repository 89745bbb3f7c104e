//! Text-to-speech capability.
//!
//! The pipeline never speaks on its own; callers hand the summary to a
//! `Speaker` so tests and quiet environments can substitute a no-op.

use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("failed to launch TTS program '{program}': {source}")]
    LaunchFailed {
        program: String,
        source: std::io::Error,
    },
}

/// Something that can read a piece of text aloud.
pub trait Speaker {
    fn speak(&self, text: &str) -> Result<(), SpeechError>;
}

/// Speaks via a platform text-to-speech command, fire-and-forget.
pub struct CommandSpeaker {
    program: String,
}

impl CommandSpeaker {
    pub fn new(program: String) -> Self {
        Self { program }
    }

    /// The platform default TTS command.
    pub fn platform_default() -> Self {
        let program = if cfg!(target_os = "macos") {
            "say"
        } else {
            "espeak"
        };
        Self::new(program.to_string())
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&self, text: &str) -> Result<(), SpeechError> {
        // Spawn without waiting; playback continues while the CLI returns.
        Command::new(&self.program)
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SpeechError::LaunchFailed {
                program: self.program.clone(),
                source,
            })?;
        Ok(())
    }
}

/// Discards all speech requests.
pub struct NullSpeaker;

impl Speaker for NullSpeaker {
    fn speak(&self, _text: &str) -> Result<(), SpeechError> {
        Ok(())
    }
}
