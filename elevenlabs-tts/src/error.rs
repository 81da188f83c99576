//! Error types for elevenlabs-tts.
//!
//! Every variant is terminal for the current invocation. The binaries decide
//! how an error maps to an exit status.

use thiserror::Error;

/// Top-level error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Could not parse hook input: {0}")]
    InputParse(#[from] serde_json::Error),

    #[error("Usage: {0}")]
    Usage(String),

    #[error("Synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("Playback failed: {0}")]
    Playback(#[from] PlaybackError),
}

/// Errors from the text-to-speech API
#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Errors from the audio player subprocess
#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("cannot start '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("cannot write audio to player: {0}")]
    Write(std::io::Error),

    #[error("cannot wait for player: {0}")]
    Wait(std::io::Error),

    #[error("player exited with {}", exit_description(.0))]
    Exit(Option<i32>),
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {code}"),
        None => "no exit code (killed by signal)".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_message_with_code() {
        let err = Error::from(PlaybackError::Exit(Some(3)));
        assert_eq!(err.to_string(), "Playback failed: player exited with code 3");
    }

    #[test]
    fn test_exit_message_without_code() {
        let err = PlaybackError::Exit(None);
        assert!(err.to_string().contains("killed by signal"));
    }
}
