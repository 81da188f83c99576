//! Audio playback through an ffplay subprocess.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

use super::PcmFormat;
use crate::error::{PlaybackError, Result, SynthesisError};

/// Incremental audio bytes, e.g. an HTTP response body.
#[async_trait]
pub trait AudioSource: Send {
    /// Next chunk, or None at end of stream.
    async fn next_chunk(&mut self) -> std::result::Result<Option<Vec<u8>>, SynthesisError>;
}

pub struct Player {
    program: String,
    format: PcmFormat,
}

impl Player {
    pub fn new(program: &str, format: PcmFormat) -> Self {
        Self {
            program: program.to_string(),
            format,
        }
    }

    /// Pipe `audio` into a fresh player process and wait for it to exit.
    /// Returns the number of bytes handed to the player.
    ///
    /// If the source fails mid-stream the player is killed.
    pub async fn play<S>(&self, audio: &mut S) -> Result<u64>
    where
        S: AudioSource + ?Sized,
    {
        let args = self.format.player_args();
        debug!("Spawning {} {}", self.program, args.join(" "));

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| PlaybackError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let mut stdin = child.stdin.take().ok_or_else(|| {
            PlaybackError::Write(std::io::Error::other("player stdin was not captured"))
        })?;

        let mut written: u64 = 0;
        let mut write_error = None;
        while let Some(chunk) = audio.next_chunk().await? {
            if let Err(e) = stdin.write_all(&chunk).await {
                write_error = Some(e);
                break;
            }
            written += chunk.len() as u64;
        }
        // Closing stdin lets the player reach end of stream and exit
        drop(stdin);

        let status = child.wait().await.map_err(PlaybackError::Wait)?;
        if !status.success() {
            return Err(PlaybackError::Exit(status.code()).into());
        }
        if let Some(e) = write_error {
            warn!("Player exited cleanly after a failed write");
            return Err(PlaybackError::Write(e).into());
        }

        debug!("Player finished after {written} bytes");
        Ok(written)
    }
}
