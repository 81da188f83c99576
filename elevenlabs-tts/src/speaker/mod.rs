//! Speaker: ElevenLabs synthesis piped straight into a local player.
//!
//! Components:
//! - `client`: streaming text-to-speech request against the ElevenLabs API
//! - `player`: ffplay subprocess reading raw PCM on stdin
//!
//! Audio is never buffered in full. Each response chunk is written to the
//! player before the next one is pulled, so the pipe paces the download.

pub mod client;
pub mod player;

use std::time::Instant;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use client::SynthesisClient;
use player::Player;

/// Raw PCM encoding shared by the API request and the player flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    pub sample_rate: u32,
    pub channels: u16,
}

/// Signed 16-bit little-endian, 24 kHz, mono.
pub const PCM_24K_MONO: PcmFormat = PcmFormat {
    sample_rate: 24000,
    channels: 1,
};

impl PcmFormat {
    /// Value of the API's `output_format` query parameter.
    pub fn output_format(&self) -> String {
        format!("pcm_{}", self.sample_rate)
    }

    /// ffplay flags for decoding this format from stdin.
    pub fn player_args(&self) -> Vec<String> {
        vec![
            "-autoexit".into(),
            "-nodisp".into(),
            "-f".into(),
            "s16le".into(),
            "-ar".into(),
            self.sample_rate.to_string(),
            "-ac".into(),
            self.channels.to_string(),
            "-".into(),
        ]
    }
}

pub struct Speaker {
    client: SynthesisClient,
    player: Player,
}

impl Speaker {
    pub fn new(config: &Config, api_key: String) -> Result<Self> {
        Ok(Self {
            client: SynthesisClient::new(&config.api_base, api_key, PCM_24K_MONO)?,
            player: Player::new(&config.player.program, PCM_24K_MONO),
        })
    }

    /// Speak `text` and wait until the player has exited.
    pub async fn speak(&self, text: &str, voice_id: &str, model_id: &str) -> Result<()> {
        let t0 = Instant::now();
        info!("Speaking: \"{text}\"");

        let mut audio = self.client.synthesize(text, voice_id, model_id).await?;
        debug!("Synthesis response after {}ms", t0.elapsed().as_millis());

        let bytes = self.player.play(&mut audio).await?;
        info!(
            "Done speaking ({bytes} bytes, {}ms)",
            t0.elapsed().as_millis()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_matches_player_rate() {
        let args = PCM_24K_MONO.player_args();
        assert_eq!(PCM_24K_MONO.output_format(), "pcm_24000");

        let rate = args.iter().position(|a| a == "-ar").map(|i| args[i + 1].as_str());
        let channels = args.iter().position(|a| a == "-ac").map(|i| args[i + 1].as_str());
        let format = args.iter().position(|a| a == "-f").map(|i| args[i + 1].as_str());
        assert_eq!(rate, Some("24000"));
        assert_eq!(channels, Some("1"));
        assert_eq!(format, Some("s16le"));
    }

    #[test]
    fn test_player_reads_stdin_without_display() {
        let args = PCM_24K_MONO.player_args();
        assert!(args.contains(&"-autoexit".to_string()));
        assert!(args.contains(&"-nodisp".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("-"));
    }
}
