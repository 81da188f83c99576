//! ElevenLabs text-to-speech client.
//!
//! Requests raw PCM so the response body can go straight to the player
//! without any container parsing.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use super::player::AudioSource;
use super::PcmFormat;
use crate::error::{Error, Result, SynthesisError};

#[derive(Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

pub struct SynthesisClient {
    client: Client,
    api_base: String,
    api_key: String,
    format: PcmFormat,
}

impl SynthesisClient {
    pub fn new(api_base: &str, api_key: String, format: PcmFormat) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("elevenlabs-tts/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Configuration(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
            format,
        })
    }

    /// Start a synthesis request. Resolves once response headers arrive.
    pub async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        model_id: &str,
    ) -> std::result::Result<AudioStream, SynthesisError> {
        let url = format!("{}/v1/text-to-speech/{voice_id}/stream", self.api_base);
        debug!("POST {url} (model {model_id}, {} chars)", text.len());

        let resp = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .query(&[("output_format", self.format.output_format())])
            .json(&SynthesisRequest { text, model_id })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SynthesisError::Status {
                status,
                body: body.trim().to_string(),
            });
        }

        Ok(AudioStream { resp })
    }
}

/// Streaming response body.
pub struct AudioStream {
    resp: reqwest::Response,
}

#[async_trait]
impl AudioSource for AudioStream {
    async fn next_chunk(&mut self) -> std::result::Result<Option<Vec<u8>>, SynthesisError> {
        let chunk = self.resp.chunk().await?;
        Ok(chunk.map(|bytes| bytes.to_vec()))
    }
}
