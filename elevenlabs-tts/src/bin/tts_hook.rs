//! tts-hook: Claude Code hook binary for spoken notifications.
//!
//! Reads event JSON from stdin, picks a short sentence for it and speaks it
//! through ElevenLabs + ffplay. Always exits 0 so a failed notification
//! never blocks Claude Code; failures are logged to stderr.

use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, error};

use elevenlabs_tts::classifier::{address, classify};
use elevenlabs_tts::config::{self, Config};
use elevenlabs_tts::hook::HookEvent;
use elevenlabs_tts::init_tracing;
use elevenlabs_tts::speaker::Speaker;

#[derive(Parser, Debug)]
#[command(name = "tts-hook", about = "Speak Claude Code hook events")]
struct Args {
    /// Path to config.yaml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the sentence to stdout instead of speaking it
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Bad flags must not turn into a failing hook either
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return;
        }
    };
    init_tracing(args.verbose);

    let config = Config::load(args.config.as_deref()).with_env_overrides(config::env_lookup);

    let event = HookEvent::from_stdin().await;
    debug!("Hook event: {event:?}");
    let text = address(config.listener(), &classify(&event));

    if args.dry_run {
        println!("{text}");
        return;
    }

    if let Err(e) = speak(&config, &text).await {
        error!("TTS hook error: {e}");
    }
}

async fn speak(config: &Config, text: &str) -> elevenlabs_tts::Result<()> {
    let api_key = config::api_key(config::env_lookup)?;
    let speaker = Speaker::new(config, api_key)?;
    speaker
        .speak(text, &config.voice_id, &config.model_id)
        .await
}
