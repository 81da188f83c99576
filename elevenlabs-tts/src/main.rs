//! speak: say a message out loud with ElevenLabs TTS.
//!
//! Exits 1 on a missing message or any failure.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::error;

use elevenlabs_tts::config::{self, Config};
use elevenlabs_tts::speaker::Speaker;
use elevenlabs_tts::{init_tracing, Error, Result};

#[derive(Parser, Debug)]
#[command(name = "speak", about = "Speak a message with ElevenLabs TTS")]
struct Args {
    /// Path to config.yaml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Voice ID (overrides ELEVEN_VOICE_ID and the config file)
    #[arg(long)]
    voice: Option<String>,

    /// Model ID (overrides ELEVEN_MODEL_ID and the config file)
    #[arg(long)]
    model: Option<String>,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,

    /// Message to speak; words are joined with single spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    message: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Usage errors exit 1 like every other failure
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };
    init_tracing(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("TTS error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let message = args.message.join(" ").trim().to_string();
    if message.is_empty() {
        return Err(Error::Usage("speak <message>".into()));
    }

    let config = Config::load(args.config.as_deref()).with_env_overrides(config::env_lookup);
    let api_key = config::api_key(config::env_lookup)?;

    let voice_id = args.voice.unwrap_or_else(|| config.voice_id.clone());
    let model_id = args.model.unwrap_or_else(|| config.model_id.clone());

    let speaker = Speaker::new(&config, api_key)?;
    speaker.speak(&message, &voice_id, &model_id).await
}
