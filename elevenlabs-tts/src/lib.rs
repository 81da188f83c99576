//! elevenlabs-tts: spoken notifications for Claude Code.
//!
//! `tts-hook` turns a hook event on stdin into a short sentence and speaks
//! it; `speak` speaks its command-line arguments. Both stream ElevenLabs PCM
//! audio into ffplay.

pub mod classifier;
pub mod config;
pub mod error;
pub mod hook;
pub mod speaker;

pub use error::{Error, Result};

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr. `RUST_LOG` takes precedence over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        "debug,hyper_util=info,reqwest=info"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}
