//! Configuration management for elevenlabs-tts.
//!
//! Loads optional defaults from a YAML file in standard locations, then
//! applies environment overrides. The API key is only ever read from the
//! environment.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{Error, Result};

pub const API_KEY_VAR: &str = "ELEVENLABS_API_KEY";
pub const VOICE_ID_VAR: &str = "ELEVEN_VOICE_ID";
pub const MODEL_ID_VAR: &str = "ELEVEN_MODEL_ID";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Executable that reads raw PCM on stdin (ffplay-compatible flags).
    pub program: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            program: "ffplay".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub voice_id: String,
    pub model_id: String,
    /// Name used in the "Hey <name>, ..." greeting. None disables it.
    pub listener: Option<String>,
    pub api_base: String,
    pub player: PlayerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            voice_id: "kdmDKE6EkgrWrrykO9Qt".into(),
            model_id: "eleven_v3".into(),
            listener: None,
            api_base: "https://api.elevenlabs.io".into(),
            player: PlayerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from YAML file.
    ///
    /// Searches standard locations if no path is provided:
    /// 1. ./elevenlabs-tts.yaml
    /// 2. ~/.config/elevenlabs-tts/config.yaml
    /// 3. /etc/elevenlabs-tts/config.yaml
    pub fn load(path: Option<&Path>) -> Self {
        let resolved = path.map(PathBuf::from).or_else(|| {
            let candidates = [
                std::env::current_dir()
                    .ok()
                    .map(|d| d.join("elevenlabs-tts.yaml")),
                dirs::home_dir().map(|h| h.join(".config/elevenlabs-tts/config.yaml")),
                Some(PathBuf::from("/etc/elevenlabs-tts/config.yaml")),
            ];
            candidates.into_iter().flatten().find(|p| p.exists())
        });

        let Some(config_path) = resolved else {
            debug!("No config file found, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match serde_yml::from_str(&contents) {
                Ok(config) => {
                    info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse {}: {e}, using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Failed to read {}: {e}, using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Apply voice/model overrides. `lookup` is normally `std::env::var`.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(voice) = non_blank(lookup(VOICE_ID_VAR)) {
            debug!("Voice overridden by {VOICE_ID_VAR}");
            self.voice_id = voice;
        }
        if let Some(model) = non_blank(lookup(MODEL_ID_VAR)) {
            debug!("Model overridden by {MODEL_ID_VAR}");
            self.model_id = model;
        }
        self
    }

    /// Greeting name, with blank values treated as unset.
    pub fn listener(&self) -> Option<&str> {
        self.listener
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Read the API key, failing when it is absent or blank.
pub fn api_key<F>(lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    non_blank(lookup(API_KEY_VAR))
        .ok_or_else(|| Error::Configuration(format!("{API_KEY_VAR} is not set")))
}

/// Environment lookup used by the binaries.
pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.voice_id, "kdmDKE6EkgrWrrykO9Qt");
        assert_eq!(config.model_id, "eleven_v3");
        assert_eq!(config.player.program, "ffplay");
        assert_eq!(config.listener(), None);
    }

    #[test]
    fn test_load_partial_yaml_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "listener: Eric\nplayer:\n  program: /opt/bin/ffplay\n").unwrap();

        let config = Config::load(Some(&path));
        assert_eq!(config.listener(), Some("Eric"));
        assert_eq!(config.player.program, "/opt/bin/ffplay");
        assert_eq!(config.model_id, "eleven_v3");
    }

    #[test]
    fn test_load_invalid_yaml_falls_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "voice_id: [unterminated").unwrap();

        let config = Config::load(Some(&path));
        assert_eq!(config.voice_id, Config::default().voice_id);
    }

    #[test]
    fn test_load_missing_explicit_path_falls_back() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(Some(&temp.path().join("nope.yaml")));
        assert_eq!(config.api_base, "https://api.elevenlabs.io");
    }

    #[test]
    fn test_env_overrides_file_values() {
        let config = Config {
            voice_id: "from-file".into(),
            ..Config::default()
        }
        .with_env_overrides(lookup_from(&[
            (VOICE_ID_VAR, "from-env"),
            (MODEL_ID_VAR, "eleven_flash_v2_5"),
        ]));
        assert_eq!(config.voice_id, "from-env");
        assert_eq!(config.model_id, "eleven_flash_v2_5");
    }

    #[test]
    fn test_blank_env_values_ignored() {
        let config = Config::default().with_env_overrides(lookup_from(&[(VOICE_ID_VAR, "  ")]));
        assert_eq!(config.voice_id, "kdmDKE6EkgrWrrykO9Qt");
    }

    #[test]
    fn test_blank_listener_is_none() {
        let config = Config {
            listener: Some("   ".into()),
            ..Config::default()
        };
        assert_eq!(config.listener(), None);
    }

    #[test]
    fn test_api_key_required() {
        let err = api_key(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains(API_KEY_VAR));

        let err = api_key(lookup_from(&[(API_KEY_VAR, "")])).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_api_key_present() {
        let key = api_key(lookup_from(&[(API_KEY_VAR, "sk-test")])).unwrap();
        assert_eq!(key, "sk-test");
    }
}
