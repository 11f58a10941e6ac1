//! Config file loading and API key resolution.
//!
//! The config file lives at `$XDG_CONFIG_HOME/revcheck/config.toml` (falling
//! back to `~/.config/revcheck/config.toml`). All keys are optional:
//!
//! ```toml
//! api_key = "sk-…"
//! model = "gpt-4o"
//! theme = "dracula"
//! ```
//!
//! Config errors are soft failures printed to stderr before the alternate
//! screen is entered — a broken config never prevents startup on its own.
//! The API key is the one hard requirement, resolved in priority order:
//! `OPENAI_API_KEY` environment variable first, then the config file.

use serde::Deserialize;
use std::path::PathBuf;

/// Model requested when neither the CLI nor the config names one.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Parsed contents of the config file. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API key for the chat-completion endpoint (env var takes priority).
    pub api_key: Option<String>,
    /// Model name override.
    pub model: Option<String>,
    /// Theme name override.
    pub theme: Option<String>,
}

/// Returns the path to the revcheck config file.
///
/// Prefers `$XDG_CONFIG_HOME/revcheck/config.toml`; falls back to
/// `~/.config/revcheck/config.toml` when the env var is absent.
pub fn config_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from(".config"));
    base.join("revcheck").join("config.toml")
}

/// Loads the config file, returning defaults when it is missing or broken.
///
/// A parse error is reported on stderr and otherwise ignored.
pub fn load() -> Config {
    let path = config_path();
    let raw = match std::fs::read_to_string(&path) {
        Ok(s) => s,
        Err(_) => return Config::default(),
    };
    match parse(&raw) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("revcheck: config parse error in {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Parses raw TOML into a [`Config`].
fn parse(raw: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(raw)
}

/// Resolves the API key: environment variable first, then config file.
///
/// Blank values are treated as absent at both levels.
pub fn resolve_api_key(env_key: Option<&str>, config: &Config) -> Option<String> {
    non_blank(env_key).or_else(|| non_blank(config.api_key.as_deref()))
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}
