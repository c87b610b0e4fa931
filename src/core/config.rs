//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.artchat/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! A missing `OPENAI_API_KEY` is not an error: the session falls back to
//! the offline demo gateway.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ArtchatConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub max_tokens: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_MAX_TOKENS: u32 = 100;
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// None means no credential anywhere: run against the offline gateway.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.artchat/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".artchat").join("config.toml"))
}

/// Load config from `~/.artchat/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ArtchatConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ArtchatConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ArtchatConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ArtchatConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ArtchatConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# artchat Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults, then this file, then env vars, then CLI flags.

# [api]
# api_key = "sk-..."                   # Or set OPENAI_API_KEY env var
# model = "gpt-4o-mini"                # Or set OPENAI_MODEL / --model
# base_url = "https://api.openai.com/v1"
# max_tokens = 100                     # Or set OPENAI_MAX_TOKENS
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_model` is the `--model` flag (None = not specified).
pub fn resolve(config: &ArtchatConfig, cli_model: Option<&str>) -> ResolvedConfig {
    // API key: env → config. Empty values count as absent.
    let api_key = std::env::var("OPENAI_API_KEY")
        .ok()
        .filter(|k| !k.is_empty())
        .or_else(|| config.api.api_key.clone());

    // Model: CLI → env → config → default
    let model = cli_model
        .map(|s| s.to_string())
        .or_else(|| std::env::var("OPENAI_MODEL").ok())
        .or_else(|| config.api.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    // Base URL: env → config → default
    let base_url = std::env::var("OPENAI_BASE_URL")
        .ok()
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Token ceiling: env → config → default
    let max_tokens = parse_max_tokens(std::env::var("OPENAI_MAX_TOKENS").ok())
        .or(config.api.max_tokens)
        .unwrap_or(DEFAULT_MAX_TOKENS);

    ResolvedConfig {
        api_key,
        model,
        base_url,
        max_tokens,
    }
}

/// A value that fails to parse is treated as absent, not reported.
fn parse_max_tokens(raw: Option<String>) -> Option<u32> {
    let raw = raw?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            debug!("ignoring unparseable OPENAI_MAX_TOKENS value {raw:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ArtchatConfig::default();
        assert!(config.api.api_key.is_none());
        assert!(config.api.max_tokens.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = ArtchatConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(resolved.model, DEFAULT_MODEL);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ArtchatConfig {
            api: ApiConfig {
                api_key: Some("sk-test-123".to_string()),
                model: Some("my-model".to_string()),
                base_url: Some("http://localhost:8080/v1".to_string()),
                max_tokens: Some(42),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.api_key.as_deref(), Some("sk-test-123"));
        assert_eq!(resolved.model, "my-model");
        assert_eq!(resolved.base_url, "http://localhost:8080/v1");
        assert_eq!(resolved.max_tokens, 42);
    }

    #[test]
    fn test_resolve_cli_model_wins() {
        let config = ArtchatConfig {
            api: ApiConfig {
                model: Some("file-model".to_string()),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, Some("cli-model"));
        assert_eq!(resolved.model, "cli-model");
    }

    #[test]
    fn test_parse_max_tokens_accepts_integers() {
        assert_eq!(parse_max_tokens(Some("250".to_string())), Some(250));
        assert_eq!(parse_max_tokens(Some(" 64 ".to_string())), Some(64));
    }

    #[test]
    fn test_parse_max_tokens_failure_counts_as_absent() {
        assert_eq!(parse_max_tokens(Some("not-a-number".to_string())), None);
        assert_eq!(parse_max_tokens(Some("".to_string())), None);
        assert_eq!(parse_max_tokens(Some("-5".to_string())), None);
        assert_eq!(parse_max_tokens(None), None);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[api]
api_key = "sk-test-123"
model = "gpt-4o-mini"
base_url = "http://192.168.1.100:8080/v1"
max_tokens = 200
"#;
        let config: ArtchatConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.api_key.as_deref(), Some("sk-test-123"));
        assert_eq!(config.api.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(config.api.max_tokens, Some(200));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[api]
max_tokens = 64
"#;
        let config: ArtchatConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.max_tokens, Some(64));
        assert!(config.api.api_key.is_none());
        assert!(config.api.model.is_none());
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: ArtchatConfig = toml::from_str("").unwrap();
        assert!(config.api.model.is_none());
    }
}
