//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.quizmark/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! A broken config is never fatal — the caller falls back to defaults.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuizmarkConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub deck: DeckConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DeckConfig {
    pub pretty_json: Option<bool>,
    pub backup: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_PRETTY_JSON: bool = true;
pub const DEFAULT_BACKUP: bool = false;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub pretty_json: bool,
    pub backup: bool,
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

/// Returns the path to `~/.quizmark/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".quizmark").join("config.toml"))
}

/// Load config from `~/.quizmark/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `QuizmarkConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<QuizmarkConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(QuizmarkConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(QuizmarkConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: QuizmarkConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {config:?}");
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# quizmark configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → QUIZMARK_* env vars.

# [general]
# log_level = "info"        # off, error, warn, info, debug, trace

# [deck]
# pretty_json = true        # pretty-print the deck JSON on save
# backup = false            # keep a .bak copy of the previous file on save
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {e}");
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {e}");
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &QuizmarkConfig) -> ResolvedConfig {
    // Log level: env → config → default
    let log_level = std::env::var("QUIZMARK_LOG_LEVEL")
        .ok()
        .or_else(|| config.general.log_level.clone())
        .and_then(|value| match value.parse::<LevelFilter>() {
            Ok(level) => Some(level),
            Err(_) => {
                warn!("ignoring invalid log level {value:?}");
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Save behavior: env → config → default
    let pretty_json = env_bool("QUIZMARK_PRETTY_JSON")
        .or(config.deck.pretty_json)
        .unwrap_or(DEFAULT_PRETTY_JSON);
    let backup = env_bool("QUIZMARK_BACKUP")
        .or(config.deck.backup)
        .unwrap_or(DEFAULT_BACKUP);

    ResolvedConfig {
        log_level,
        pretty_json,
        backup,
    }
}

fn env_bool(name: &str) -> Option<bool> {
    match std::env::var(name).ok()?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            warn!("ignoring {name}={other:?}: expected a boolean");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_sparse() {
        let config = QuizmarkConfig::default();
        assert!(config.general.log_level.is_none());
        assert!(config.deck.pretty_json.is_none());
        assert!(config.deck.backup.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&QuizmarkConfig::default());
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.pretty_json, DEFAULT_PRETTY_JSON);
        assert_eq!(resolved.backup, DEFAULT_BACKUP);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = QuizmarkConfig {
            general: GeneralConfig {
                log_level: Some("debug".to_string()),
            },
            deck: DeckConfig {
                pretty_json: Some(false),
                backup: Some(true),
            },
        };
        let resolved = resolve(&config);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert!(!resolved.pretty_json);
        assert!(resolved.backup);
    }

    #[test]
    fn test_resolve_ignores_invalid_log_level() {
        let config = QuizmarkConfig {
            general: GeneralConfig {
                log_level: Some("shouty".to_string()),
            },
            ..Default::default()
        };
        assert_eq!(resolve(&config).log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[deck]
backup = true
"#;
        let config: QuizmarkConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.deck.backup, Some(true));
        assert!(config.deck.pretty_json.is_none());
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
log_level = "trace"

[deck]
pretty_json = false
backup = true
"#;
        let config: QuizmarkConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("trace"));
        assert_eq!(config.deck.pretty_json, Some(false));
        assert_eq!(config.deck.backup, Some(true));
    }

    #[test]
    fn test_generated_default_config_parses() {
        // The commented-out template must itself be valid TOML
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        generate_default_config(&path);

        let contents = fs::read_to_string(&path).unwrap();
        let config: QuizmarkConfig = toml::from_str(&contents).unwrap();
        assert!(config.general.log_level.is_none());
    }
}
