//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::chat::{ChatSettings, ERROR_REPLY, LOADING_TEXT};
use crate::transport::CANNED_REPLY;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Analytics/chat backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub url: String,

    /// Per-request timeout. Unset means requests wait indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Answer chat locally with the canned reply instead of calling `/ask`
    #[serde(default)]
    pub offline: bool,
}

fn default_backend_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            request_timeout_secs: None,
            offline: false,
        }
    }
}

/// Chat widget texts
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_error_message")]
    pub error_message: String,

    #[serde(default = "default_loading_text")]
    pub loading_text: String,

    #[serde(default = "default_offline_reply")]
    pub offline_reply: String,
}

fn default_error_message() -> String {
    ERROR_REPLY.to_string()
}

fn default_loading_text() -> String {
    LOADING_TEXT.to_string()
}

fn default_offline_reply() -> String {
    CANNED_REPLY.to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            error_message: default_error_message(),
            loading_text: default_loading_text(),
            offline_reply: default_offline_reply(),
        }
    }
}

impl ChatConfig {
    pub fn settings(&self) -> ChatSettings {
        ChatSettings {
            error_message: self.error_message.clone(),
            loading_text: self.loading_text.clone(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Nothing is logged here; the caller reports the outcome once its
    /// subscriber is installed.
    pub fn load_default() -> DefaultConfig {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("hotelpulse").join("config.toml")),
            Some(PathBuf::from("/etc/hotelpulse/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first existing file that parses, remembering the ones that did not
    fn load_first(paths: &[PathBuf]) -> DefaultConfig {
        let mut skipped = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return DefaultConfig {
                        config,
                        source: Some(path.clone()),
                        skipped,
                    }
                }
                Err(e) => skipped.push(e),
            }
        }

        DefaultConfig {
            config: Self::from_env(),
            source: None,
            skipped,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Backend overrides
        if let Some(url) = lookup("HOTELPULSE_BACKEND_URL") {
            self.backend.url = url;
        }
        if let Some(secs) = lookup("HOTELPULSE_TIMEOUT_SECS") {
            if let Ok(s) = secs.parse() {
                self.backend.request_timeout_secs = Some(s);
            }
        }
        if let Some(offline) = lookup("HOTELPULSE_OFFLINE") {
            self.backend.offline = matches!(offline.as_str(), "1" | "true" | "yes");
        }

        // Logging overrides
        if let Some(level) = lookup("HOTELPULSE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("HOTELPULSE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Result of searching the default config locations
#[derive(Debug)]
pub struct DefaultConfig {
    pub config: Config,
    /// File the config came from; `None` means defaults plus environment
    pub source: Option<PathBuf>,
    /// Files that exist but failed to load
    pub skipped: Vec<ConfigError>,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    format!(
        r#"# HotelPulse Configuration
#
# Environment variables override these settings:
# - HOTELPULSE_BACKEND_URL
# - HOTELPULSE_TIMEOUT_SECS
# - HOTELPULSE_OFFLINE
# - HOTELPULSE_LOG_LEVEL
# - HOTELPULSE_LOG_FORMAT

[backend]
# Analytics server serving /analytics and /ask
url = "{url}"

# Request timeout in seconds (unset: wait indefinitely)
# request_timeout_secs = 30

# Answer chat locally with the offline reply
offline = false

[chat]
# Shown once per failed chat request
error_message = "{error}"

# Placeholder text while waiting for a reply
loading_text = "{loading}"

# Reply used in offline mode
offline_reply = "{offline}"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/hotelpulse/hotelpulse.log"
"#,
        url = default_backend_url(),
        error = ERROR_REPLY,
        loading = LOADING_TEXT,
        offline = CANNED_REPLY,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.backend.url, "http://127.0.0.1:5000");
        assert_eq!(config.backend.request_timeout_secs, None);
        assert!(!config.backend.offline);
        assert_eq!(config.chat.error_message, ERROR_REPLY);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_round_trips() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.backend.url, default_backend_url());
        assert_eq!(config.chat.loading_text, LOADING_TEXT);
        assert_eq!(config.chat.offline_reply, CANNED_REPLY);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[backend]\nurl = \"http://analytics.internal:8000\"\nrequest_timeout_secs = 15\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.backend.url, "http://analytics.internal:8000");
        assert_eq!(config.backend.request_timeout_secs, Some(15));
        assert_eq!(config.chat.error_message, ERROR_REPLY);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[backend\nurl = ").unwrap();
        assert!(matches!(Config::load(&broken), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_first_reports_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[backend\nurl = ").unwrap();
        let good = dir.path().join("good.toml");
        std::fs::write(&good, "[backend]\noffline = true\n").unwrap();
        let missing = dir.path().join("missing.toml");

        let loaded = Config::load_first(&[missing.clone(), broken.clone(), good.clone()]);
        assert_eq!(loaded.source, Some(good));
        assert!(loaded.config.backend.offline);
        assert_eq!(loaded.skipped.len(), 1);
        assert!(matches!(&loaded.skipped[0], ConfigError::Parse { path, .. } if *path == broken));

        let loaded = Config::load_first(&[missing, broken]);
        assert_eq!(loaded.source, None);
        assert_eq!(loaded.skipped.len(), 1);
        assert_eq!(loaded.config.chat.error_message, ERROR_REPLY);
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("HOTELPULSE_BACKEND_URL", "http://10.0.0.5:5000"),
            ("HOTELPULSE_TIMEOUT_SECS", "not-a-number"),
            ("HOTELPULSE_OFFLINE", "true"),
            ("HOTELPULSE_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.backend.url, "http://10.0.0.5:5000");
        assert_eq!(config.backend.request_timeout_secs, None);
        assert!(config.backend.offline);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }
}
