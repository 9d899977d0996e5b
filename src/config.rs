//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\video-minder\config.toml
//! - macOS: ~/Library/Application Support/video-minder/config.toml
//! - Linux: ~/.config/video-minder/config.toml
//!
//! The API key is not read from here on every request. The client asks an
//! [`ApiKeySource`] each time, so a host can hand it a [`SharedApiKey`] and
//! change the key while lookups are running.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::lookup::filmaffinity::DEFAULT_BASE_URL;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credentials
    pub credentials: Credentials,

    /// Remote API settings
    pub api: ApiConfig,
}

/// API credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Filmaffinity application key
    pub api_key: Option<String>,
}

/// Remote API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL, without trailing slash
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// ============================================================================
// API key sources
// ============================================================================

/// Supplies the API key, read fresh on every request
pub trait ApiKeySource: Send + Sync {
    /// The current key; `None` or an empty string means unset
    fn api_key(&self) -> Option<String>;
}

impl ApiKeySource for String {
    fn api_key(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl ApiKeySource for Option<String> {
    fn api_key(&self) -> Option<String> {
        self.clone()
    }
}

impl ApiKeySource for Credentials {
    fn api_key(&self) -> Option<String> {
        self.api_key.clone()
    }
}

/// API key that can be replaced while clients hold it
#[derive(Debug, Clone, Default)]
pub struct SharedApiKey(Arc<RwLock<Option<String>>>);

impl SharedApiKey {
    pub fn new(key: Option<String>) -> Self {
        Self(Arc::new(RwLock::new(key)))
    }

    pub fn set(&self, key: impl Into<String>) {
        *self.0.write() = Some(key.into());
    }

    pub fn clear(&self) {
        *self.0.write() = None;
    }
}

impl ApiKeySource for SharedApiKey {
    fn api_key(&self) -> Option<String> {
        self.0.read().clone()
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("video-minder"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    load_from(&path)
}

/// Load configuration from a specific file
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to the default location
pub fn save(config: &Config) -> Result<(), ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &path)
}

/// Save configuration to a specific file
///
/// Creates the parent directory if it doesn't exist.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[credentials]"));
        assert!(toml.contains("[api]"));
        assert!(toml.contains(DEFAULT_BASE_URL));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
[credentials]
api_key = "my-key"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.credentials.api_key, Some("my-key".to_string()));
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.credentials.api_key = Some("test-key-123".to_string());
        config.api.timeout_secs = 5;
        save_to(&config, &path).unwrap();

        let loaded = load_from(&path);
        assert_eq!(loaded.credentials.api_key, Some("test-key-123".to_string()));
        assert_eq!(loaded.api.timeout_secs, 5);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_missing_or_broken_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(load_from(&path).credentials.api_key.is_none());

        std::fs::write(&path, "this is [not toml").unwrap();
        assert_eq!(load_from(&path).api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_shared_api_key_updates_are_visible() {
        let key = SharedApiKey::default();
        let source: Arc<dyn ApiKeySource> = Arc::new(key.clone());
        assert_eq!(source.api_key(), None);

        key.set("fresh");
        assert_eq!(source.api_key(), Some("fresh".to_string()));

        key.clear();
        assert_eq!(source.api_key(), None);
    }
}
