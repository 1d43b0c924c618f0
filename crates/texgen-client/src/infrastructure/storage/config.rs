//! TOML-based configuration persistence for the texture generator client.
//!
//! Reads and writes `ClientConfig` to the platform-appropriate config file:
//! - Windows:  `%APPDATA%\TexGen\config.toml`
//! - Linux:    `~/.config/texgen/config.toml`
//! - macOS:    `~/Library/Application Support/TexGen/config.toml`
//!
//! Example file:
//!
//! ```toml
//! [server]
//! base_url = "http://127.0.0.1:5000"
//! request_timeout_secs = 120
//!
//! [client]
//! log_level = "info"
//! locale_file = "/usr/share/texgen/cs.toml"
//! ```
//!
//! # Serde default values
//!
//! Every field is annotated with `#[serde(default = "some_fn")]` (or plain
//! `#[serde(default)]` for optional paths), so an empty or partial file is
//! valid and missing keys take their default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level client configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub client: ClientSettings,
}

/// Where the texture-generation server lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Base URL; `/calculate` is appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout in seconds.  `0` disables the timeout.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Local client behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientSettings {
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Where the chosen theme is persisted.  Defaults to `theme.toml` next to
    /// the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_file: Option<PathBuf>,
    /// Optional TOML translation catalog (`key = "text"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale_file: Option<PathBuf>,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}
fn default_request_timeout_secs() -> u64 {
    120
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self { log_level: default_log_level(), theme_file: None, locale_file: None }
    }
}

impl ServerConfig {
    /// The configured timeout, or `None` when disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

impl ClientConfig {
    /// The theme file: the configured one, else `theme.toml` in the config dir.
    pub fn theme_file(&self) -> Result<PathBuf, ConfigError> {
        match &self.client.theme_file {
            Some(path) => Ok(path.clone()),
            None => Ok(config_dir()?.join("theme.toml")),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the default config file.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `ClientConfig` from the default location.
///
/// # Errors
///
/// See [`load_config_from`].
pub fn load_config() -> Result<ClientConfig, ConfigError> {
    load_config_from(&config_file_path()?)
}

/// Loads `ClientConfig` from `path`, returning `ClientConfig::default()` if
/// the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_from(path: &Path) -> Result<ClientConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ClientConfig::default()),
        Err(e) => Err(ConfigError::Io { path: path.to_path_buf(), source: e }),
    }
}

/// Persists `config` to `path`, creating the parent directory if needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config_to(config: &ClientConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|source| ConfigError::Io { path: dir.to_path_buf(), source })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })
}

/// Resolves the platform config directory including the `TexGen` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("TexGen"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("texgen"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME")
            .map(|h| PathBuf::from(h).join("Library").join("Application Support").join("TexGen"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("texgen_test_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_default_config_points_at_local_server() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.server.base_url, "http://127.0.0.1:5000");
        assert_eq!(cfg.server.request_timeout_secs, 120);
        assert_eq!(cfg.client.log_level, "info");
        assert!(cfg.client.theme_file.is_none());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let cfg: ClientConfig = toml::from_str("").expect("empty config is valid");
        assert_eq!(cfg, ClientConfig::default());
    }

    #[test]
    fn test_partial_server_section_overrides_defaults() {
        // Arrange
        let toml_str = r#"
[server]
base_url = "http://render.local:8080"
"#;

        // Act
        let cfg: ClientConfig = toml::from_str(toml_str).expect("deserialize partial");

        // Assert
        assert_eq!(cfg.server.base_url, "http://render.local:8080");
        // Unspecified fields keep their defaults
        assert_eq!(cfg.server.request_timeout_secs, 120);
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        let mut server = ServerConfig::default();
        assert_eq!(server.request_timeout(), Some(Duration::from_secs(120)));
        server.request_timeout_secs = 0;
        assert_eq!(server.request_timeout(), None);
    }

    #[test]
    fn test_configured_theme_file_wins() {
        let mut cfg = ClientConfig::default();
        cfg.client.theme_file = Some(PathBuf::from("/tmp/custom-theme.toml"));
        assert_eq!(cfg.theme_file().unwrap(), PathBuf::from("/tmp/custom-theme.toml"));
    }

    #[test]
    fn test_unset_optional_paths_are_omitted_from_toml() {
        let toml_str = toml::to_string_pretty(&ClientConfig::default()).expect("serialize");
        assert!(!toml_str.contains("theme_file"));
        assert!(!toml_str.contains("locale_file"));
    }

    #[test]
    fn test_load_config_from_missing_file_returns_default() {
        let path = temp_dir().join("absent.toml");
        let cfg = load_config_from(&path).expect("missing file is not an error");
        assert_eq!(cfg, ClientConfig::default());
    }

    #[test]
    fn test_load_config_from_invalid_toml_is_parse_error() {
        let dir = temp_dir();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[[[ not valid toml").unwrap();

        let result = load_config_from(&path);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_and_load_round_trip_creates_directories() {
        // Arrange
        let dir = temp_dir();
        let path = dir.join("nested").join("config.toml");
        let mut cfg = ClientConfig::default();
        cfg.server.request_timeout_secs = 30;
        cfg.client.log_level = "debug".to_string();

        // Act
        save_config_to(&cfg, &path).expect("save");
        let loaded = load_config_from(&path).expect("load");

        // Assert
        assert_eq!(loaded, cfg);

        // Cleanup
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_config_file_path_ends_with_config_toml() {
        if let Ok(path) = config_file_path() {
            assert!(path.ends_with("config.toml"), "got {path:?}");
        }
        // NoPlatformConfigDir in a stripped environment is also acceptable.
    }
}
