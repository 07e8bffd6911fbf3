//! Configuration management for diffsift
//!
//! Supports feature-specific configuration sections:
//! - [clean] - Diff cleaning defaults
//! - [log] - Logging settings

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Current configuration version
pub const CURRENT_CONFIG_VERSION: &str = "1";

/// Supported configuration versions
pub const SUPPORTED_CONFIG_VERSIONS: &[&str] = &["1"];

/// Repo-local configuration file name
pub const REPO_CONFIG_FILE: &str = ".diffsift.toml";

/// Root configuration structure supporting multiple features
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version for tracking schema changes
    #[serde(default = "default_config_version")]
    pub version: String,

    /// Diff cleaning configuration
    #[serde(default)]
    pub clean: Option<CleanConfig>,

    /// Logging configuration
    #[serde(default)]
    pub log: Option<LogConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            clean: None,
            log: None,
        }
    }
}

/// Configuration for diff cleaning
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanConfig {
    /// Clean each file section separately and drop files left empty
    #[serde(default)]
    pub per_file: bool,
}

/// Configuration for logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Write logs to a file in this directory instead of stderr
    #[serde(default)]
    pub dir: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
        }
    }
}

fn default_config_version() -> String {
    CURRENT_CONFIG_VERSION.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Base directory for user configuration.
/// Respects XDG_CONFIG_HOME, falls back to ~/.config
pub fn get_config_home() -> Option<PathBuf> {
    match env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => dirs::home_dir().map(|h| h.join(".config")),
    }
}

impl Config {
    /// Check if the configuration version is supported
    pub fn is_version_supported(&self) -> bool {
        SUPPORTED_CONFIG_VERSIONS.contains(&self.version.as_str())
    }

    /// Get a warning message for unsupported versions
    pub fn version_warning(&self) -> Option<String> {
        if !self.is_version_supported() {
            Some(format!(
                "Configuration version '{}' is not supported. Supported versions: {}. Using defaults where needed.",
                self.version,
                SUPPORTED_CONFIG_VERSIONS.join(", ")
            ))
        } else {
            None
        }
    }

    /// Load configuration from file
    pub fn load_from_file(path: &Path) -> CoreResult<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config =
            toml::from_str(&content).map_err(|source| CoreError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        // Set to current version if empty or missing
        if config.version.is_empty() {
            config.version = CURRENT_CONFIG_VERSION.to_string();
        }

        Ok(config)
    }

    /// Get the default config directory path
    pub fn get_config_dir() -> Option<PathBuf> {
        get_config_home().map(|h| h.join("diffsift"))
    }

    /// Load configuration with priority:
    /// 1. Defaults
    /// 2. Global config ($XDG_CONFIG_HOME/diffsift/config.toml)
    /// 3. Repo config (.diffsift.toml)
    /// 4. Explicit config file
    pub fn load(explicit: Option<&Path>) -> CoreResult<Self> {
        let mut candidates = Vec::new();
        if let Some(config_dir) = Self::get_config_dir() {
            candidates.push(config_dir.join("config.toml"));
        }
        candidates.push(PathBuf::from(REPO_CONFIG_FILE));

        let mut config = Self::load_layers(&candidates)?;

        // An explicit file must exist
        if let Some(path) = explicit {
            config = config.merge(Self::load_from_file(path)?);
        }

        Ok(config)
    }

    /// Merge every existing file of `paths` over the defaults, in order
    pub fn load_layers(paths: &[PathBuf]) -> CoreResult<Self> {
        let mut config = Self::default();
        for path in paths {
            if path.exists() {
                config = config.merge(Self::load_from_file(path)?);
            }
        }
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(mut self, other: Config) -> Self {
        if !other.version.is_empty() {
            self.version = other.version;
        }
        if other.clean.is_some() {
            self.clean = other.clean;
        }
        if other.log.is_some() {
            self.log = other.log;
        }
        self
    }

    pub fn clean_config(&self) -> CleanConfig {
        self.clean.clone().unwrap_or_default()
    }

    pub fn log_config(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }
}
