//! Configuration management for SvgCut
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats; the default file lives in the platform-specific config
//! directory.
//!
//! Configuration is organized into logical sections:
//! - Output settings (file naming, overwrite policy)
//! - Document settings (target group, path styling)
//! - Logging settings (level, format)

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Log levels accepted by `logging.level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Appended to the input file stem to name the output file
    pub suffix: String,
    /// Replace an existing output file
    pub overwrite: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            suffix: "_optimized".to_string(),
            overwrite: true,
        }
    }
}

/// Document settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSettings {
    /// Id of the group to transform; the first `<g>` when unset
    pub group_id: Option<String>,
    /// Copy the first original path's presentation attributes onto
    /// rebuilt paths
    pub inherit_path_style: bool,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            group_id: None,
            inherit_path_style: true,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter level, overridden by `RUST_LOG`
    pub level: String,
    /// Emit JSON log lines
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub output: OutputSettings,
    pub document: DocumentSettings,
    pub logging: LoggingSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        Some(other) => Err(ConfigError::UnsupportedFormat(other.to_string()).into()),
        None => Err(ConfigError::MissingExtension(path.display().to_string()).into()),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config dir>/svgcut/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("svgcut").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load the default config file, or defaults when it does not exist
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(err) => {
                debug!("Using default config: {}", err);
                return Ok(Self::default());
            }
        };

        if path.exists() {
            Self::load_from_file(&path)
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content =
            std::fs::read_to_string(path).map_err(|source| SettingsError::LoadError {
                path: path.to_path_buf(),
                source,
            })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content).map_err(|source| SettingsError::SaveError {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        // An empty suffix would make the output path equal the input path
        if self.output.suffix.is_empty() {
            return Err(SettingsError::InvalidSetting {
                key: "output.suffix".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(SettingsError::InvalidSetting {
                key: "logging.level".to_string(),
                reason: format!("unknown level '{}'", self.logging.level),
            });
        }

        if matches!(&self.document.group_id, Some(id) if id.trim().is_empty()) {
            return Err(SettingsError::InvalidSetting {
                key: "document.group_id".to_string(),
                reason: "must not be blank".to_string(),
            });
        }

        Ok(())
    }
}
