//! Error types for the settings crate.
//!
//! This module provides structured error types for configuration loading,
//! saving and validation.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading, writing or checking a config file.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The config file could not be read.
    #[error("Cannot read config file {}: {source}", .path.display())]
    LoadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file could not be written.
    #[error("Cannot write config file {}: {source}", .path.display())]
    SaveError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A config value failed validation.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// No platform config directory is known.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// Malformed JSON config.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Malformed TOML config.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// The config could not be rendered as TOML.
    #[error("TOML error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    /// The config file name is not usable.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to the configuration file itself.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file format is not supported.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// The configuration file exists but has no extension.
    #[error("Config file has no extension: {0}")]
    MissingExtension(String),
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
