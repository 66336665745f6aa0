//! SvgCut Settings Crate
//!
//! Handles configuration loading, saving and validation.

pub mod config;
pub mod error;

pub use config::{Config, DocumentSettings, LoggingSettings, OutputSettings, LOG_LEVELS};
pub use error::{ConfigError, SettingsError, SettingsResult};
