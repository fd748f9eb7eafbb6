//! Configuration management.
//!
//! Settings are loaded from a TOML file in the platform config directory
//! and fall back to defaults when the file is missing.

mod settings;

use std::path::PathBuf;

use thiserror::Error;

pub use settings::Settings;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine configuration directory")]
    NoConfigDir,

    /// The config file exists but could not be read.
    #[error("failed to read configuration: {0}")]
    ReadError(#[from] std::io::Error),

    /// The config file is not valid TOML or has the wrong shape.
    #[error("failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A setting has an invalid value.
    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Path to the settings file (`<config_dir>/spicy-table/config.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(dir.join("spicy-table").join("config.toml"))
}
