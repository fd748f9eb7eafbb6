//! Centralized error types.
//!
//! A unified error hierarchy with user-friendly messages, built on
//! `thiserror`. The demo binary surfaces these at the top level via
//! `anyhow`.

use thiserror::Error;

use crate::config::ConfigError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// IO errors (file system, terminal IO).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup/teardown errors.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Problems with user-supplied table data.
    #[error("Data error: {0}")]
    Data(String),
}

impl AppError {
    /// Create a terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    /// Create a data error.
    pub fn data(msg: impl Into<String>) -> Self {
        AppError::Data(msg.into())
    }

    /// Get a user-friendly message for display.
    ///
    /// Suitable for showing in the UI, without technical jargon.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check the file exists and is readable."
                        .to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
            },
            AppError::Io(_) => "A file operation failed. Please check file permissions.".to_string(),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
            AppError::Data(msg) => format!("Could not load table data: {}", msg),
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_config_error() {
        let config_err = ConfigError::NoConfigDir;
        let app_err: AppError = config_err.into();
        assert!(matches!(
            app_err,
            AppError::Config(ConfigError::NoConfigDir)
        ));
    }

    #[test]
    fn test_user_message_config_validation() {
        let err = AppError::Config(ConfigError::ValidationError(
            "page size must be positive".to_string(),
        ));
        assert!(err.user_message().contains("page size must be positive"));
    }

    #[test]
    fn test_terminal_error() {
        let err = AppError::terminal("raw mode failed");
        assert!(matches!(err, AppError::Terminal(_)));
        assert_eq!(err.user_message(), "Terminal error: raw mode failed");
    }

    #[test]
    fn test_data_error() {
        let err = AppError::data("expected a JSON array");
        assert!(err.user_message().contains("expected a JSON array"));
    }
}
