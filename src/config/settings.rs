//! Application settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{config_file_path, ConfigError, Result};

/// Application-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rows per page for newly mounted tables.
    pub default_page_size: usize,
    /// Choices offered by the page-size selector.
    pub page_size_choices: Vec<usize>,
    /// Quiet period for the search debounce, in milliseconds.
    pub search_debounce_ms: u64,
    /// The UI theme to use.
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            page_size_choices: vec![10, 25, 50, 100],
            search_debounce_ms: 200,
            theme: "dark".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the platform config directory.
    ///
    /// Missing file means defaults; an unreadable or invalid file is an
    /// error.
    pub fn load() -> Result<Self> {
        let path = config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load settings from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate setting values.
    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            return Err(ConfigError::ValidationError(
                "default_page_size must be at least 1".to_string(),
            ));
        }
        if self.page_size_choices.is_empty() {
            return Err(ConfigError::ValidationError(
                "page_size_choices cannot be empty".to_string(),
            ));
        }
        if self.page_size_choices.iter().any(|&n| n == 0) {
            return Err(ConfigError::ValidationError(
                "page_size_choices cannot contain 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.default_page_size, 10);
        assert_eq!(settings.page_size_choices, vec![10, 25, 50, 100]);
        assert_eq!(settings.search_debounce_ms, 200);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "default_page_size = 25\nsearch_debounce_ms = 300\npage_size_choices = [25, 50]"
        )
        .unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.default_page_size, 25);
        assert_eq!(settings.search_debounce_ms, 300);
        assert_eq!(settings.page_size_choices, vec![25, 50]);
        // Unspecified fields keep their defaults
        assert_eq!(settings.theme, "dark");
    }

    #[test]
    fn test_load_rejects_zero_page_size() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "default_page_size = 0").unwrap();

        let err = Settings::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "default_page_size = \"lots\"").unwrap();

        let err = Settings::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
