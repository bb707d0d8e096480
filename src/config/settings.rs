//! User settings
//!
//! A small JSON settings file: the currency symbol shown next to amounts
//! and an optional default ledger file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{SaldoError, SaldoResult};

use super::paths::SaldoPaths;

/// User settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Symbol shown in front of amounts, e.g. "R$ 1200.00".
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Ledger file to use when no `--ledger` flag is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_file: Option<PathBuf>,
}

fn default_currency() -> String {
    "R$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            ledger_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist.
    pub fn load_or_create(paths: &SaldoPaths) -> SaldoResult<Self> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SaldoError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| SaldoError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk.
    pub fn save(&self, paths: &SaldoPaths) -> SaldoResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SaldoError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SaldoError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "R$");
        assert!(settings.ledger_file.is_none());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SaldoPaths::with_config_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SaldoPaths::with_config_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".to_string(),
            ledger_file: Some(PathBuf::from("/data/ledger.csv")),
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_rejects_malformed_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SaldoPaths::with_config_dir(temp_dir.path().to_path_buf());

        std::fs::create_dir_all(paths.config_dir()).unwrap();
        std::fs::write(paths.settings_file(), "not json").unwrap();

        assert!(Settings::load_or_create(&paths).is_err());
    }
}
