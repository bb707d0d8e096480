//! Path management
//!
//! Resolves where the settings file lives and which ledger file a run
//! operates on.
//!
//! ## Config directory resolution
//!
//! 1. `SALDO_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory via [`directories::ProjectDirs`]
//!    (`~/.config/saldo` on Linux)
//!
//! ## Ledger file resolution
//!
//! 1. `--ledger` flag (or `SALDO_LEDGER_FILE`, handled by the CLI parser)
//! 2. `ledger_file` in the settings file
//! 3. `transacoes.csv` in the current directory

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{SaldoError, SaldoResult};

use super::settings::Settings;

/// Ledger file used when nothing else is configured.
pub const DEFAULT_LEDGER_FILENAME: &str = "transacoes.csv";

/// Locations of the app's own files.
#[derive(Debug, Clone)]
pub struct SaldoPaths {
    config_dir: PathBuf,
}

impl SaldoPaths {
    /// Resolve the config directory for this platform.
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> SaldoResult<Self> {
        let config_dir = if let Ok(custom) = std::env::var("SALDO_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "saldo")
                .ok_or_else(|| {
                    SaldoError::Config("could not determine a config directory".into())
                })?
                .config_dir()
                .to_path_buf()
        };

        Ok(Self { config_dir })
    }

    /// Use a fixed config directory (useful for testing).
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// Ensure the config directory exists.
    pub fn ensure_directories(&self) -> SaldoResult<()> {
        std::fs::create_dir_all(&self.config_dir)
            .map_err(|e| SaldoError::Io(format!("Failed to create config directory: {}", e)))?;
        Ok(())
    }
}

/// Pick the ledger file for this run.
///
/// An explicit `flag` value (CLI flag or environment) wins over the
/// settings file, which wins over the default filename in the current
/// directory.
pub fn resolve_ledger_path(flag: Option<PathBuf>, settings: &Settings) -> PathBuf {
    flag.or_else(|| settings.ledger_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LEDGER_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SaldoPaths::with_config_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.config_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("SALDO_CONFIG_DIR", custom_path);

        let paths = SaldoPaths::new().unwrap();
        assert_eq!(paths.config_dir(), temp_dir.path());

        env::remove_var("SALDO_CONFIG_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("deeply").join("nested");
        let paths = SaldoPaths::with_config_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn test_ledger_resolution_precedence() {
        let mut settings = Settings::default();

        // Nothing configured: default filename in the current directory
        assert_eq!(
            resolve_ledger_path(None, &settings),
            PathBuf::from("transacoes.csv")
        );

        // Settings file beats the default
        settings.ledger_file = Some(PathBuf::from("/data/ledger.csv"));
        assert_eq!(
            resolve_ledger_path(None, &settings),
            PathBuf::from("/data/ledger.csv")
        );

        // Explicit flag beats the settings file
        assert_eq!(
            resolve_ledger_path(Some(PathBuf::from("/tmp/other.csv")), &settings),
            PathBuf::from("/tmp/other.csv")
        );
    }
}
