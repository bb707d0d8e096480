//! Configuration module
//!
//! Config directory resolution, the settings file, and ledger file
//! selection.

pub mod paths;
pub mod settings;

pub use paths::{resolve_ledger_path, SaldoPaths, DEFAULT_LEDGER_FILENAME};
pub use settings::Settings;
