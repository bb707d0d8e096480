//! Config CLI command
//!
//! Shows where the settings file lives and which ledger file is in effect,
//! and persists settings changes.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::{SaldoPaths, Settings};
use crate::error::SaldoResult;

/// Arguments for `saldo config`.
#[derive(Args)]
pub struct ConfigArgs {
    /// Set the currency symbol shown next to amounts
    #[arg(long, value_name = "SYMBOL")]
    pub set_currency: Option<String>,
    /// Set the default ledger file
    #[arg(long, value_name = "PATH")]
    pub set_ledger: Option<PathBuf>,
}

/// Handle `saldo config`.
pub fn handle_config(
    paths: &SaldoPaths,
    mut settings: Settings,
    ledger_path: &Path,
    args: ConfigArgs,
) -> SaldoResult<()> {
    let mut changed = false;

    if let Some(symbol) = args.set_currency {
        settings.currency_symbol = symbol;
        changed = true;
    }
    if let Some(path) = args.set_ledger.clone() {
        settings.ledger_file = Some(path);
        changed = true;
    }

    if changed {
        settings.save(paths)?;
        println!("Settings saved.");
    }

    let shown_ledger = args
        .set_ledger
        .unwrap_or_else(|| ledger_path.to_path_buf());

    println!("Settings file: {}", paths.settings_file().display());
    println!("Ledger file:   {}", shown_ledger.display());
    println!("Currency:      {}", settings.currency_symbol);
    Ok(())
}
