//! Ledger session
//!
//! Owns the in-memory ledger for one run of the app and keeps it in sync
//! with the ledger file. Every mutation is applied in memory first and then
//! persisted by rewriting the whole file; if the write fails the in-memory
//! change survives and the error is reported, so nothing typed is lost.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::config::Settings;
use crate::error::SaldoResult;
use crate::models::{Kind, Ledger, Money, Subcategory, Transaction};
use crate::reports::{
    current_month_rows, expense_breakdown, monthly_series, rows_in, trailing_rows, BreakdownEntry,
    MonthlyTotals, Summary, Window,
};
use crate::storage;

/// Input for adding a transaction.
#[derive(Debug, Clone)]
pub struct AddTransactionInput {
    pub date: NaiveDate,
    pub description: String,
    pub kind: Kind,
    pub subcategory: Subcategory,
    pub amount: Money,
}

/// A loaded ledger plus the file it came from.
pub struct Session {
    ledger: Ledger,
    ledger_path: PathBuf,
    settings: Settings,
}

impl Session {
    /// Load the ledger at `ledger_path`. A missing file starts empty.
    pub fn open(ledger_path: PathBuf, settings: Settings) -> SaldoResult<Self> {
        let ledger = storage::load(&ledger_path)?;
        info!(
            path = %ledger_path.display(),
            rows = ledger.len(),
            "session opened"
        );
        Ok(Self {
            ledger,
            ledger_path,
            settings,
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_path(&self) -> &Path {
        &self.ledger_path
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn currency_symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    /// Validate and append a transaction, then persist the ledger.
    ///
    /// Returns the position of the new row. If persisting fails the row is
    /// still in memory and the error says so.
    pub fn add_transaction(&mut self, input: AddTransactionInput) -> SaldoResult<usize> {
        let transaction = Transaction::new(
            input.date,
            input.description.trim().to_string(),
            input.kind,
            input.subcategory,
            input.amount,
        );

        self.ledger.add(transaction)?;
        let position = self.ledger.len() - 1;
        self.persist()?;

        info!(position, "transaction added");
        Ok(position)
    }

    /// Remove the transaction at `position`, then persist the ledger.
    pub fn remove_transaction(&mut self, position: usize) -> SaldoResult<Transaction> {
        let removed = self.ledger.remove(position)?;
        self.persist()?;

        info!(position, description = %removed.description, "transaction removed");
        Ok(removed)
    }

    /// Discard the in-memory ledger and re-read it from disk.
    pub fn reload(&mut self) -> SaldoResult<()> {
        self.ledger = storage::load(&self.ledger_path)?;
        info!(rows = self.ledger.len(), "ledger reloaded");
        Ok(())
    }

    fn persist(&self) -> SaldoResult<()> {
        storage::save(&self.ledger_path, &self.ledger).map_err(|e| {
            warn!(error = %e, "ledger save failed; change kept in memory only");
            e
        })
    }

    /// Rows in the calendar month `today` falls in, with ledger positions.
    pub fn current_month(&self, today: NaiveDate) -> Vec<(usize, &Transaction)> {
        current_month_rows(&self.ledger, today)
    }

    /// Rows in `window`, with ledger positions.
    pub fn rows(&self, window: Window, today: NaiveDate) -> Vec<(usize, &Transaction)> {
        rows_in(&self.ledger, window, today)
    }

    /// Income/expense totals for the current calendar month.
    pub fn summary(&self, today: NaiveDate) -> Summary {
        Summary::of(self.current_month(today).into_iter().map(|(_, t)| t))
    }

    /// Per-month totals over the trailing twelve months, ascending.
    pub fn monthly(&self, today: NaiveDate) -> Vec<MonthlyTotals> {
        monthly_series(trailing_rows(&self.ledger, today).into_iter().map(|(_, t)| t))
    }

    /// Current-month expense totals by subcategory.
    pub fn breakdown(&self, today: NaiveDate) -> Vec<BreakdownEntry> {
        expense_breakdown(self.current_month(today).into_iter().map(|(_, t)| t))
    }
}
