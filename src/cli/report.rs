//! Report CLI commands
//!
//! Implements the `summary`, `monthly`, and `breakdown` subcommands. All
//! three are anchored on today's date: `summary` and `breakdown` cover the
//! current calendar month, `monthly` the trailing twelve months.

use crate::display::{format_breakdown, format_monthly_table, format_summary};
use crate::error::SaldoResult;
use crate::models::Month;
use crate::services::Session;

/// Handle `saldo summary`.
pub fn handle_summary(session: &Session) -> SaldoResult<()> {
    let today = chrono::Local::now().date_naive();
    let summary = session.summary(today);
    print!(
        "{}",
        format_summary(&summary, Month::from_date(today), session.currency_symbol())
    );
    Ok(())
}

/// Handle `saldo monthly`.
pub fn handle_monthly(session: &Session) -> SaldoResult<()> {
    let today = chrono::Local::now().date_naive();
    let series = session.monthly(today);
    print!(
        "{}",
        format_monthly_table(&series, session.currency_symbol())
    );
    Ok(())
}

/// Handle `saldo breakdown`.
pub fn handle_breakdown(session: &Session) -> SaldoResult<()> {
    let today = chrono::Local::now().date_naive();
    let breakdown = session.breakdown(today);
    print!(
        "{}",
        format_breakdown(&breakdown, session.currency_symbol())
    );
    Ok(())
}
