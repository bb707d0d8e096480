//! Time-window row selection
//!
//! Reports never look at the whole ledger directly; they look at a window
//! of it anchored on a reference date supplied by the caller. Keeping the
//! date explicit keeps every report deterministic and testable.

use chrono::NaiveDate;

use crate::models::{Ledger, Month, Transaction};

/// How many calendar months a trailing window spans, current month included.
pub const TRAILING_MONTHS: u32 = 12;

/// A report window anchored on a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Window {
    /// The calendar month the reference date falls in.
    #[default]
    CurrentMonth,
    /// The last [`TRAILING_MONTHS`] calendar months ending with the current
    /// one. Dates after the current month fall outside the window.
    TrailingYear,
    /// Every row in the ledger.
    All,
}

/// Select ledger rows inside `window`, keeping their ledger positions.
///
/// Positions are the zero-based indexes rows have in the full ledger, so a
/// row listed here can be removed directly by its position.
pub fn rows_in(ledger: &Ledger, window: Window, today: NaiveDate) -> Vec<(usize, &Transaction)> {
    let current = Month::from_date(today);
    ledger
        .iter()
        .enumerate()
        .filter(|(_, t)| {
            let month = t.month();
            match window {
                Window::CurrentMonth => month == current,
                Window::TrailingYear => {
                    month >= current.months_back(TRAILING_MONTHS - 1) && month <= current
                }
                Window::All => true,
            }
        })
        .collect()
}

/// Rows from the calendar month `today` falls in.
pub fn current_month_rows(ledger: &Ledger, today: NaiveDate) -> Vec<(usize, &Transaction)> {
    rows_in(ledger, Window::CurrentMonth, today)
}

/// Rows from the trailing twelve calendar months ending with `today`'s month.
pub fn trailing_rows(ledger: &Ledger, today: NaiveDate) -> Vec<(usize, &Transaction)> {
    rows_in(ledger, Window::TrailingYear, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Kind, Money, Subcategory};

    fn expense_on(date: (i32, u32, u32), description: &str) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            description.to_string(),
            Kind::Expense,
            Subcategory::EssentialSpending,
            Money::from_cents(1_000),
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
    }

    #[test]
    fn test_current_month_keeps_positions() {
        let ledger = Ledger::from_transactions(vec![
            expense_on((2024, 1, 10), "old"),
            expense_on((2024, 3, 15), "rent"),
            expense_on((2024, 3, 1), "groceries"),
        ]);

        let rows = current_month_rows(&ledger, today());
        let positions: Vec<usize> = rows.iter().map(|(i, _)| *i).collect();
        assert_eq!(positions, vec![1, 2]);
        assert_eq!(rows[0].1.description, "rent");
    }

    #[test]
    fn test_current_month_excludes_other_months() {
        let ledger = Ledger::from_transactions(vec![
            expense_on((2024, 2, 29), "february"),
            expense_on((2024, 4, 1), "april"),
            expense_on((2023, 3, 20), "last year"),
        ]);

        assert!(current_month_rows(&ledger, today()).is_empty());
    }

    #[test]
    fn test_trailing_year_boundaries() {
        let ledger = Ledger::from_transactions(vec![
            // 2023-04 is the oldest month still inside the window
            expense_on((2023, 4, 1), "edge in"),
            // 2023-03 is thirteen months back
            expense_on((2023, 3, 31), "edge out"),
            expense_on((2024, 3, 20), "today"),
            // dates past the current month are outside the window
            expense_on((2024, 4, 1), "future"),
        ]);

        let rows = trailing_rows(&ledger, today());
        let names: Vec<&str> = rows.iter().map(|(_, t)| t.description.as_str()).collect();
        assert_eq!(names, vec!["edge in", "today"]);
    }

    #[test]
    fn test_all_returns_everything() {
        let ledger = Ledger::from_transactions(vec![
            expense_on((2019, 1, 1), "ancient"),
            expense_on((2024, 3, 15), "rent"),
            expense_on((2025, 6, 1), "future"),
        ]);

        assert_eq!(rows_in(&ledger, Window::All, today()).len(), 3);
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = Ledger::new();
        assert!(rows_in(&ledger, Window::CurrentMonth, today()).is_empty());
        assert!(rows_in(&ledger, Window::TrailingYear, today()).is_empty());
        assert!(rows_in(&ledger, Window::All, today()).is_empty());
    }
}
