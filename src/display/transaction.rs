//! Transaction display formatting
//!
//! Renders ledger rows for terminal output. Positions shown here are the
//! ledger positions `remove` expects, so the listing doubles as a removal
//! reference.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Subcategory")]
    subcategory: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl TransactionRow {
    fn new(position: usize, txn: &Transaction, currency: &str) -> Self {
        Self {
            position,
            date: txn.date.format("%Y-%m-%d").to_string(),
            description: txn.description.clone(),
            kind: txn.kind.to_string(),
            subcategory: txn.subcategory.to_string(),
            amount: txn.amount.format_with_symbol(currency),
        }
    }
}

/// Format positioned ledger rows as a table.
pub fn format_transaction_table(rows: &[(usize, &Transaction)], currency: &str) -> String {
    if rows.is_empty() {
        return "No transactions in this window.\n".to_string();
    }

    let table_rows: Vec<TransactionRow> = rows
        .iter()
        .map(|(position, txn)| TransactionRow::new(*position, txn, currency))
        .collect();

    let mut table = Table::new(table_rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(0)).with(Alignment::right()))
        .with(Modify::new(Columns::single(5)).with(Alignment::right()));

    let mut output = table.to_string();
    output.push('\n');
    output
}

/// One-line transaction description for confirmation messages.
pub fn format_transaction_line(txn: &Transaction, currency: &str) -> String {
    format!(
        "{} {} ({}) {}",
        txn.date.format("%Y-%m-%d"),
        txn.description,
        txn.subcategory,
        txn.amount.format_with_symbol(currency)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Kind, Money, Subcategory};
    use chrono::NaiveDate;

    fn rent() -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            "Rent".to_string(),
            Kind::Expense,
            Subcategory::EssentialSpending,
            Money::from_cents(120_000),
        )
    }

    #[test]
    fn test_empty_table() {
        let formatted = format_transaction_table(&[], "R$");
        assert!(formatted.contains("No transactions"));
    }

    #[test]
    fn test_table_contains_row_data() {
        let txn = rent();
        let formatted = format_transaction_table(&[(3, &txn)], "R$");

        assert!(formatted.contains("2024-03-15"));
        assert!(formatted.contains("Rent"));
        assert!(formatted.contains("Essential spending"));
        assert!(formatted.contains("R$ 1200.00"));
        assert!(formatted.contains('3'));
    }

    #[test]
    fn test_transaction_line() {
        let line = format_transaction_line(&rent(), "R$");
        assert_eq!(line, "2024-03-15 Rent (Essential spending) R$ 1200.00");
    }
}
