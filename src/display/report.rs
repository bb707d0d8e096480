//! Report formatting for terminal output
//!
//! Renders the month summary, the monthly series, and the subcategory
//! breakdown as plain text for the CLI subcommands.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Month;
use crate::reports::{BreakdownEntry, MonthlyTotals, Summary};

/// Format the income/expense summary block for one month.
pub fn format_summary(summary: &Summary, month: Month, currency: &str) -> String {
    format!(
        "Summary for {}\n  Income:  {:>14}\n  Expense: {:>14}\n  Balance: {:>14}\n",
        month,
        summary.income.format_with_symbol(currency),
        summary.expense.format_with_symbol(currency),
        summary.balance.format_with_symbol(currency),
    )
}

#[derive(Tabled)]
struct MonthlyRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expense")]
    expense: String,
    #[tabled(rename = "Net")]
    net: String,
}

/// Format the month-by-month series as a table.
pub fn format_monthly_table(series: &[MonthlyTotals], currency: &str) -> String {
    if series.is_empty() {
        return "No transactions in the last 12 months.\n".to_string();
    }

    let rows: Vec<MonthlyRow> = series
        .iter()
        .map(|totals| MonthlyRow {
            month: totals.month.to_string(),
            income: totals.income.format_with_symbol(currency),
            expense: totals.expense.format_with_symbol(currency),
            net: totals.net().format_with_symbol(currency),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));

    let mut output = table.to_string();
    output.push('\n');
    output
}

/// Format the expense breakdown with share bars.
pub fn format_breakdown(entries: &[BreakdownEntry], currency: &str) -> String {
    if entries.is_empty() {
        return "No expenses in this window.\n".to_string();
    }

    let max_cents = entries
        .iter()
        .map(|e| e.total.cents())
        .max()
        .unwrap_or(0) as f64;

    let mut output = String::from("Expenses by subcategory\n");
    for entry in entries {
        output.push_str(&format!(
            "  {:<20} {:>14} {:>7}  {}\n",
            entry.subcategory.to_string(),
            entry.total.format_with_symbol(currency),
            format_percentage(entry.percentage),
            format_bar(entry.total.cents() as f64, max_cents, 20),
        ));
    }
    output
}

/// Format a percentage with appropriate precision.
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation.
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Subcategory};

    #[test]
    fn test_format_summary() {
        let summary = Summary {
            income: Money::from_cents(500_000),
            expense: Money::from_cents(120_000),
            balance: Money::from_cents(380_000),
        };

        let formatted = format_summary(&summary, Month::new(2024, 3), "R$");
        assert!(formatted.contains("Summary for 2024-03"));
        assert!(formatted.contains("R$ 5000.00"));
        assert!(formatted.contains("R$ 1200.00"));
        assert!(formatted.contains("R$ 3800.00"));
    }

    #[test]
    fn test_format_empty_monthly() {
        let formatted = format_monthly_table(&[], "R$");
        assert!(formatted.contains("No transactions"));
    }

    #[test]
    fn test_format_monthly_rows() {
        let series = vec![MonthlyTotals {
            month: Month::new(2024, 3),
            income: Money::from_cents(500_000),
            expense: Money::from_cents(120_000),
        }];

        let formatted = format_monthly_table(&series, "R$");
        assert!(formatted.contains("2024-03"));
        assert!(formatted.contains("R$ 3800.00"));
    }

    #[test]
    fn test_format_breakdown() {
        let entries = vec![
            BreakdownEntry {
                subcategory: Subcategory::EssentialSpending,
                total: Money::from_cents(10_000),
                percentage: 66.666,
            },
            BreakdownEntry {
                subcategory: Subcategory::Debts,
                total: Money::from_cents(5_000),
                percentage: 33.333,
            },
        ];

        let formatted = format_breakdown(&entries, "R$");
        assert!(formatted.contains("Essential spending"));
        assert!(formatted.contains("R$ 100.00"));
        assert!(formatted.contains("67%"));
        assert!(formatted.contains('█'));
    }

    #[test]
    fn test_format_empty_breakdown() {
        assert!(format_breakdown(&[], "R$").contains("No expenses"));
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
    }
}
