//! Expense totals by subcategory
//!
//! Splits a window's expenses across the subcategory vocabulary. Entries
//! come out in declaration order and subcategories with nothing spent are
//! omitted, so an expense-free window yields an empty breakdown.

use crate::models::{Kind, Money, Subcategory, Transaction};

/// One subcategory's share of a window's expenses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakdownEntry {
    pub subcategory: Subcategory,
    pub total: Money,
    /// Share of the window's total expenses, in percent.
    pub percentage: f64,
}

/// Total expenses per subcategory, in declaration order, nonzero only.
///
/// Income transactions are ignored.
pub fn expense_breakdown<'a, I>(transactions: I) -> Vec<BreakdownEntry>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals = [Money::zero(); Subcategory::ALL.len()];

    for transaction in transactions {
        if transaction.kind != Kind::Expense {
            continue;
        }
        if let Some(slot) = Subcategory::ALL
            .iter()
            .position(|s| *s == transaction.subcategory)
        {
            totals[slot] += transaction.amount;
        }
    }

    let grand_total: Money = totals.iter().copied().sum();

    Subcategory::ALL
        .iter()
        .zip(totals)
        .filter(|(_, total)| !total.is_zero())
        .map(|(subcategory, total)| BreakdownEntry {
            subcategory: *subcategory,
            total,
            percentage: (total.cents() as f64 / grand_total.cents() as f64) * 100.0,
        })
        .collect()
}
