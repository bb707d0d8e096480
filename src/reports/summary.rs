//! Income/expense summary
//!
//! Totals for a window of transactions: income, expense, and the balance
//! between them. Expense is reported as a positive magnitude; the balance
//! is income minus expense and may be negative.

use crate::models::{Kind, Money, Transaction};

/// Totals over a set of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Sum of all income amounts.
    pub income: Money,
    /// Sum of all expense amounts, as a positive magnitude.
    pub expense: Money,
    /// `income - expense`.
    pub balance: Money,
}

impl Summary {
    /// Compute totals over `transactions`. An empty input yields all zeros.
    pub fn of<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut income = Money::zero();
        let mut expense = Money::zero();

        for transaction in transactions {
            match transaction.kind {
                Kind::Income => income += transaction.amount,
                Kind::Expense => expense += transaction.amount,
            }
        }

        Self {
            income,
            expense,
            balance: income - expense,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.income.is_zero() && self.expense.is_zero()
    }
}
