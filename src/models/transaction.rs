//! Transaction model
//!
//! A single ledger row: date, description, kind, subcategory, amount.
//! Validation lives here so every entry path (file load, CLI, TUI form)
//! enforces the same invariants.

use chrono::NaiveDate;
use std::fmt;

use super::category::{Kind, Subcategory};
use super::money::Money;
use super::month::Month;

/// A single income or expense record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Calendar date, no time component
    pub date: NaiveDate,

    /// Free-text label (may be empty)
    pub description: String,

    /// Expense or Income
    pub kind: Kind,

    /// Finer classification, constrained by `kind`
    pub subcategory: Subcategory,

    /// Positive amount in currency units
    pub amount: Money,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        kind: Kind,
        subcategory: Subcategory,
        amount: Money,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            kind,
            subcategory,
            amount,
        }
    }

    /// The calendar month this transaction falls in
    pub fn month(&self) -> Month {
        Month::from_date(self.date)
    }

    /// Amount with the kind's sign applied: negative for expenses.
    /// Used for balance math and signed display, never on the wire.
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            Kind::Expense => -self.amount,
            Kind::Income => self.amount,
        }
    }

    /// Validate the schema invariants
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.subcategory.kind() != self.kind {
            return Err(TransactionValidationError::SubcategoryMismatch {
                kind: self.kind,
                subcategory: self.subcategory,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.subcategory,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    SubcategoryMismatch { kind: Kind, subcategory: Subcategory },
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "amount must be positive, got {}", amount)
            }
            Self::SubcategoryMismatch { kind, subcategory } => write!(
                f,
                "subcategory '{}' is not valid for kind '{}'",
                subcategory, kind
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn rent(amount_cents: i64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            "Rent",
            Kind::Expense,
            Subcategory::EssentialSpending,
            Money::from_cents(amount_cents),
        )
    }

    #[test]
    fn test_valid_transaction() {
        assert!(rent(120_000).validate().is_ok());
    }

    #[test]
    fn test_zero_amount_rejected() {
        let err = rent(0).validate().unwrap_err();
        assert!(matches!(
            err,
            TransactionValidationError::NonPositiveAmount(_)
        ));
        // one cent is the smallest accepted amount
        assert!(rent(1).validate().is_ok());
    }

    #[test]
    fn test_negative_amount_rejected() {
        assert!(rent(-500).validate().is_err());
    }

    #[test]
    fn test_subcategory_must_match_kind() {
        let mut txn = rent(5000);
        txn.subcategory = Subcategory::RegularSalary;
        let err = txn.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "subcategory 'Regular salary' is not valid for kind 'Expense'"
        );
    }

    #[test]
    fn test_every_subcategory_valid_under_own_kind() {
        for sub in Subcategory::ALL {
            let txn = Transaction::new(
                NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
                "x",
                sub.kind(),
                sub,
                Money::from_cents(100),
            );
            assert!(txn.validate().is_ok());
        }
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(rent(5000).signed_amount(), Money::from_cents(-5000));

        let salary = Transaction::new(
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            "Salary",
            Kind::Income,
            Subcategory::RegularSalary,
            Money::from_cents(300_000),
        );
        assert_eq!(salary.signed_amount(), Money::from_cents(300_000));
    }

    #[test]
    fn test_month() {
        assert_eq!(rent(100).month(), Month::new(2024, 3));
    }

    #[test]
    fn test_empty_description_allowed() {
        let mut txn = rent(100);
        txn.description.clear();
        assert!(txn.validate().is_ok());
    }
}
