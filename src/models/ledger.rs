//! Ordered transaction ledger
//!
//! The ledger is an append-ordered list of transactions. Positions are
//! zero-based indexes into that order and double as row identifiers for
//! removal, so removing a row shifts every later position down by one.

use crate::error::{SaldoError, SaldoResult};

use super::transaction::Transaction;

/// An in-memory ledger of transactions in append order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from already-validated transactions, preserving order.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The transaction at `position`, if any.
    pub fn get(&self, position: usize) -> Option<&Transaction> {
        self.transactions.get(position)
    }

    /// All transactions in append order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// Validate and append a transaction at the end of the ledger.
    pub fn add(&mut self, transaction: Transaction) -> SaldoResult<()> {
        transaction
            .validate()
            .map_err(|e| SaldoError::validation(e.to_string()))?;
        self.transactions.push(transaction);
        Ok(())
    }

    /// Remove and return the transaction at `position`.
    ///
    /// Fails when `position >= len()`; positions of all later rows shift
    /// down by one on success.
    pub fn remove(&mut self, position: usize) -> SaldoResult<Transaction> {
        if position >= self.transactions.len() {
            return Err(SaldoError::InvalidPosition {
                position,
                len: self.transactions.len(),
            });
        }
        Ok(self.transactions.remove(position))
    }
}

impl FromIterator<Transaction> for Ledger {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self {
            transactions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}
