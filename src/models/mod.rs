//! Core data models
//!
//! This module contains the data structures that represent the tracker
//! domain: money amounts, transaction kinds and subcategories, calendar
//! months, and the ledger itself.

pub mod category;
pub mod ledger;
pub mod money;
pub mod month;
pub mod transaction;

pub use category::{Kind, Subcategory};
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use month::Month;
pub use transaction::{Transaction, TransactionValidationError};
