//! Display formatting for terminal output
//!
//! Formats ledger rows and report results as plain text for the CLI.

pub mod report;
pub mod transaction;

pub use report::{format_breakdown, format_monthly_table, format_summary};
pub use transaction::{format_transaction_line, format_transaction_table};
