//! Storage layer
//!
//! Persists the ledger as a single CSV file, rewritten atomically on every
//! mutation so a crash never leaves a half-written file behind.

pub mod file_io;
pub mod ledger_file;

pub use file_io::write_atomic;
pub use ledger_file::{load, save};
