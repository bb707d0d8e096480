//! Service layer
//!
//! Business logic on top of storage: the session owns the loaded ledger,
//! validates mutations, and keeps the file in sync.

pub mod session;

pub use session::{AddTransactionInput, Session};
