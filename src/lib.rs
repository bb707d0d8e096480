//! saldo - Terminal dashboard for personal income and expenses
//!
//! This library backs the `saldo` binary: a small ledger of dated income
//! and expense entries kept in a CSV file, with monthly summaries, a
//! trailing-year history and a subcategory spending breakdown.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings file and path resolution
//! - `error`: Error types shared across the crate
//! - `models`: Core data types (money, months, transactions, the ledger)
//! - `storage`: CSV ledger file reading and atomic writing
//! - `reports`: Windowing and aggregation over ledger rows
//! - `services`: The session tying a ledger file to its in-memory state
//! - `display`: Plain-text rendering for the CLI
//! - `cli`: Subcommand argument types and handlers
//! - `tui`: Interactive full-screen dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use saldo_cli::config::{Settings, SaldoPaths};
//! use saldo_cli::services::Session;
//!
//! let paths = SaldoPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let session = Session::open("transacoes.csv".into(), settings)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{SaldoError, SaldoResult};
