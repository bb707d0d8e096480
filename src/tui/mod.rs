//! Terminal User Interface module
//!
//! Full-screen dashboard over an open ledger session, built with ratatui.
//! An overview of the current month with its transactions, charts for the
//! trailing year, and dialogs for adding and removing entries.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
