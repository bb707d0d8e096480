//! Modal dialogs for the TUI

pub mod confirm;
pub mod help;
pub mod transaction;
