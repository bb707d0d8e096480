//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the session and report layers.

pub mod config;
pub mod report;
pub mod transaction;

pub use config::{handle_config, ConfigArgs};
pub use report::{handle_breakdown, handle_monthly, handle_summary};
pub use transaction::{
    handle_add, handle_list, handle_remove, AddArgs, ListArgs, RemoveArgs, WindowArg,
};
