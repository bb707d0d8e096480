use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use saldo_cli::cli::{
    handle_add, handle_breakdown, handle_config, handle_list, handle_monthly, handle_remove,
    handle_summary, AddArgs, ConfigArgs, ListArgs, RemoveArgs,
};
use saldo_cli::config::{resolve_ledger_path, SaldoPaths, Settings};
use saldo_cli::logging::init_logging;
use saldo_cli::services::Session;
use saldo_cli::tui;

#[derive(Parser)]
#[command(
    name = "saldo",
    version,
    about = "Terminal dashboard for tracking personal income and expenses",
    long_about = "saldo keeps a ledger of dated income and expense entries in a \
                  plain CSV file and reports on the current month, the trailing \
                  year and where the money went. Run without a subcommand to \
                  open the interactive dashboard."
)]
struct Cli {
    /// Ledger file to operate on (defaults to the configured one)
    #[arg(long, global = true, env = "SALDO_LEDGER_FILE", value_name = "PATH")]
    ledger: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui,

    /// Add a transaction to the ledger
    Add(AddArgs),

    /// List transactions in a window
    #[command(alias = "ls")]
    List(ListArgs),

    /// Remove a transaction by its position
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// Income, expense and balance for the current month
    Summary,

    /// Income and expense per month over the trailing year
    Monthly,

    /// Current-month spending split by subcategory
    Breakdown,

    /// Show or change settings
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SaldoPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let ledger_path = resolve_ledger_path(cli.ledger, &settings);

    match cli.command {
        // No subcommand opens the dashboard. Logging stays off there so
        // stderr never writes into the alternate screen.
        None | Some(Commands::Tui) => {
            let mut session = Session::open(ledger_path, settings)?;
            tui::run_tui(&mut session)?;
        }

        Some(Commands::Add(args)) => {
            init_logging();
            let mut session = Session::open(ledger_path, settings)?;
            handle_add(&mut session, args)?;
        }
        Some(Commands::List(args)) => {
            init_logging();
            let session = Session::open(ledger_path, settings)?;
            handle_list(&session, args)?;
        }
        Some(Commands::Remove(args)) => {
            init_logging();
            let mut session = Session::open(ledger_path, settings)?;
            handle_remove(&mut session, args)?;
        }
        Some(Commands::Summary) => {
            init_logging();
            let session = Session::open(ledger_path, settings)?;
            handle_summary(&session)?;
        }
        Some(Commands::Monthly) => {
            init_logging();
            let session = Session::open(ledger_path, settings)?;
            handle_monthly(&session)?;
        }
        Some(Commands::Breakdown) => {
            init_logging();
            let session = Session::open(ledger_path, settings)?;
            handle_breakdown(&session)?;
        }
        Some(Commands::Config(args)) => {
            init_logging();
            handle_config(&paths, settings, &ledger_path, args)?;
        }
    }

    Ok(())
}
