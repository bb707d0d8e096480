//! Transaction CLI commands
//!
//! Implements the `add`, `list`, and `remove` subcommands.

use chrono::NaiveDate;
use clap::{Args, ValueEnum};

use crate::display::{format_transaction_line, format_transaction_table};
use crate::error::{SaldoError, SaldoResult};
use crate::models::{Kind, Money, Subcategory};
use crate::reports::Window;
use crate::services::{AddTransactionInput, Session};

/// Arguments for `saldo add`.
#[derive(Args)]
pub struct AddArgs {
    /// Amount, always positive; the type carries the sign (e.g. "1200.00")
    pub amount: String,
    /// What the transaction was for
    pub description: String,
    /// Transaction type: expense or income
    #[arg(short, long, default_value = "expense")]
    pub kind: String,
    /// Subcategory; defaults to the first one for the type
    #[arg(short, long)]
    pub subcategory: Option<String>,
    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for `saldo list`.
#[derive(Args)]
pub struct ListArgs {
    /// Which rows to show
    #[arg(short, long, value_enum, default_value_t = WindowArg::Current)]
    pub window: WindowArg,
}

/// Arguments for `saldo remove`.
#[derive(Args)]
pub struct RemoveArgs {
    /// Position of the row to remove, as shown by `list`
    pub position: usize,
    /// Skip confirmation
    #[arg(short, long)]
    pub force: bool,
}

/// Report window, as a CLI flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WindowArg {
    /// The current calendar month
    Current,
    /// The trailing twelve calendar months
    Trailing,
    /// The whole ledger
    All,
}

impl From<WindowArg> for Window {
    fn from(arg: WindowArg) -> Self {
        match arg {
            WindowArg::Current => Window::CurrentMonth,
            WindowArg::Trailing => Window::TrailingYear,
            WindowArg::All => Window::All,
        }
    }
}

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date_arg(raw: &str) -> SaldoResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        SaldoError::validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", raw))
    })
}

/// Handle `saldo add`.
pub fn handle_add(session: &mut Session, args: AddArgs) -> SaldoResult<()> {
    let amount = Money::parse(&args.amount).map_err(|e| {
        SaldoError::validation(format!(
            "Invalid amount '{}': {}. Use a format like '1200' or '1200.50'",
            args.amount, e
        ))
    })?;

    let date = match args.date {
        Some(raw) => parse_date_arg(&raw)?,
        None => chrono::Local::now().date_naive(),
    };

    let kind: Kind = args.kind.parse().map_err(SaldoError::Validation)?;

    let subcategory = match args.subcategory {
        Some(raw) => raw.parse::<Subcategory>().map_err(SaldoError::Validation)?,
        None => Subcategory::allowed_for(kind)[0],
    };

    let position = session.add_transaction(AddTransactionInput {
        date,
        description: args.description,
        kind,
        subcategory,
        amount,
    })?;

    if let Some(added) = session.ledger().get(position) {
        println!(
            "Added at position {}: {}",
            position,
            format_transaction_line(added, session.currency_symbol())
        );
    }
    Ok(())
}

/// Handle `saldo list`.
pub fn handle_list(session: &Session, args: ListArgs) -> SaldoResult<()> {
    let today = chrono::Local::now().date_naive();
    let rows = session.rows(args.window.into(), today);

    print!(
        "{}",
        format_transaction_table(&rows, session.currency_symbol())
    );
    println!(
        "\nShowing {} of {} transaction(s)",
        rows.len(),
        session.ledger().len()
    );
    Ok(())
}

/// Handle `saldo remove`.
pub fn handle_remove(session: &mut Session, args: RemoveArgs) -> SaldoResult<()> {
    let currency = session.currency_symbol().to_string();

    let target = session
        .ledger()
        .get(args.position)
        .ok_or(SaldoError::InvalidPosition {
            position: args.position,
            len: session.ledger().len(),
        })?;

    if !args.force {
        println!("About to remove position {}:", args.position);
        println!("  {}", format_transaction_line(target, &currency));
        println!();
        println!("Use --force to confirm removal");
        return Ok(());
    }

    let removed = session.remove_transaction(args.position)?;
    println!("Removed: {}", format_transaction_line(&removed, &currency));
    Ok(())
}
