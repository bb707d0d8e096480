//! Aggregation engine
//!
//! Pure functions over ledger windows: income/expense summaries, monthly
//! series for charting, and per-subcategory expense breakdowns. Every
//! report takes its reference date from the caller, so nothing in here
//! reads the clock.

pub mod breakdown;
pub mod monthly;
pub mod summary;
pub mod window;

pub use breakdown::{expense_breakdown, BreakdownEntry};
pub use monthly::{monthly_series, MonthlyTotals};
pub use summary::Summary;
pub use window::{current_month_rows, rows_in, trailing_rows, Window, TRAILING_MONTHS};
