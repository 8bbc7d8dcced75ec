//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Shared argument
//! parsing lives here; each command group has its own module.

pub mod ask;
pub mod budget;
pub mod report;
pub mod transaction;

pub use ask::{handle_ask_command, AskArgs};
pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{handle_dashboard_command, DashboardArgs};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::{Local, NaiveDate};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{parse_date, Money};

/// The local calendar date
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` argument
pub fn parse_date_arg(input: &str) -> FinanceResult<NaiveDate> {
    parse_date(input).map_err(|_| {
        FinanceError::Validation(format!("Invalid date '{}'; expected YYYY-MM-DD", input))
    })
}

/// `--today` override or the local date
pub fn resolve_today(today: Option<&str>) -> FinanceResult<NaiveDate> {
    today.map(parse_date_arg).unwrap_or_else(|| Ok(local_today()))
}

/// Parse an amount argument such as `150`, `89.90` or `89,90`
pub fn parse_amount_arg(input: &str) -> FinanceResult<Money> {
    Money::parse(input).map_err(|e| FinanceError::Validation(e.to_string()))
}
