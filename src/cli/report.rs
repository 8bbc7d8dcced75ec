//! Dashboard CLI command

use clap::Args;

use super::{parse_date_arg, resolve_today};
use crate::config::settings::Settings;
use crate::error::{FinanceError, FinanceResult};
use crate::reports::{Dashboard, DatePeriod};
use crate::services::{BudgetService, TransactionService};
use crate::storage::Storage;

/// Dashboard arguments
#[derive(Args)]
pub struct DashboardArgs {
    /// Period start (YYYY-MM-DD), defaults to the first day of the current month
    #[arg(long)]
    pub from: Option<String>,
    /// Period end (YYYY-MM-DD), defaults to the last day of the current month
    #[arg(long)]
    pub to: Option<String>,
    /// Reference date (YYYY-MM-DD), defaults to the local date
    #[arg(long)]
    pub today: Option<String>,
}

impl DashboardArgs {
    /// Resolve the reference date and the period around it
    pub fn resolve(&self) -> FinanceResult<(DatePeriod, chrono::NaiveDate)> {
        let today = resolve_today(self.today.as_deref())?;
        let month = DatePeriod::month_of(today);

        let start = match &self.from {
            Some(from) => parse_date_arg(from)?,
            None => month.start,
        };
        let end = match &self.to {
            Some(to) => parse_date_arg(to)?,
            None => month.end,
        };

        let period = DatePeriod::new(start, end);
        if period.is_empty() {
            return Err(FinanceError::Validation(format!(
                "Start date is after end date ({})",
                period
            )));
        }
        Ok((period, today))
    }
}

/// Handle the dashboard command
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    args: DashboardArgs,
) -> FinanceResult<()> {
    let (period, today) = args.resolve()?;

    let transactions = TransactionService::new(storage).snapshot()?;
    let goals = BudgetService::new(storage).list()?;

    let dashboard = Dashboard::build(&transactions, &goals, period, today);
    print!("{}", dashboard.format_terminal(&settings.currency_symbol));

    Ok(())
}
