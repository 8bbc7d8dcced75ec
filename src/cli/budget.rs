//! Budget CLI commands
//!
//! Implements CLI commands for monthly category budget goals.

use clap::Subcommand;

use super::parse_amount_arg;
use crate::config::settings::Settings;
use crate::display::budget::format_budget_goals;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{BudgetGoal, Category};
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set monthly limits, e.g. `Food=800 Transport=250`
    ///
    /// A limit of 0 removes that category's goal.
    Set {
        /// CATEGORY=LIMIT pairs
        #[arg(required = true)]
        goals: Vec<String>,
        /// Replace the whole goal set instead of merging
        #[arg(long)]
        replace: bool,
    },
    /// List budget goals
    List,
    /// Remove all budget goals
    Clear,
}

/// Parse a `CATEGORY=LIMIT` pair; the category may itself contain `=`
pub fn parse_goal_arg(input: &str) -> FinanceResult<BudgetGoal> {
    let (category, limit) = input.rsplit_once('=').ok_or_else(|| {
        FinanceError::Validation(format!("Invalid goal '{}'; use CATEGORY=LIMIT", input))
    })?;

    let category = category.trim();
    if category.is_empty() {
        return Err(FinanceError::Validation(format!(
            "Invalid goal '{}'; category is empty",
            input
        )));
    }

    Ok(BudgetGoal::new(category, parse_amount_arg(limit)?))
}

/// Spending categories offered for budget goals, comma separated
pub fn suggested_categories() -> String {
    Category::expense_categories()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { goals, replace } => {
            let goals = goals
                .iter()
                .map(|g| parse_goal_arg(g))
                .collect::<FinanceResult<Vec<_>>>()?;

            let saved = if replace {
                service.replace_all(goals)?
            } else {
                service.apply_changes(goals)?
            };

            println!("Budget goals saved.");
            print!("{}", format_budget_goals(&saved, symbol));
        }

        BudgetCommands::List => {
            let goals = service.list()?;
            print!("{}", format_budget_goals(&goals, symbol));
            if goals.is_empty() {
                println!("Suggested categories: {}", suggested_categories());
            }
        }

        BudgetCommands::Clear => {
            service.clear()?;
            println!("All budget goals removed.");
        }
    }

    Ok(())
}
