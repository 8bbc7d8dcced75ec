//! Budget goal display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::BudgetGoal;

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Monthly limit")]
    limit: String,
}

pub fn format_budget_goals(goals: &[BudgetGoal], symbol: &str) -> String {
    if goals.is_empty() {
        return "No budget goals configured.\n".to_string();
    }

    let rows = goals.iter().map(|g| GoalRow {
        category: g.category.clone(),
        limit: g.limit.format_with_symbol(symbol),
    });

    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push('\n');
    output
}
