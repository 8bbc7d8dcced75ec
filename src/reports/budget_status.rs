//! Budget consumption for the current calendar month
//!
//! Budget tracking always looks at the real-world month of `today`, not at the
//! period selected on the dashboard.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;

use super::period::same_month;
use crate::models::{BudgetGoal, Money, Transaction};

/// Percentage at which a budget starts to warn
pub const WARNING_THRESHOLD: f64 = 80.0;

/// Percentage at which a budget is exceeded
pub const EXCEEDED_THRESHOLD: f64 = 100.0;

/// Health classification of a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetHealth {
    /// Below 80% of the limit
    OnTrack,
    /// From 80% up to, but not including, 100%
    Warning,
    /// 100% or more
    Exceeded,
}

impl BudgetHealth {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= EXCEEDED_THRESHOLD {
            Self::Exceeded
        } else if percentage >= WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::OnTrack
        }
    }
}

impl fmt::Display for BudgetHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnTrack => write!(f, "on track"),
            Self::Warning => write!(f, "warning"),
            Self::Exceeded => write!(f, "exceeded"),
        }
    }
}

/// Spending against one budget goal this month
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub category: String,
    pub limit: Money,
    pub spent: Money,
    /// `spent / limit * 100`
    pub percentage: f64,
    /// `limit - spent`, negative once exceeded
    pub remaining: Money,
}

impl BudgetStatus {
    pub fn health(&self) -> BudgetHealth {
        BudgetHealth::from_percentage(self.percentage)
    }
}

/// Month-to-date spending per budget goal, most at-risk first
///
/// Goals whose limit is zero or negative carry no ceiling and are left out.
/// An empty goal list yields an empty result, so callers can tell "no budgets
/// configured" apart from "nothing spent yet".
pub fn budget_status(
    goals: &[BudgetGoal],
    transactions: &[Transaction],
    today: NaiveDate,
) -> Vec<BudgetStatus> {
    let mut spent_by_category: HashMap<&str, Money> = HashMap::new();
    for txn in transactions
        .iter()
        .filter(|t| t.is_expense() && same_month(t.date, today))
    {
        *spent_by_category
            .entry(txn.category.as_str())
            .or_insert_with(Money::zero) += txn.amount;
    }

    let mut statuses: Vec<BudgetStatus> = goals
        .iter()
        .filter(|goal| goal.has_limit())
        .map(|goal| {
            let spent = spent_by_category
                .get(goal.category.as_str())
                .copied()
                .unwrap_or_default();
            BudgetStatus {
                category: goal.category.clone(),
                limit: goal.limit,
                spent,
                percentage: spent.cents() as f64 * 100.0 / goal.limit.cents() as f64,
                remaining: goal.limit - spent,
            }
        })
        .collect();

    statuses.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    statuses
}
