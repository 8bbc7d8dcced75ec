//! Budget goal model
//!
//! A budget goal is a monthly spending ceiling for one category. The category
//! label is the identity key: a goal set holds at most one goal per category
//! and is always replaced as a whole.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Monthly spending ceiling for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetGoal {
    /// Matches `Transaction::category` by exact label
    pub category: String,

    /// Ceiling for any calendar month
    pub limit: Money,
}

impl BudgetGoal {
    pub fn new(category: impl Into<String>, limit: Money) -> Self {
        Self {
            category: category.into(),
            limit,
        }
    }

    /// A goal with a non-positive limit carries no ceiling
    pub fn has_limit(&self) -> bool {
        self.limit.is_positive()
    }

    /// Normalize a goal set before it replaces the stored one
    ///
    /// Drops goals without a positive limit or with a blank category and keeps
    /// one goal per category. When a category repeats, the last goal wins but
    /// keeps the position of the first occurrence.
    pub fn normalize_set(goals: Vec<BudgetGoal>) -> Vec<BudgetGoal> {
        let mut normalized: Vec<BudgetGoal> = Vec::with_capacity(goals.len());

        for mut goal in goals {
            goal.category = goal.category.trim().to_string();
            if goal.category.is_empty() || !goal.has_limit() {
                continue;
            }
            match normalized.iter_mut().find(|g| g.category == goal.category) {
                Some(existing) => existing.limit = goal.limit,
                None => normalized.push(goal),
            }
        }

        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_non_positive_limits() {
        let goals = vec![
            BudgetGoal::new("Food", Money::from_units(500)),
            BudgetGoal::new("Travel", Money::zero()),
            BudgetGoal::new("Pets", Money::from_units(-10)),
            BudgetGoal::new("  ", Money::from_units(10)),
        ];

        let normalized = BudgetGoal::normalize_set(goals);
        assert_eq!(normalized, vec![BudgetGoal::new("Food", Money::from_units(500))]);
    }

    #[test]
    fn test_normalize_keeps_one_goal_per_category() {
        let goals = vec![
            BudgetGoal::new("Food", Money::from_units(500)),
            BudgetGoal::new("Housing", Money::from_units(1500)),
            BudgetGoal::new(" Food ", Money::from_units(650)),
        ];

        let normalized = BudgetGoal::normalize_set(goals);
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0], BudgetGoal::new("Food", Money::from_units(650)));
        assert_eq!(normalized[1].category, "Housing");
    }

    #[test]
    fn test_serialization_shape() {
        let goal = BudgetGoal::new("Food", Money::from_cents(12_000));
        let json = serde_json::to_string(&goal).unwrap();
        assert_eq!(json, r#"{"category":"Food","limit":12000}"#);
    }
}
