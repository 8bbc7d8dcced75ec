//! Dashboard
//!
//! Everything the overview screen shows, recomputed from a snapshot of
//! transactions and budget goals for one period and one reference date.

use chrono::NaiveDate;

use super::breakdown::{
    category_breakdown, payment_method_breakdown, CategoryShare, PaymentMethodTotal,
};
use super::budget_status::{budget_status, BudgetHealth, BudgetStatus};
use super::period::{filter_by_period, DatePeriod};
use super::totals::{income_vs_expense, period_totals, real_balance, ComparisonEntry, PeriodTotals};
use crate::models::{BudgetGoal, Money, Transaction, DATE_FORMAT};

/// A transaction as listed on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardEntry {
    pub transaction: Transaction,
    /// Dated after the reference date
    pub provisioned: bool,
}

/// Derived dashboard figures
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub period: DatePeriod,
    pub today: NaiveDate,
    /// All-time balance up to and including `today`, independent of `period`
    pub real_balance: Money,
    /// Income, expense and result within `period`
    pub totals: PeriodTotals,
    pub comparison: [ComparisonEntry; 2],
    pub categories: Vec<CategoryShare>,
    pub payment_methods: Vec<PaymentMethodTotal>,
    /// Current-month budget consumption, independent of `period`
    pub budgets: Vec<BudgetStatus>,
    /// Whether any budget goals are configured at all
    pub has_budget_goals: bool,
    /// Period transactions, newest first
    pub entries: Vec<DashboardEntry>,
}

impl Dashboard {
    /// Compute the dashboard for a snapshot
    pub fn build(
        transactions: &[Transaction],
        goals: &[BudgetGoal],
        period: DatePeriod,
        today: NaiveDate,
    ) -> Self {
        let in_period = filter_by_period(transactions, &period);
        let totals = period_totals(&in_period);

        let mut entries: Vec<DashboardEntry> = in_period
            .iter()
            .map(|t| DashboardEntry {
                provisioned: t.is_provisioned(today),
                transaction: t.clone(),
            })
            .collect();
        entries.sort_by(|a, b| b.transaction.date.cmp(&a.transaction.date));

        Self {
            period,
            today,
            real_balance: real_balance(transactions, today),
            comparison: income_vs_expense(&totals),
            totals,
            categories: category_breakdown(&in_period),
            payment_methods: payment_method_breakdown(&in_period),
            budgets: budget_status(goals, transactions, today),
            has_budget_goals: !goals.is_empty(),
            entries,
        }
    }

    /// Format the dashboard for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(symbol);
        let mut output = String::new();

        output.push_str(&format!("Dashboard: {}\n", self.period));
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>16}\n",
            "Current balance (all time)",
            money(self.real_balance)
        ));
        output.push_str(&format!(
            "{:<28} {:>16}\n",
            "Period result",
            money(self.totals.period_result)
        ));
        for entry in &self.comparison {
            output.push_str(&format!(
                "{:<28} {:>16}\n",
                format!("{} (period)", entry.label),
                money(entry.amount)
            ));
        }

        output.push_str(&format!("\nTransactions ({})\n", self.entries.len()));
        output.push_str(&"-".repeat(72));
        output.push('\n');
        if self.entries.is_empty() {
            output.push_str("No transactions found in this period.\n");
        }
        for entry in &self.entries {
            let txn = &entry.transaction;
            let sign = if txn.is_income() { "+" } else { "-" };
            let flag = if entry.provisioned { " [provisioned]" } else { "" };
            output.push_str(&format!(
                "{} {:<24} {:<14} {}{}{}\n",
                txn.date.format(DATE_FORMAT),
                truncate(&txn.description, 24),
                truncate(&txn.category, 14),
                sign,
                money(txn.amount),
                flag
            ));
        }

        output.push_str("\nExpenses by category\n");
        output.push_str(&"-".repeat(72));
        output.push('\n');
        if self.categories.is_empty() {
            output.push_str("No expenses in this period.\n");
        }
        for category in &self.categories {
            output.push_str(&format!(
                "{:<30} {:>16} {:>7.1}%\n",
                category.category,
                money(category.amount),
                category.share * 100.0
            ));
        }

        output.push_str("\nExpenses by payment method\n");
        output.push_str(&"-".repeat(72));
        output.push('\n');
        if self.payment_methods.is_empty() {
            output.push_str("No payment data in this period.\n");
        }
        for method in &self.payment_methods {
            output.push_str(&format!(
                "{:<30} {:>16}\n",
                method.method,
                money(method.amount)
            ));
        }

        output.push_str(&format!(
            "\nBudget goals ({})\n",
            self.today.format("%Y-%m")
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');
        if !self.has_budget_goals {
            output.push_str("No budget goals configured. Use 'fintrack budget set'.\n");
        }
        for status in &self.budgets {
            let marker = match status.health() {
                BudgetHealth::OnTrack => " ",
                BudgetHealth::Warning => "!",
                BudgetHealth::Exceeded => "✗",
            };
            output.push_str(&format!(
                "{} {:<22} {:>14} / {:<14} {:>6.0}% {}\n",
                marker,
                truncate(&status.category, 22),
                money(status.spent),
                money(status.limit),
                status.percentage,
                status.health()
            ));
        }

        output
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
