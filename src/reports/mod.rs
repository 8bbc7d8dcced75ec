//! Reports module for fintrack
//!
//! The aggregation engine: pure functions from a snapshot of transactions
//! (and budget goals) plus a reference date to derived figures. Nothing here
//! touches storage or fails on well-formed input.

pub mod breakdown;
pub mod budget_status;
pub mod dashboard;
pub mod period;
pub mod totals;

pub use breakdown::{
    category_breakdown, payment_method_breakdown, CategoryShare, PaymentMethodTotal,
    UNSPECIFIED_METHOD,
};
pub use budget_status::{budget_status, BudgetHealth, BudgetStatus};
pub use dashboard::{Dashboard, DashboardEntry};
pub use period::{filter_by_period, same_month, DatePeriod};
pub use totals::{income_vs_expense, period_totals, real_balance, ComparisonEntry, PeriodTotals};
