//! Core data models for fintrack
//!
//! Transactions and budget goals are the only persisted entities; everything
//! the dashboard shows is derived from them by `crate::reports`.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use budget::BudgetGoal;
pub use category::{canonical_category, canonical_payment_method, Category, PaymentMethod};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{
    parse_date, Transaction, TransactionType, TransactionValidationError, DATE_FORMAT,
};
