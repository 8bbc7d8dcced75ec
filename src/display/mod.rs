//! Display formatting for terminal output

pub mod budget;
pub mod transaction;

pub use budget::format_budget_goals;
pub use transaction::{format_transaction_details, format_transaction_table};
