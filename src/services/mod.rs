//! Service layer for fintrack
//!
//! Services wrap the storage layer with validation and canonicalization, and
//! stamp the "last updated" instant after every successful mutation.

pub mod budget;
pub mod transaction;

pub use budget::BudgetService;
pub use transaction::{TransactionInput, TransactionService};
