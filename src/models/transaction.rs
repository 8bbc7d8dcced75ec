//! Transaction model
//!
//! A transaction is an immutable income or expense record. Edits replace the
//! whole record under the same id; nothing is patched in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Date format used at every boundary (zero-padded, sorts chronologically)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
}

/// Direction of a transaction; the stored amount never carries the sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// +1 for income, -1 for expense
    pub const fn sign(&self) -> i64 {
        match self {
            Self::Income => 1,
            Self::Expense => -1,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,

    /// Free-text label
    pub description: String,

    /// Non-negative amount; the direction comes from `kind`
    pub amount: Money,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Canonical label or any user-defined string
    pub category: String,

    /// Absent means "unspecified"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    /// Calendar date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction with a fresh id
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        kind: TransactionType,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            description: description.into(),
            amount,
            kind,
            category: category.into(),
            payment_method: None,
            date,
        }
    }

    /// Builder-style setter for the payment method
    pub fn with_payment_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = Some(method.into());
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount with the sign of its direction applied
    pub fn signed_amount(&self) -> Money {
        Money::from_cents(self.amount.cents().saturating_mul(self.kind.sign()))
    }

    /// A planned entry dated after `today`
    pub fn is_provisioned(&self, today: NaiveDate) -> bool {
        self.date > today
    }

    /// Payment method if one was given and it is not blank
    pub fn payment_method_label(&self) -> Option<&str> {
        self.payment_method
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }

    /// Validate the fields a new or edited transaction must satisfy
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_income() { '+' } else { '-' };
        write!(
            f,
            "{} {} {}{} ({})",
            self.date.format(DATE_FORMAT),
            self.description,
            sign,
            self.amount,
            self.category
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransactionValidationError {
    #[error("Description must not be empty")]
    EmptyDescription,
    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(Money),
    #[error("Category must not be empty")]
    EmptyCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_signed_amount() {
        let income = Transaction::new(
            "Paycheck",
            Money::from_units(1000),
            TransactionType::Income,
            "Salary",
            date("2024-06-01"),
        );
        let expense = Transaction::new(
            "Groceries",
            Money::from_units(100),
            TransactionType::Expense,
            "Food",
            date("2024-06-01"),
        );

        assert_eq!(income.signed_amount().cents(), 100_000);
        assert_eq!(expense.signed_amount().cents(), -10_000);
    }

    #[test]
    fn test_is_provisioned() {
        let txn = Transaction::new(
            "Rent",
            Money::from_units(900),
            TransactionType::Expense,
            "Housing",
            date("2024-07-01"),
        );
        assert!(txn.is_provisioned(date("2024-06-20")));
        assert!(!txn.is_provisioned(date("2024-07-01")));
    }

    #[test]
    fn test_validation() {
        let mut txn = Transaction::new(
            "Lunch",
            Money::from_cents(2550),
            TransactionType::Expense,
            "Food",
            date("2024-06-01"),
        );
        assert!(txn.validate().is_ok());

        txn.amount = Money::zero();
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::NonPositiveAmount(Money::zero()))
        );

        txn.amount = Money::from_cents(100);
        txn.description = "  ".into();
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_blank_payment_method_is_unspecified() {
        let txn = Transaction::new(
            "Bus",
            Money::from_cents(450),
            TransactionType::Expense,
            "Transport",
            date("2024-06-01"),
        );
        assert_eq!(txn.payment_method_label(), None);
        assert_eq!(txn.clone().with_payment_method(" ").payment_method_label(), None);
        assert_eq!(
            txn.with_payment_method("Pix").payment_method_label(),
            Some("Pix")
        );
    }

    #[test]
    fn test_serialization_shape() {
        let txn = Transaction::new(
            "Paycheck",
            Money::from_cents(100_000),
            TransactionType::Income,
            "Salary",
            date("2024-06-01"),
        )
        .with_payment_method("Transfer");

        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(value["type"], "INCOME");
        assert_eq!(value["date"], "2024-06-01");
        assert_eq!(value["paymentMethod"], "Transfer");
        assert_eq!(value["amount"], 100_000);
    }

    #[test]
    fn test_rejects_non_iso_dates() {
        assert!(parse_date("01/06/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }
}
