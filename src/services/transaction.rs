//! Transaction service
//!
//! Create, replace and delete transactions. Every successful mutation is
//! saved and then stamps the "last updated" instant.

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{
    canonical_category, canonical_payment_method, Money, Transaction, TransactionId,
    TransactionType,
};
use crate::reports::{filter_by_period, DatePeriod};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Field values for a new or replacement transaction
#[derive(Debug, Clone)]
pub struct TransactionInput {
    pub description: String,
    pub amount: Money,
    pub kind: TransactionType,
    pub category: String,
    pub payment_method: Option<String>,
    pub date: NaiveDate,
}

impl TransactionInput {
    fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            description: self.description.trim().to_string(),
            amount: self.amount,
            kind: self.kind,
            category: canonical_category(&self.category),
            payment_method: self
                .payment_method
                .as_deref()
                .map(canonical_payment_method)
                .filter(|m| !m.is_empty()),
            date: self.date,
        }
    }
}

impl From<&Transaction> for TransactionInput {
    fn from(txn: &Transaction) -> Self {
        Self {
            description: txn.description.clone(),
            amount: txn.amount,
            kind: txn.kind,
            category: txn.category.clone(),
            payment_method: txn.payment_method.clone(),
            date: txn.date,
        }
    }
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction under a fresh id
    pub fn add(&self, input: TransactionInput) -> FinanceResult<Transaction> {
        let txn = input.into_transaction(TransactionId::new());
        txn.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;
        self.storage.touch()?;

        tracing::info!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, "added transaction");
        Ok(txn)
    }

    /// Replace an existing transaction wholesale, keeping its id
    pub fn update(&self, id: TransactionId, input: TransactionInput) -> FinanceResult<Transaction> {
        self.storage
            .transactions
            .get(id)?
            .ok_or_else(|| FinanceError::transaction_not_found(id.to_string()))?;

        let txn = input.into_transaction(id);
        txn.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;
        self.storage.touch()?;

        tracing::info!(id = %txn.id, "replaced transaction");
        Ok(txn)
    }

    /// Delete a transaction, returning the removed record
    pub fn delete(&self, id: TransactionId) -> FinanceResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| FinanceError::transaction_not_found(id.to_string()))?;

        self.storage.transactions.delete(id)?;
        self.storage.transactions.save()?;
        self.storage.touch()?;

        tracing::info!(id = %id, "deleted transaction");
        Ok(txn)
    }

    pub fn get(&self, id: TransactionId) -> FinanceResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Resolve user input (full id or `txn-xxxxxxxx` short form) to one transaction
    pub fn resolve(&self, identifier: &str) -> FinanceResult<Transaction> {
        let mut matches = self.storage.transactions.find_matching(identifier)?;
        match matches.len() {
            0 => Err(FinanceError::transaction_not_found(identifier)),
            1 => Ok(matches.remove(0)),
            n => Err(FinanceError::Validation(format!(
                "'{}' matches {} transactions; use a longer id",
                identifier, n
            ))),
        }
    }

    /// Snapshot of all transactions in stored order
    pub fn snapshot(&self) -> FinanceResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }

    /// Transactions within a period, newest first
    pub fn list_newest_first(&self, period: Option<&DatePeriod>) -> FinanceResult<Vec<Transaction>> {
        let all = self.storage.transactions.get_all()?;
        let mut transactions = match period {
            Some(period) => filter_by_period(&all, period),
            None => all,
        };
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }
}
