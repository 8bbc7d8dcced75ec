//! Transaction repository for JSON storage
//!
//! Manages loading and saving the transaction list to transactions.json. The
//! file holds a plain JSON array in insertion order.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinanceError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json_or_default, remove_file_if_exists, write_json_atomic};

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk; missing or corrupt data loads as empty
    pub fn load(&self) -> Result<(), FinanceError> {
        let transactions: Vec<Transaction> = read_json_or_default(&self.path);
        tracing::debug!(count = transactions.len(), "loaded transactions");

        let mut data = self.data.write().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = transactions;
        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), FinanceError> {
        let data = self.data.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get all transactions in stored order
    pub fn get_all(&self) -> Result<Vec<Transaction>, FinanceError> {
        let data = self.data.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, FinanceError> {
        let data = self.data.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().find(|t| t.id == id).cloned())
    }

    /// Find transactions whose id matches user input (full id or short form)
    pub fn find_matching(&self, input: &str) -> Result<Vec<Transaction>, FinanceError> {
        let data = self.data.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().filter(|t| t.id.matches(input)).cloned().collect())
    }

    /// Insert a transaction, or replace the one with the same id in place
    pub fn upsert(&self, txn: Transaction) -> Result<(), FinanceError> {
        let mut data = self.data.write().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match data.iter_mut().find(|t| t.id == txn.id) {
            Some(existing) => *existing = txn,
            None => data.push(txn),
        }
        Ok(())
    }

    /// Delete a transaction, returning whether it existed
    pub fn delete(&self, id: TransactionId) -> Result<bool, FinanceError> {
        let mut data = self.data.write().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let before = data.len();
        data.retain(|t| t.id != id);
        Ok(data.len() != before)
    }

    /// Drop all transactions from memory and disk
    pub fn clear(&self) -> Result<(), FinanceError> {
        let mut data = self.data.write().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.clear();
        remove_file_if_exists(&self.path)
    }

    pub fn count(&self) -> Result<usize, FinanceError> {
        let data = self.data.read().map_err(|e| {
            FinanceError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}
