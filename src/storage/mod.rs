//! Storage layer for fintrack
//!
//! A small key-value store over JSON files: one file per logical key
//! (transactions, budget goals, last-update timestamp), written atomically.
//! Loading never fails on bad data; unreadable files load as empty.

pub mod budgets;
pub mod file_io;
pub mod timestamp;
pub mod transactions;

pub use budgets::BudgetRepository;
pub use file_io::{read_json, read_json_or_default, write_json_atomic};
pub use timestamp::LastUpdateRepository;
pub use transactions::TransactionRepository;

use chrono::{DateTime, Utc};
use std::fmt;

use crate::config::paths::FinTrackPaths;
use crate::error::FinanceError;

/// Logical keys of the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey {
    Transactions,
    Budgets,
    LastUpdate,
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transactions => write!(f, "transactions"),
            Self::Budgets => write!(f, "budgets"),
            Self::LastUpdate => write!(f, "last update"),
        }
    }
}

/// Main storage coordinator that provides access to all repositories
///
/// Owns the "last updated" instant; services call [`Storage::touch`] after
/// every successful mutation.
pub struct Storage {
    paths: FinTrackPaths,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
    pub last_update: LastUpdateRepository,
}

impl Storage {
    /// Create a new Storage instance, creating the data directory if needed
    pub fn new(paths: FinTrackPaths) -> Result<Self, FinanceError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            last_update: LastUpdateRepository::new(paths.last_update_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &FinTrackPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), FinanceError> {
        self.transactions.load()?;
        self.budgets.load()?;
        self.last_update.load()?;
        Ok(())
    }

    /// Record that the stored data changed just now
    pub fn touch(&self) -> Result<DateTime<Utc>, FinanceError> {
        let now = Utc::now();
        self.last_update.set(now)?;
        tracing::debug!(at = %now, "recorded last update");
        Ok(now)
    }

    pub fn last_updated(&self) -> Result<Option<DateTime<Utc>>, FinanceError> {
        self.last_update.get()
    }

    /// Remove everything stored under a key
    pub fn clear(&self, key: StorageKey) -> Result<(), FinanceError> {
        tracing::info!(key = %key, "clearing stored data");
        match key {
            StorageKey::Transactions => self.transactions.clear(),
            StorageKey::Budgets => self.budgets.clear(),
            StorageKey::LastUpdate => self.last_update.clear(),
        }
    }
}
