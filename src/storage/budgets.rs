//! Budget goal repository for JSON storage
//!
//! The goal set is stored in budgets.json and only ever replaced as a whole.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinanceError;
use crate::models::BudgetGoal;

use super::file_io::{read_json_or_default, remove_file_if_exists, write_json_atomic};

/// Repository for budget goal persistence
pub struct BudgetRepository {
    path: PathBuf,
    goals: RwLock<Vec<BudgetGoal>>,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            goals: RwLock::new(Vec::new()),
        }
    }

    /// Load goals from disk; missing or corrupt data loads as empty
    pub fn load(&self) -> Result<(), FinanceError> {
        let stored: Vec<BudgetGoal> = read_json_or_default(&self.path);
        tracing::debug!(count = stored.len(), "loaded budget goals");

        let mut goals = self
            .goals
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *goals = stored;
        Ok(())
    }

    pub fn save(&self) -> Result<(), FinanceError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*goals)
    }

    pub fn get_all(&self) -> Result<Vec<BudgetGoal>, FinanceError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(goals.clone())
    }

    /// Replace the whole goal set
    pub fn replace_all(&self, new_goals: Vec<BudgetGoal>) -> Result<(), FinanceError> {
        let mut goals = self
            .goals
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *goals = new_goals;
        Ok(())
    }

    /// Drop all goals from memory and disk
    pub fn clear(&self) -> Result<(), FinanceError> {
        self.replace_all(Vec::new())?;
        remove_file_if_exists(&self.path)
    }
}
