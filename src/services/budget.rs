//! Budget service
//!
//! Budget goals are edited as a whole set: the new set replaces the stored
//! one after normalization (positive limits only, one goal per category).

use crate::error::{FinanceError, FinanceResult};
use crate::models::{canonical_category, BudgetGoal};
use crate::storage::{Storage, StorageKey};

/// Service for budget goal management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn list(&self) -> FinanceResult<Vec<BudgetGoal>> {
        self.storage.budgets.get_all()
    }

    /// Replace the stored goal set
    pub fn replace_all(&self, goals: Vec<BudgetGoal>) -> FinanceResult<Vec<BudgetGoal>> {
        let goals = goals
            .into_iter()
            .map(|g| BudgetGoal::new(canonical_category(&g.category), g.limit))
            .collect();
        let normalized = BudgetGoal::normalize_set(goals);

        self.storage.budgets.replace_all(normalized.clone())?;
        self.storage.budgets.save()?;
        self.storage.touch()?;

        tracing::info!(count = normalized.len(), "replaced budget goals");
        Ok(normalized)
    }

    /// Replace the set with the current goals plus `changes` applied on top
    ///
    /// A change with a non-positive limit removes that category's goal.
    pub fn apply_changes(&self, changes: Vec<BudgetGoal>) -> FinanceResult<Vec<BudgetGoal>> {
        if changes.is_empty() {
            return Err(FinanceError::Validation(
                "No budget goals given; use CATEGORY=LIMIT".into(),
            ));
        }

        let mut goals = self.list()?;
        for change in changes {
            let category = canonical_category(&change.category);
            goals.retain(|g| g.category != category);
            goals.push(BudgetGoal::new(category, change.limit));
        }
        self.replace_all(goals)
    }

    /// Remove all goals
    pub fn clear(&self) -> FinanceResult<()> {
        self.storage.clear(StorageKey::Budgets)?;
        self.storage.touch()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinTrackPaths;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinTrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_replace_all_normalizes() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let saved = service
            .replace_all(vec![
                BudgetGoal::new("food", Money::from_units(500)),
                BudgetGoal::new("Travel", Money::zero()),
                BudgetGoal::new("Food", Money::from_units(600)),
            ])
            .unwrap();

        assert_eq!(saved, vec![BudgetGoal::new("Food", Money::from_units(600))]);
        assert_eq!(service.list().unwrap(), saved);
        assert!(storage.last_updated().unwrap().is_some());
    }

    #[test]
    fn test_apply_changes_merges_and_removes() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        service
            .replace_all(vec![
                BudgetGoal::new("Food", Money::from_units(500)),
                BudgetGoal::new("Pets", Money::from_units(100)),
            ])
            .unwrap();

        let goals = service
            .apply_changes(vec![
                BudgetGoal::new("pets", Money::zero()),
                BudgetGoal::new("Travel", Money::from_units(300)),
            ])
            .unwrap();

        let categories: Vec<_> = goals.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(categories, vec!["Food", "Travel"]);
    }

    #[test]
    fn test_apply_no_changes_is_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        assert!(service.apply_changes(Vec::new()).unwrap_err().is_validation());
    }

    #[test]
    fn test_clear() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        service
            .replace_all(vec![BudgetGoal::new("Food", Money::from_units(500))])
            .unwrap();

        service.clear().unwrap();
        assert!(service.list().unwrap().is_empty());
    }
}
