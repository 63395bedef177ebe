//! File-backed persistence
//!
//! Each user gets `user_data/expenses_<id>.csv` and
//! `user_data/budgets_<id>.json`. Writes for the same user id are serialized
//! in-process so two sessions for one user can't interleave their rewrites.
//!
//! The lock only covers replacing a file. It does not merge: a session that
//! saves from a stale copy still replaces whatever another session wrote
//! since it loaded. Callers sharing a user id across sessions should
//! `reload` before mutating.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::warn;

use super::budgets::{read_budgets, write_budgets};
use super::expenses::{read_ledger, write_ledger};
use super::PersistenceAdapter;
use crate::config::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{BudgetStore, Ledger, UserId};

/// Persistence adapter storing one CSV and one JSON file per user
pub struct FileStorage {
    paths: ExpensePaths,
    write_locks: Mutex<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl FileStorage {
    /// Create a file storage rooted at `paths`, creating directories as needed
    pub fn new(paths: ExpensePaths) -> ExpenseResult<Self> {
        paths.ensure_directories()?;
        Ok(Self {
            paths,
            write_locks: Mutex::new(HashMap::new()),
        })
    }

    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    fn lock_for(&self, user: &UserId) -> ExpenseResult<Arc<Mutex<()>>> {
        let mut locks = self.write_locks.lock().map_err(|e| {
            ExpenseError::Persistence(format!("Failed to acquire write lock table: {}", e))
        })?;
        Ok(locks.entry(user.clone()).or_default().clone())
    }

    fn with_write_lock<F>(&self, user: &UserId, write: F) -> ExpenseResult<()>
    where
        F: FnOnce() -> ExpenseResult<()>,
    {
        let lock = self.lock_for(user)?;
        let _guard = lock.lock().map_err(|e| {
            ExpenseError::Persistence(format!("Failed to acquire write lock for {}: {}", user, e))
        })?;

        write().map_err(|e| {
            warn!(user = %user, error = %e, "save failed");
            e
        })
    }
}

impl PersistenceAdapter for FileStorage {
    fn load_ledger(&self, user: &UserId) -> ExpenseResult<Ledger> {
        read_ledger(&self.paths.expenses_file(user))
    }

    fn load_budgets(&self, user: &UserId) -> ExpenseResult<BudgetStore> {
        read_budgets(&self.paths.budgets_file(user))
    }

    fn save_ledger(&self, user: &UserId, ledger: &Ledger) -> ExpenseResult<()> {
        let path = self.paths.expenses_file(user);
        self.with_write_lock(user, || write_ledger(&path, ledger))
    }

    fn save_budgets(&self, user: &UserId, budgets: &BudgetStore) -> ExpenseResult<()> {
        let path = self.paths.budgets_file(user);
        self.with_write_lock(user, || write_budgets(&path, budgets))
    }
}
