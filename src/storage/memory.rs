//! In-memory persistence
//!
//! Keeps each user's data in process memory. Useful as a scratch backend and
//! in tests, where `fail_saves` simulates a storage outage.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use super::PersistenceAdapter;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{BudgetStore, Ledger, UserId};

/// Persistence adapter holding data in memory
#[derive(Default)]
pub struct MemoryStorage {
    ledgers: RwLock<HashMap<UserId, Ledger>>,
    budgets: RwLock<HashMap<UserId, BudgetStore>>,
    fail_saves: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent save fail (or succeed again)
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> ExpenseResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(ExpenseError::Persistence("storage unavailable".into()));
        }
        Ok(())
    }
}

impl PersistenceAdapter for MemoryStorage {
    fn load_ledger(&self, user: &UserId) -> ExpenseResult<Ledger> {
        let ledgers = self.ledgers.read().map_err(|e| {
            ExpenseError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(ledgers.get(user).cloned().unwrap_or_default())
    }

    fn load_budgets(&self, user: &UserId) -> ExpenseResult<BudgetStore> {
        let budgets = self.budgets.read().map_err(|e| {
            ExpenseError::Persistence(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(budgets.get(user).cloned().unwrap_or_default())
    }

    fn save_ledger(&self, user: &UserId, ledger: &Ledger) -> ExpenseResult<()> {
        self.check_writable()?;
        let mut ledgers = self.ledgers.write().map_err(|e| {
            ExpenseError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;
        ledgers.insert(user.clone(), ledger.clone());
        Ok(())
    }

    fn save_budgets(&self, user: &UserId, budgets: &BudgetStore) -> ExpenseResult<()> {
        self.check_writable()?;
        let mut stored = self.budgets.write().map_err(|e| {
            ExpenseError::Persistence(format!("Failed to acquire write lock: {}", e))
        })?;
        stored.insert(user.clone(), budgets.clone());
        Ok(())
    }
}
