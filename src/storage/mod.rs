//! Storage layer for the expense ledger
//!
//! The core only talks to [`PersistenceAdapter`]: load a user's ledger and
//! budgets, save them back in full. Loading a user with no data yields empty
//! values rather than an error. Two backends ship with the crate:
//! [`FileStorage`] (CSV + JSON files, atomic rewrites) and [`MemoryStorage`].

pub mod budgets;
pub mod expenses;
pub mod file_io;
pub mod files;
pub mod memory;

pub use file_io::{read_json, write_json_atomic};
pub use files::FileStorage;
pub use memory::MemoryStorage;

use crate::error::ExpenseResult;
use crate::models::{BudgetStore, Ledger, UserId};

/// Loads and saves one user's ledger and budgets
///
/// Saves replace the full stored state for that user. Implementations must
/// not leave previously committed state corrupted when a save fails.
pub trait PersistenceAdapter {
    /// Load the ledger; empty if the user has no stored data
    fn load_ledger(&self, user: &UserId) -> ExpenseResult<Ledger>;

    /// Load the budgets; empty if the user has no stored data
    fn load_budgets(&self, user: &UserId) -> ExpenseResult<BudgetStore>;

    fn save_ledger(&self, user: &UserId, ledger: &Ledger) -> ExpenseResult<()>;

    fn save_budgets(&self, user: &UserId, budgets: &BudgetStore) -> ExpenseResult<()>;

    /// Load both halves of a user's data
    fn load(&self, user: &UserId) -> ExpenseResult<(Ledger, BudgetStore)> {
        Ok((self.load_ledger(user)?, self.load_budgets(user)?))
    }
}
