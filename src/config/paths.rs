//! Path management for the expense ledger
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_LEDGER_DATA_DIR` environment variable (if set)
//! 2. The platform data directory from `directories::ProjectDirs`
//!    (e.g. `~/.local/share/expense-ledger` on Linux)
//!
//! Each user's data lives in two files under `user_data/`, named after the
//! derived [`UserId`]: `expenses_<id>.csv` and `budgets_<id>.json`.

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ExpenseError;
use crate::models::UserId;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_LEDGER_DATA_DIR";

/// Manages all paths used by the expense ledger
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Resolve the base directory from the environment or the platform
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "expense-ledger")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| {
                    ExpenseError::Config("Could not determine a data directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding every user's ledger and budget files
    pub fn user_data_dir(&self) -> PathBuf {
        self.base_dir.join("user_data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ledger file for one user
    pub fn expenses_file(&self, user: &UserId) -> PathBuf {
        self.user_data_dir()
            .join(format!("expenses_{}.csv", user.as_str()))
    }

    /// Budget file for one user
    pub fn budgets_file(&self, user: &UserId) -> PathBuf {
        self.user_data_dir()
            .join(format!("budgets_{}.json", user.as_str()))
    }

    /// Ensure the base and user data directories exist
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.user_data_dir()).map_err(|e| {
            ExpenseError::Io(format!("Failed to create user data directory: {}", e))
        })?;

        Ok(())
    }
}
