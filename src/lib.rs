//! Expense Ledger - personal expense tracking against a monthly budget
//!
//! This library records dated, categorized expenses per user, compares each
//! month's spending with a self-declared budget, and derives the summaries a
//! dashboard shows: top categories, daily totals, and overspend days.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expense records, the ledger, budgets, and value types
//! - `storage`: The persistence adapter and its file and memory backends
//! - `reports`: Aggregates, budget evaluation, and the monthly report
//! - `services`: The user session that commits mutations
//! - `export`: CSV export of a month's records
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `expense` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::config::{ExpensePaths, Settings};
//! use expense_ledger::services::UserSession;
//! use expense_ledger::storage::FileStorage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = FileStorage::new(paths)?;
//! let session = UserSession::login(&storage, "me@example.com", settings.thresholds())?;
//! ```

use std::sync::Once;

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
pub use models::{BudgetStore, ExpenseRecord, Ledger, Money, MonthKey, UserId};
pub use reports::{BudgetEvaluator, BudgetStatus, MonthlyReport};
pub use services::UserSession;
pub use storage::PersistenceAdapter;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber (stderr, `RUST_LOG` aware)
///
/// Safe to call more than once; only the first call has an effect. If the
/// host already installed a global subscriber, that one is left in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("expense_ledger=info"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
