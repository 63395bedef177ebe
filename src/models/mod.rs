//! Core data models for the expense ledger
//!
//! Value types (money, categories, months, ids, user identity) and the two
//! per-user aggregates: the [`Ledger`] of expense records and the
//! [`BudgetStore`] of monthly budgets.

pub mod budget;
pub mod category;
pub mod expense;
pub mod identity;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod month;

pub use budget::{BudgetStore, DEFAULT_MONTHLY_BUDGET};
pub use category::{ExpenseCategory, UnknownCategory};
pub use expense::{parse_category, parse_date, ExpenseDraft, ExpenseRecord, ExpenseUpdate};
pub use identity::UserId;
pub use ids::ExpenseId;
pub use ledger::{sort_most_recent_first, ExpenseSelector, Ledger};
pub use money::{Money, MoneyParseError};
pub use month::{MonthKey, MonthParseError};
