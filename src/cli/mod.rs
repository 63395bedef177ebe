//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the session layer.

pub mod budget;
pub mod expense;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use report::{handle_export_command, handle_report_command};

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_date, Money, MonthKey};
use crate::services::UserSession;

/// Pick the month a command works on
///
/// An explicit argument wins. Otherwise the most recent month with records,
/// and for a user with no records the current month.
pub fn resolve_month(session: &UserSession<'_>, month: Option<&str>) -> ExpenseResult<MonthKey> {
    match month {
        Some(raw) => raw
            .parse::<MonthKey>()
            .map_err(|e| ExpenseError::InvalidRecord(e.to_string())),
        None => Ok(session
            .available_months()
            .first()
            .copied()
            .unwrap_or_else(MonthKey::current)),
    }
}

pub(crate) fn parse_amount(raw: &str) -> ExpenseResult<Money> {
    Money::parse(raw).map_err(|e| ExpenseError::InvalidRecord(e.to_string()))
}

pub(crate) fn parse_date_arg(raw: &str) -> ExpenseResult<NaiveDate> {
    parse_date(raw).map_err(|_| {
        ExpenseError::InvalidRecord(format!("Invalid date '{}' (expected YYYY-MM-DD)", raw))
    })
}
