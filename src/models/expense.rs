//! Expense record model
//!
//! An [`ExpenseRecord`] is one dated, categorized, non-negative expense.
//! Records enter a ledger only through [`ExpenseDraft::validate`], which is
//! where negative amounts and unknown categories are rejected.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::ExpenseId;
use super::money::Money;
use super::month::MonthKey;
use crate::error::{ExpenseError, ExpenseResult};

/// A single expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Surrogate identifier, fixed at creation
    pub id: ExpenseId,

    pub date: NaiveDate,

    pub category: ExpenseCategory,

    /// Always >= 0
    pub amount: Money,

    /// Free text, may be empty
    #[serde(default)]
    pub note: String,
}

impl ExpenseRecord {
    /// Month bucket this record falls in
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    /// Check the record invariants
    pub fn validate(&self) -> ExpenseResult<()> {
        if self.amount.is_negative() {
            return Err(ExpenseError::InvalidRecord(format!(
                "amount cannot be negative (got {})",
                self.amount
            )));
        }
        Ok(())
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.category, self.amount)?;
        if !self.note.is_empty() {
            write!(f, " ({})", self.note)?;
        }
        Ok(())
    }
}

/// An expense as submitted by a caller, not yet validated
#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    pub date: NaiveDate,
    pub category: String,
    pub amount: Money,
    pub note: String,
}

impl ExpenseDraft {
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        amount: Money,
        note: impl Into<String>,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
            note: note.into(),
        }
    }

    /// Validate into a record with a freshly minted id
    pub fn validate(self) -> ExpenseResult<ExpenseRecord> {
        let category = parse_category(&self.category)?;
        let record = ExpenseRecord {
            id: ExpenseId::new(),
            date: self.date,
            category,
            amount: self.amount,
            note: self.note.trim().to_string(),
        };
        record.validate()?;
        Ok(record)
    }
}

/// Replacement values for an existing record; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub date: Option<NaiveDate>,
    pub category: Option<ExpenseCategory>,
    pub amount: Option<Money>,
    pub note: Option<String>,
}

impl ExpenseUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn category(mut self, category: ExpenseCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.category.is_none() && self.amount.is_none() && self.note.is_none()
    }

    /// Reject updates that would break the record invariants
    pub fn validate(&self) -> ExpenseResult<()> {
        if let Some(amount) = self.amount {
            if amount.is_negative() {
                return Err(ExpenseError::InvalidRecord(format!(
                    "amount cannot be negative (got {})",
                    amount
                )));
            }
        }
        Ok(())
    }

    /// Apply to a record in place; the id never changes
    pub fn apply_to(&self, record: &mut ExpenseRecord) {
        if let Some(date) = self.date {
            record.date = date;
        }
        if let Some(category) = self.category {
            record.category = category;
        }
        if let Some(amount) = self.amount {
            record.amount = amount;
        }
        if let Some(note) = &self.note {
            record.note = note.trim().to_string();
        }
    }
}

/// Parse a category name, reporting unknown names as an invalid record
pub fn parse_category(name: &str) -> ExpenseResult<ExpenseCategory> {
    name.parse::<ExpenseCategory>()
        .map_err(|e| ExpenseError::InvalidRecord(e.to_string()))
}

/// Parse a date into its canonical calendar-date form
///
/// Accepts `YYYY-MM-DD` and timestamp forms (`YYYY-MM-DD HH:MM:SS`,
/// `YYYY-MM-DDTHH:MM:SS`); any time component is dropped.
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
}
