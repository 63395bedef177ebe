//! Monthly budget store
//!
//! Maps a month to the budget ceiling the user declared for it. Months
//! without an explicit entry fall back to a default rather than failing.

use std::collections::BTreeMap;

use super::money::Money;
use super::month::MonthKey;
use crate::error::{ExpenseError, ExpenseResult};

/// Budget used when a month has no explicit entry and no setting overrides it
pub const DEFAULT_MONTHLY_BUDGET: Money = Money::from_units(1000);

/// Per-user mapping of month to budget amount
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetStore {
    budgets: BTreeMap<MonthKey, Money>,
}

impl BudgetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored budget for a month, if one was set
    pub fn explicit(&self, month: MonthKey) -> Option<Money> {
        self.budgets.get(&month).copied()
    }

    /// The stored budget for a month, or `default` on a miss
    pub fn get_or_default(&self, month: MonthKey, default: Money) -> Money {
        self.explicit(month).unwrap_or(default)
    }

    /// The stored budget for a month, or [`DEFAULT_MONTHLY_BUDGET`]
    pub fn get(&self, month: MonthKey) -> Money {
        self.get_or_default(month, DEFAULT_MONTHLY_BUDGET)
    }

    /// Set the budget for a month, replacing any previous value
    pub fn set(&mut self, month: MonthKey, amount: Money) -> ExpenseResult<Option<Money>> {
        if amount.is_negative() {
            return Err(ExpenseError::InvalidRecord(format!(
                "budget for {} cannot be negative (got {})",
                month, amount
            )));
        }
        Ok(self.budgets.insert(month, amount))
    }

    /// Entries in chronological order
    pub fn iter(&self) -> impl Iterator<Item = (MonthKey, Money)> + '_ {
        self.budgets.iter().map(|(month, amount)| (*month, *amount))
    }

    pub fn len(&self) -> usize {
        self.budgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }
}

impl FromIterator<(MonthKey, Money)> for BudgetStore {
    fn from_iter<I: IntoIterator<Item = (MonthKey, Money)>>(iter: I) -> Self {
        Self {
            budgets: iter.into_iter().collect(),
        }
    }
}
