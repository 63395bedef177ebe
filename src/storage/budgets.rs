//! Budget file format
//!
//! A flat JSON object from month label to decimal amount:
//! `{"January 2025": 1500.0, "February 2025": 1200.5}`.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use super::file_io::{read_json, write_json_atomic};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{BudgetStore, Money, MonthKey};

type BudgetFile = BTreeMap<String, f64>;

/// Convert the on-disk mapping into a store
pub fn from_file_map(map: BudgetFile) -> ExpenseResult<BudgetStore> {
    let mut store = BudgetStore::new();
    for (label, amount) in map {
        let month: MonthKey = label.parse().map_err(|_| {
            ExpenseError::Persistence(format!("Malformed month label '{}' in budget file", label))
        })?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(ExpenseError::Persistence(format!(
                "Malformed budget {} for {}",
                amount, label
            )));
        }
        store.set(month, Money::from_decimal(amount))?;
    }
    Ok(store)
}

/// Convert a store into the on-disk mapping
pub fn to_file_map(store: &BudgetStore) -> BudgetFile {
    store
        .iter()
        .map(|(month, amount)| (month.label(), amount.as_decimal()))
        .collect()
}

/// Load a budget file; a missing file is an empty store
pub fn read_budgets(path: &Path) -> ExpenseResult<BudgetStore> {
    let map: BudgetFile = read_json(path)?;
    let store = from_file_map(map)
        .map_err(|e| ExpenseError::Persistence(format!("{}: {}", path.display(), e)))?;
    debug!(path = %path.display(), months = store.len(), "loaded budgets");
    Ok(store)
}

/// Replace a budget file atomically
pub fn write_budgets(path: &Path, store: &BudgetStore) -> ExpenseResult<()> {
    write_json_atomic(path, &to_file_map(store))?;
    debug!(path = %path.display(), months = store.len(), "saved budgets");
    Ok(())
}
