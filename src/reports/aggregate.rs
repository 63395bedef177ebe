//! Spending aggregates over a slice of expense records
//!
//! Everything here is a pure function of its input; callers filter the
//! ledger to the month they care about first.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::{ExpenseCategory, ExpenseRecord, Money};

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: Money,
    /// Number of records in this category
    pub count: usize,
    /// Share of all spending in the input, 0-100
    pub percentage: f64,
}

/// Sum of all amounts; zero for no records
pub fn total_spent(records: &[ExpenseRecord]) -> Money {
    records.iter().map(|r| r.amount).sum()
}

/// Per-category totals, largest first
///
/// Categories with equal totals stay in the order they first appear in
/// `records`.
pub fn category_totals(records: &[ExpenseRecord]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for record in records {
        match totals.iter_mut().find(|t| t.category == record.category) {
            Some(entry) => {
                entry.total += record.amount;
                entry.count += 1;
            }
            None => totals.push(CategoryTotal {
                category: record.category,
                total: record.amount,
                count: 1,
                percentage: 0.0,
            }),
        }
    }

    let grand_total = total_spent(records);
    for entry in &mut totals {
        entry.percentage = if grand_total.is_zero() {
            0.0
        } else {
            entry.total.cents() as f64 / grand_total.cents() as f64 * 100.0
        };
    }

    // sort_by is stable, which keeps first-seen order for ties
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}

/// The `n` categories with the highest totals
pub fn top_categories(records: &[ExpenseRecord], n: usize) -> Vec<CategoryTotal> {
    let mut totals = category_totals(records);
    totals.truncate(n);
    totals
}

/// Sum of amounts per calendar date
pub fn daily_totals(records: &[ExpenseRecord]) -> BTreeMap<NaiveDate, Money> {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(record.date).or_insert_with(Money::zero) += record.amount;
    }
    totals
}

/// Days whose total is strictly greater than `threshold`
pub fn overspend_days(
    daily: &BTreeMap<NaiveDate, Money>,
    threshold: Money,
) -> BTreeMap<NaiveDate, Money> {
    daily
        .iter()
        .filter(|(_, total)| **total > threshold)
        .map(|(date, total)| (*date, *total))
        .collect()
}
