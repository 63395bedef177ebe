//! Monthly Report
//!
//! Everything a dashboard shows for one selected month: the month's records
//! (most recent first), the budget evaluation, ranked categories, daily
//! totals for a trend chart, and overspend days.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::aggregate::{category_totals, daily_totals, overspend_days, total_spent, CategoryTotal};
use super::budget_status::{BudgetEvaluation, BudgetEvaluator, BudgetThresholds};
use crate::models::{sort_most_recent_first, BudgetStore, ExpenseRecord, Ledger, Money, MonthKey};

/// Statistics for one month of one user's ledger
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub month: MonthKey,
    /// Records in the month, most recent first
    pub records: Vec<ExpenseRecord>,
    pub total_spent: Money,
    pub evaluation: BudgetEvaluation,
    /// Every category with spending, largest first (pie chart data)
    pub categories: Vec<CategoryTotal>,
    /// How many of `categories` count as "top"
    pub top_count: usize,
    /// Per-day totals (trend chart data)
    pub daily_totals: BTreeMap<NaiveDate, Money>,
    pub overspend_days: BTreeMap<NaiveDate, Money>,
    pub overspend_threshold: Money,
}

impl MonthlyReport {
    /// Generate the report for `month`
    ///
    /// A month without records yields an empty report with the budget in
    /// force and nothing spent.
    pub fn generate(
        ledger: &Ledger,
        budgets: &BudgetStore,
        month: MonthKey,
        thresholds: &BudgetThresholds,
    ) -> Self {
        let mut records = ledger.filter_by_month(month);
        let spent = total_spent(&records);
        let budget = budgets.get_or_default(month, thresholds.default_budget);
        let evaluation = BudgetEvaluator::from_thresholds(thresholds).evaluate(spent, budget);

        let categories = category_totals(&records);
        let daily = daily_totals(&records);
        let overspend = overspend_days(&daily, thresholds.daily_overspend_threshold);

        sort_most_recent_first(&mut records);

        Self {
            month,
            records,
            total_spent: spent,
            evaluation,
            categories,
            top_count: thresholds.top_category_count,
            daily_totals: daily,
            overspend_days: overspend,
            overspend_threshold: thresholds.daily_overspend_threshold,
        }
    }

    pub fn has_records(&self) -> bool {
        !self.records.is_empty()
    }

    /// The top-ranked categories
    pub fn top_categories(&self) -> &[CategoryTotal] {
        let n = self.top_count.min(self.categories.len());
        &self.categories[..n]
    }
}
