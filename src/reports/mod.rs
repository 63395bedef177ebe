//! Reports module
//!
//! Spending aggregates, budget evaluation, and the combined monthly report
//! handed to the presentation layer.

pub mod aggregate;
pub mod budget_status;
pub mod monthly;

pub use aggregate::{
    category_totals, daily_totals, overspend_days, top_categories, total_spent, CategoryTotal,
};
pub use budget_status::{BudgetEvaluation, BudgetEvaluator, BudgetStatus, BudgetThresholds};
pub use monthly::MonthlyReport;
