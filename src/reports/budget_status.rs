//! Budget evaluation
//!
//! Classifies a month's spending against its budget as within budget, near
//! the limit, or over budget.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Money, DEFAULT_MONTHLY_BUDGET};

/// Tunable limits used by evaluation and reporting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetThresholds {
    /// Used percentage above which a month is near the limit
    pub near_limit_pct: f64,
    /// Daily total above which a day is an overspend day
    pub daily_overspend_threshold: Money,
    /// Budget for months without an explicit one
    pub default_budget: Money,
    /// Number of ranked categories in a report
    pub top_category_count: usize,
}

impl Default for BudgetThresholds {
    fn default() -> Self {
        Self {
            near_limit_pct: 90.0,
            daily_overspend_threshold: Money::from_units(500),
            default_budget: DEFAULT_MONTHLY_BUDGET,
            top_category_count: 3,
        }
    }
}

/// Where spending stands relative to the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    Within,
    NearLimit,
    Over,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Within => write!(f, "Within budget"),
            Self::NearLimit => write!(f, "Near limit"),
            Self::Over => write!(f, "Over budget"),
        }
    }
}

/// Result of evaluating spending against a budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetEvaluation {
    pub budget: Money,
    pub spent: Money,
    /// `budget - spent`; negative when over budget
    pub remaining: Money,
    /// Spent as a percentage of the budget; 0 when the budget is 0
    pub used_pct: f64,
    pub status: BudgetStatus,
}

impl BudgetEvaluation {
    /// Progress bar value: whole percent used, clamped to 0..=100
    pub fn progress(&self) -> u8 {
        self.used_pct.floor().clamp(0.0, 100.0) as u8
    }

    /// How far over budget, zero when not over
    pub fn overspent_by(&self) -> Money {
        if self.remaining.is_negative() {
            -self.remaining
        } else {
            Money::zero()
        }
    }
}

/// Evaluates spending against a budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetEvaluator {
    near_limit_pct: f64,
}

impl Default for BudgetEvaluator {
    fn default() -> Self {
        Self::new(BudgetThresholds::default().near_limit_pct)
    }
}

impl BudgetEvaluator {
    pub fn new(near_limit_pct: f64) -> Self {
        Self { near_limit_pct }
    }

    pub fn from_thresholds(thresholds: &BudgetThresholds) -> Self {
        Self::new(thresholds.near_limit_pct)
    }

    /// Evaluate `spent` against `budget`
    ///
    /// A zero budget reports 0% used even when something was spent; the
    /// status still comes out as `Over` because `remaining` is negative.
    pub fn evaluate(&self, spent: Money, budget: Money) -> BudgetEvaluation {
        let remaining = budget - spent;
        let used_pct = if budget.is_positive() {
            spent.cents() as f64 / budget.cents() as f64 * 100.0
        } else {
            0.0
        };

        let status = if remaining.is_negative() {
            BudgetStatus::Over
        } else if used_pct > self.near_limit_pct {
            BudgetStatus::NearLimit
        } else {
            BudgetStatus::Within
        };

        BudgetEvaluation {
            budget,
            spent,
            remaining,
            used_pct,
            status,
        }
    }
}
