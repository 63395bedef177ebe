//! User settings for the expense ledger
//!
//! Holds the budget thresholds (near-limit percentage, daily overspend
//! threshold, default monthly budget) and display preferences. Every field is
//! defaulted so older or partial config files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::Money;
use crate::reports::BudgetThresholds;
use crate::storage::file_io::write_json_atomic;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Percentage of the budget above which a month is "near the limit"
    #[serde(default = "default_near_limit_pct")]
    pub near_limit_pct: f64,

    /// Daily total above which a day counts as an overspend day
    #[serde(default = "default_daily_overspend_threshold", with = "decimal_amount")]
    pub daily_overspend_threshold: Money,

    /// Budget used for months without an explicit budget
    #[serde(default = "default_budget", with = "decimal_amount")]
    pub default_budget: Money,

    /// How many categories the monthly report ranks
    #[serde(default = "default_top_category_count")]
    pub top_category_count: usize,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

/// Amounts in the settings file are decimal currency units, like the budget
/// file, and never negative
mod decimal_amount {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::models::Money;

    pub fn serialize<S: Serializer>(amount: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(amount.as_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() || value < 0.0 {
            return Err(de::Error::custom(format!(
                "amount must be a non-negative number, got {}",
                value
            )));
        }
        Ok(Money::from_decimal(value))
    }
}

fn default_schema_version() -> u32 {
    1
}

fn default_near_limit_pct() -> f64 {
    BudgetThresholds::default().near_limit_pct
}

fn default_daily_overspend_threshold() -> Money {
    BudgetThresholds::default().daily_overspend_threshold
}

fn default_budget() -> Money {
    BudgetThresholds::default().default_budget
}

fn default_top_category_count() -> usize {
    BudgetThresholds::default().top_category_count
}

fn default_currency() -> String {
    "₹".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            near_limit_pct: default_near_limit_pct(),
            daily_overspend_threshold: default_daily_overspend_threshold(),
            default_budget: default_budget(),
            top_category_count: default_top_category_count(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// The thresholds consumed by the report layer
    pub fn thresholds(&self) -> BudgetThresholds {
        BudgetThresholds {
            near_limit_pct: self.near_limit_pct,
            daily_overspend_threshold: self.daily_overspend_threshold,
            default_budget: self.default_budget,
            top_category_count: self.top_category_count,
        }
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
