//! The fixed set of expense categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of an expense record
///
/// The set is closed; anything else submitted by a caller is rejected before
/// it reaches a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Travel,
    Shopping,
    Bills,
    Entertainment,
    Other,
}

impl ExpenseCategory {
    /// All categories in presentation order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Travel,
            Self::Shopping,
            Self::Bills,
            Self::Entertainment,
            Self::Other,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    /// Case-insensitive match against the category names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(trimmed.to_string()))
    }
}

/// A category name outside the fixed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown category '{}' (expected one of: {})",
            self.0,
            ExpenseCategory::all()
                .iter()
                .map(|c| c.name())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for UnknownCategory {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("food".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Food);
        assert_eq!(
            " ENTERTAINMENT ".parse::<ExpenseCategory>().unwrap(),
            ExpenseCategory::Entertainment
        );
    }

    #[test]
    fn test_unknown_category() {
        let err = "Groceries".parse::<ExpenseCategory>().unwrap_err();
        assert_eq!(err.0, "Groceries");
        assert!(err.to_string().contains("Food, Travel, Shopping"));
    }

    #[test]
    fn test_display_round_trip() {
        for category in ExpenseCategory::all() {
            let parsed: ExpenseCategory = category.to_string().parse().unwrap();
            assert_eq!(parsed, *category);
        }
    }
}
