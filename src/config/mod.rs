//! Configuration module for the expense ledger
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence (budget thresholds, currency symbol)

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
