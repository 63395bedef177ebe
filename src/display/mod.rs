//! Display formatting for terminal output
//!
//! Plain-text renderings of records, months, and monthly reports. Nothing
//! here touches storage; callers pass in already-computed data.

pub mod expense;
pub mod report;

pub use expense::{format_expense_details, format_expense_table, format_month_list};
pub use report::{format_bar, format_monthly_report, format_percentage, greeting_for_hour};
