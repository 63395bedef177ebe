//! Export module for the expense ledger
//!
//! CSV downloads of a month's records, readable by any spreadsheet.

pub mod csv;

pub use csv::{export_month_csv, write_month_csv, EXPORT_HEADER};
