//! CSV export
//!
//! Writes a month's records with the columns `Date,Category,Amount,Note`.
//! Unlike the ledger file there is no `Id` column: exports are meant for
//! people, not for re-import.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseRecord, Ledger, MonthKey};

pub const EXPORT_HEADER: [&str; 4] = ["Date", "Category", "Amount", "Note"];

/// Write `records` in the order given
pub fn write_month_csv<W: Write>(writer: W, records: &[ExpenseRecord]) -> ExpenseResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer.write_record(EXPORT_HEADER)?;
    for record in records {
        csv_writer.write_record([
            record.date.format("%Y-%m-%d").to_string(),
            record.category.to_string(),
            record.amount.to_string(),
            record.note.clone(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Io(format!("Failed to flush export: {}", e)))?;
    Ok(())
}

/// Export one month of a ledger, most recent first; returns the row count
pub fn export_month_csv<W: Write>(
    writer: W,
    ledger: &Ledger,
    month: MonthKey,
) -> ExpenseResult<usize> {
    let mut records = ledger.filter_by_month(month);
    crate::models::sort_most_recent_first(&mut records);
    write_month_csv(writer, &records)?;
    Ok(records.len())
}
