//! Ledger CSV format
//!
//! One row per record with the columns `Date,Category,Amount,Note,Id`.
//! Dates are ISO calendar dates and amounts carry two decimals. The `Id`
//! column is optional on read: files written before records had ids get a
//! fresh id per row, which is persisted on the next save.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::file_io::write_atomic;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_date, ExpenseCategory, ExpenseId, ExpenseRecord, Ledger, Money};

pub(crate) const HEADER: [&str; 5] = ["Date", "Category", "Amount", "Note", "Id"];

/// A ledger row as it appears in the file
#[derive(Debug, Serialize, Deserialize)]
struct ExpenseRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Note", default)]
    note: String,
    #[serde(rename = "Id", default)]
    id: Option<String>,
}

impl ExpenseRow {
    fn from_record(record: &ExpenseRecord) -> Self {
        Self {
            date: record.date.format("%Y-%m-%d").to_string(),
            category: record.category.to_string(),
            amount: record.amount.to_string(),
            note: record.note.clone(),
            id: Some(record.id.to_string()),
        }
    }

    fn into_record(self, line: usize) -> ExpenseResult<ExpenseRecord> {
        let malformed = |what: &str, value: &str| {
            ExpenseError::Persistence(format!("Malformed {} '{}' on row {}", what, value, line))
        };

        let date = parse_date(&self.date).map_err(|_| malformed("date", &self.date))?;
        let category: ExpenseCategory = self
            .category
            .parse()
            .map_err(|_| malformed("category", &self.category))?;
        let amount = Money::parse(&self.amount).map_err(|_| malformed("amount", &self.amount))?;
        if amount.is_negative() {
            return Err(malformed("amount", &self.amount));
        }

        let id = match self.id.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw.parse().map_err(|_| malformed("id", raw))?,
            _ => ExpenseId::new(),
        };

        Ok(ExpenseRecord {
            id,
            date,
            category,
            amount,
            note: self.note,
        })
    }
}

/// Parse a ledger from CSV text
pub fn read_ledger_from<R: Read>(reader: R) -> ExpenseResult<Ledger> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<ExpenseRow>().enumerate() {
        // Row 1 is the header
        let line = index + 2;
        let row = row.map_err(|e| {
            ExpenseError::Persistence(format!("Failed to read row {}: {}", line, e))
        })?;
        records.push(row.into_record(line)?);
    }

    Ledger::from_records(records)
}

/// Write a ledger as CSV text, header included even when empty
pub fn write_ledger_to<W: Write>(writer: W, ledger: &Ledger) -> ExpenseResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;
    for record in ledger.iter() {
        csv_writer.serialize(ExpenseRow::from_record(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Load a ledger file; a missing file is an empty ledger
pub fn read_ledger(path: &Path) -> ExpenseResult<Ledger> {
    if !path.exists() {
        debug!(path = %path.display(), "no ledger file, starting empty");
        return Ok(Ledger::new());
    }

    let file = File::open(path).map_err(|e| {
        ExpenseError::Persistence(format!("Failed to open {}: {}", path.display(), e))
    })?;
    let ledger = read_ledger_from(BufReader::new(file)).map_err(|e| match e {
        ExpenseError::Persistence(msg) => {
            ExpenseError::Persistence(format!("{}: {}", path.display(), msg))
        }
        other => ExpenseError::Persistence(format!("{}: {}", path.display(), other)),
    })?;

    debug!(path = %path.display(), records = ledger.len(), "loaded ledger");
    Ok(ledger)
}

/// Replace a ledger file atomically
pub fn write_ledger(path: &Path, ledger: &Ledger) -> ExpenseResult<()> {
    write_atomic(path, |writer| {
        write_ledger_to(writer, ledger).map_err(|e| {
            ExpenseError::Persistence(format!("Failed to write {}: {}", path.display(), e))
        })
    })?;
    debug!(path = %path.display(), records = ledger.len(), "saved ledger");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseDraft;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Ledger {
        let mut ledger = Ledger::new();
        for (d, category, cents, note) in [
            (date(2025, 1, 15), "Food", 12_050, "Lunch, with friends"),
            (date(2025, 1, 16), "Travel", 99, ""),
            (date(2024, 12, 2), "Bills", 150_000, "rent \"Dec\""),
        ] {
            ledger
                .add(ExpenseDraft::new(d, category, Money::from_cents(cents), note).validate().unwrap())
                .unwrap();
        }
        ledger
    }

    #[test]
    fn test_round_trip_preserves_records() {
        let ledger = sample();
        let mut buf = Vec::new();
        write_ledger_to(&mut buf, &ledger).unwrap();

        let loaded = read_ledger_from(buf.as_slice()).unwrap();
        assert_eq!(loaded, ledger);
    }

    #[test]
    fn test_written_format() {
        let mut ledger = Ledger::new();
        ledger
            .add(
                ExpenseDraft::new(date(2025, 1, 15), "Food", Money::from_cents(2500), "tea")
                    .validate()
                    .unwrap(),
            )
            .unwrap();
        let mut buf = Vec::new();
        write_ledger_to(&mut buf, &ledger).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "Date,Category,Amount,Note,Id");
        assert!(lines.next().unwrap().starts_with("2025-01-15,Food,25.00,tea,"));
    }

    #[test]
    fn test_reads_legacy_file_without_ids() {
        let legacy = "Date,Category,Amount,Note\n\
                      2025-01-15,Food,250.0,Lunch\n\
                      2025-01-16 00:00:00,Bills,1000,\n";

        let ledger = read_ledger_from(legacy.as_bytes()).unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.records()[0].amount, Money::from_units(250));
        assert_eq!(ledger.records()[1].date, date(2025, 1, 16));
        assert_eq!(ledger.records()[1].note, "");
        assert_ne!(ledger.records()[0].id, ledger.records()[1].id);
    }

    #[test]
    fn test_empty_ledger_writes_header_only() {
        let mut buf = Vec::new();
        write_ledger_to(&mut buf, &Ledger::new()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Date,Category,Amount,Note,Id\n");
    }

    #[test]
    fn test_unknown_category_is_persistence_error() {
        let data = "Date,Category,Amount,Note\n2025-01-15,Groceries,10,\n";
        let err = read_ledger_from(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ExpenseError::Persistence(_)));
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_negative_amount_is_persistence_error() {
        let data = "Date,Category,Amount,Note\n2025-01-15,Food,-10,\n";
        assert!(read_ledger_from(data.as_bytes()).unwrap_err().is_persistence());
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses_x.csv");

        assert!(read_ledger(&path).unwrap().is_empty());

        let ledger = sample();
        write_ledger(&path, &ledger).unwrap();
        assert_eq!(read_ledger(&path).unwrap(), ledger);
    }
}
