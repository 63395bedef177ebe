//! Expense display formatting
//!
//! Tables of expense records and month listings.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::models::{ExpenseRecord, MonthKey};

const NOTE_WIDTH: usize = 32;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Note")]
    note: String,
}

/// Format records as a table, in the order given
pub fn format_expense_table(records: &[ExpenseRecord], currency_symbol: &str) -> String {
    if records.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = records.iter().map(|r| ExpenseRow {
        id: r.id.short(),
        date: r.date.format("%Y-%m-%d").to_string(),
        category: r.category.to_string(),
        amount: r.amount.format_with_symbol(currency_symbol),
        note: truncate(&r.note, NOTE_WIDTH),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format a single record for display
pub fn format_expense_details(record: &ExpenseRecord, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:  {}\n", record.id));
    output.push_str(&format!("Date:     {}\n", record.date.format("%b %d, %Y")));
    output.push_str(&format!("Category: {}\n", record.category));
    output.push_str(&format!(
        "Amount:   {}\n",
        record.amount.format_with_symbol(currency_symbol)
    ));
    if !record.note.is_empty() {
        output.push_str(&format!("Note:     {}\n", record.note));
    }

    output
}

/// Format a month listing, one label per line
pub fn format_month_list(months: &[MonthKey]) -> String {
    if months.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    months.iter().map(|m| format!("{}\n", m)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, Money};
    use chrono::NaiveDate;

    fn record(note: &str) -> ExpenseRecord {
        ExpenseDraft::new(
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            "Food",
            Money::from_cents(4550),
            note,
        )
        .validate()
        .unwrap()
    }

    #[test]
    fn test_expense_table() {
        let r = record("dinner");
        let table = format_expense_table(std::slice::from_ref(&r), "₹");

        assert!(table.contains("Category"));
        assert!(table.contains(&r.id.short()));
        assert!(table.contains("2025-01-15"));
        assert!(table.contains("₹45.50"));
        assert!(table.contains("dinner"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[], "₹"), "No expenses found.\n");
    }

    #[test]
    fn test_details_skip_empty_note() {
        let details = format_expense_details(&record(""), "$");
        assert!(details.contains("Jan 15, 2025"));
        assert!(details.contains("$45.50"));
        assert!(!details.contains("Note:"));
    }

    #[test]
    fn test_month_list() {
        let months = [MonthKey::new(2025, 1).unwrap(), MonthKey::new(2024, 12).unwrap()];
        assert_eq!(format_month_list(&months), "January 2025\nDecember 2024\n");
        assert_eq!(format_month_list(&[]), "No expenses recorded yet.\n");
    }
}
