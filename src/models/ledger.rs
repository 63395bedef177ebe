//! Ledger: the expense records owned by one user
//!
//! Storage order is insertion order and carries no meaning; listings re-sort
//! by date. Every record in a ledger satisfies the record invariants (known
//! category, non-negative amount), which `add` and the update paths enforce.
//!
//! Records are addressed by their [`ExpenseId`]. The value-based operations
//! (`update_matching`, `delete_matching`) remain for callers that only hold
//! field values; they act on *every* record whose fields match, unless the
//! selector was made strict.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use super::category::ExpenseCategory;
use super::expense::{ExpenseRecord, ExpenseUpdate};
use super::ids::ExpenseId;
use super::money::Money;
use super::month::MonthKey;
use crate::error::{ExpenseError, ExpenseResult};

/// Ordered collection of one user's expense records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from already-stored records, checking each one
    pub fn from_records(records: Vec<ExpenseRecord>) -> ExpenseResult<Self> {
        for record in &records {
            record.validate()?;
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExpenseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: ExpenseId) -> Option<&ExpenseRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Find a record by a user-typed id reference (full or short form)
    pub fn find_by_ref(&self, reference: &str) -> ExpenseResult<&ExpenseRecord> {
        let mut matches = self.records.iter().filter(|r| r.id.matches_ref(reference));
        match (matches.next(), matches.next()) {
            (Some(record), None) => Ok(record),
            (None, _) => Err(ExpenseError::expense_not_found(reference)),
            (Some(_), Some(_)) => Err(ExpenseError::AmbiguousSelector {
                matched: 2 + matches.count(),
            }),
        }
    }

    /// Append a record
    pub fn add(&mut self, record: ExpenseRecord) -> ExpenseResult<()> {
        record.validate()?;
        if self.get(record.id).is_some() {
            return Err(ExpenseError::InvalidRecord(format!(
                "duplicate expense id {}",
                record.id
            )));
        }
        self.records.push(record);
        Ok(())
    }

    /// All records in the given month, in ledger order
    pub fn filter_by_month(&self, month: MonthKey) -> Vec<ExpenseRecord> {
        self.records
            .iter()
            .filter(|r| month.contains(r.date))
            .cloned()
            .collect()
    }

    /// All records whose month label equals `label` (e.g. "January 2025")
    ///
    /// A label that matches nothing, including one that isn't a valid month
    /// label at all, yields an empty result.
    pub fn filter_by_label(&self, label: &str) -> Vec<ExpenseRecord> {
        let label = label.trim();
        self.records
            .iter()
            .filter(|r| r.month().label() == label)
            .cloned()
            .collect()
    }

    /// All records in display order: most recent first, same-day records in
    /// insertion order
    pub fn sorted_by_date_desc(&self) -> Vec<ExpenseRecord> {
        let mut records = self.records.clone();
        sort_most_recent_first(&mut records);
        records
    }

    /// Distinct months present, most recent first
    pub fn available_months(&self) -> Vec<MonthKey> {
        let months: BTreeSet<MonthKey> = self.records.iter().map(|r| r.month()).collect();
        months.into_iter().rev().collect()
    }

    /// Replace fields of the record with this id
    pub fn update(&mut self, id: ExpenseId, update: &ExpenseUpdate) -> ExpenseResult<ExpenseRecord> {
        update.validate()?;
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        update.apply_to(record);
        Ok(record.clone())
    }

    /// Remove the record with this id
    pub fn delete(&mut self, id: ExpenseId) -> ExpenseResult<ExpenseRecord> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        Ok(self.records.remove(index))
    }

    /// Apply an update to every record matching the selector
    ///
    /// Returns how many records changed. Zero matches is not an error unless
    /// the selector is strict.
    pub fn update_matching(
        &mut self,
        selector: &ExpenseSelector,
        update: &ExpenseUpdate,
    ) -> ExpenseResult<usize> {
        update.validate()?;
        selector.check_count(self.count_matching(selector))?;

        let mut changed = 0;
        for record in self.records.iter_mut().filter(|r| selector.matches(r)) {
            update.apply_to(record);
            changed += 1;
        }
        Ok(changed)
    }

    /// Remove every record matching the selector
    ///
    /// Fully identical rows are all removed together.
    pub fn delete_matching(&mut self, selector: &ExpenseSelector) -> ExpenseResult<usize> {
        selector.check_count(self.count_matching(selector))?;

        let before = self.records.len();
        self.records.retain(|r| !selector.matches(r));
        Ok(before - self.records.len())
    }

    fn count_matching(&self, selector: &ExpenseSelector) -> usize {
        self.records.iter().filter(|r| selector.matches(r)).count()
    }
}

/// Sort records most recent first; records on the same date keep their order
pub fn sort_most_recent_first(records: &mut [ExpenseRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Selects records by full field equality (date, category, amount, note)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseSelector {
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub amount: Money,
    pub note: String,
    require_unique: bool,
}

impl ExpenseSelector {
    pub fn new(
        date: NaiveDate,
        category: ExpenseCategory,
        amount: Money,
        note: impl Into<String>,
    ) -> Self {
        Self {
            date,
            category,
            amount,
            note: note.into(),
            require_unique: false,
        }
    }

    /// Selector for all records with the same values as `record`
    pub fn from_record(record: &ExpenseRecord) -> Self {
        Self::new(record.date, record.category, record.amount, record.note.clone())
    }

    /// Require exactly one match; anything else fails with `AmbiguousSelector`
    pub fn strict(mut self) -> Self {
        self.require_unique = true;
        self
    }

    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        record.date == self.date
            && record.category == self.category
            && record.amount == self.amount
            && record.note == self.note
    }

    fn check_count(&self, matched: usize) -> ExpenseResult<()> {
        if self.require_unique && matched != 1 {
            return Err(ExpenseError::AmbiguousSelector { matched });
        }
        Ok(())
    }
}
