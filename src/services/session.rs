//! User session
//!
//! Maps a logged-in identity to its ledger and budgets and is the only place
//! mutations happen. Each mutation is applied to a copy, the copy is saved,
//! and only a successful save replaces the in-memory state. A failed save
//! leaves the session exactly as it was before the call.

use tracing::{info, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{
    BudgetStore, ExpenseDraft, ExpenseId, ExpenseRecord, ExpenseSelector, ExpenseUpdate, Ledger,
    Money, MonthKey, UserId,
};
use crate::reports::{BudgetThresholds, MonthlyReport};
use crate::storage::PersistenceAdapter;

/// One user's ledger and budgets, bound to a storage backend
pub struct UserSession<'a> {
    storage: &'a dyn PersistenceAdapter,
    user: UserId,
    ledger: Ledger,
    budgets: BudgetStore,
    thresholds: BudgetThresholds,
}

impl<'a> UserSession<'a> {
    /// Log in with a raw email or phone number and load that user's data
    pub fn login(
        storage: &'a dyn PersistenceAdapter,
        raw_identifier: &str,
        thresholds: BudgetThresholds,
    ) -> ExpenseResult<Self> {
        let user = UserId::derive(raw_identifier);
        if user.is_empty() {
            return Err(ExpenseError::Config(
                "A login identifier (email or phone) is required".into(),
            ));
        }
        Self::open(storage, user, thresholds)
    }

    /// Open a session for an already-derived user id
    pub fn open(
        storage: &'a dyn PersistenceAdapter,
        user: UserId,
        thresholds: BudgetThresholds,
    ) -> ExpenseResult<Self> {
        let (ledger, budgets) = storage.load(&user)?;
        info!(user = %user, records = ledger.len(), "session opened");
        Ok(Self {
            storage,
            user,
            ledger,
            budgets,
            thresholds,
        })
    }

    pub fn user(&self) -> &UserId {
        &self.user
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn budgets(&self) -> &BudgetStore {
        &self.budgets
    }

    pub fn thresholds(&self) -> &BudgetThresholds {
        &self.thresholds
    }

    /// Validate and record a new expense
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> ExpenseResult<ExpenseRecord> {
        let record = draft.validate()?;
        let mut ledger = self.ledger.clone();
        ledger.add(record.clone())?;
        self.commit_ledger(ledger)?;

        info!(user = %self.user, id = %record.id, amount = %record.amount, "expense added");
        Ok(record)
    }

    /// Change fields of one expense
    pub fn update_expense(
        &mut self,
        id: ExpenseId,
        update: &ExpenseUpdate,
    ) -> ExpenseResult<ExpenseRecord> {
        let mut ledger = self.ledger.clone();
        let updated = ledger.update(id, update)?;
        self.commit_ledger(ledger)?;

        info!(user = %self.user, id = %id, "expense updated");
        Ok(updated)
    }

    /// Remove one expense
    pub fn delete_expense(&mut self, id: ExpenseId) -> ExpenseResult<ExpenseRecord> {
        let mut ledger = self.ledger.clone();
        let removed = ledger.delete(id)?;
        self.commit_ledger(ledger)?;

        info!(user = %self.user, id = %id, "expense deleted");
        Ok(removed)
    }

    /// Update every expense whose values match the selector
    pub fn update_matching(
        &mut self,
        selector: &ExpenseSelector,
        update: &ExpenseUpdate,
    ) -> ExpenseResult<usize> {
        let mut ledger = self.ledger.clone();
        let changed = ledger.update_matching(selector, update)?;
        if changed > 0 {
            self.commit_ledger(ledger)?;
            info!(user = %self.user, changed, "matching expenses updated");
        }
        Ok(changed)
    }

    /// Delete every expense whose values match the selector
    pub fn delete_matching(&mut self, selector: &ExpenseSelector) -> ExpenseResult<usize> {
        let mut ledger = self.ledger.clone();
        let removed = ledger.delete_matching(selector)?;
        if removed > 0 {
            self.commit_ledger(ledger)?;
            info!(user = %self.user, removed, "matching expenses deleted");
        }
        Ok(removed)
    }

    /// Set the budget for a month, returning the previous explicit value
    pub fn set_budget(&mut self, month: MonthKey, amount: Money) -> ExpenseResult<Option<Money>> {
        let mut budgets = self.budgets.clone();
        let previous = budgets.set(month, amount)?;

        if let Err(e) = self.storage.save_budgets(&self.user, &budgets) {
            warn!(user = %self.user, month = %month, error = %e, "budget not saved");
            return Err(e);
        }
        self.budgets = budgets;

        info!(user = %self.user, month = %month, amount = %amount, "budget set");
        Ok(previous)
    }

    /// The budget in force for a month (the configured default when unset)
    pub fn budget_for(&self, month: MonthKey) -> Money {
        self.budgets
            .get_or_default(month, self.thresholds.default_budget)
    }

    /// Months with at least one record, most recent first
    pub fn available_months(&self) -> Vec<MonthKey> {
        self.ledger.available_months()
    }

    /// The month's records, most recent first
    pub fn month_records(&self, month: MonthKey) -> Vec<ExpenseRecord> {
        let mut records = self.ledger.filter_by_month(month);
        crate::models::sort_most_recent_first(&mut records);
        records
    }

    pub fn month_report(&self, month: MonthKey) -> MonthlyReport {
        MonthlyReport::generate(&self.ledger, &self.budgets, month, &self.thresholds)
    }

    /// Discard in-memory state and load again from storage
    ///
    /// Saves write the whole ledger, so another session's changes are lost
    /// unless this session reloads before its next mutation.
    pub fn reload(&mut self) -> ExpenseResult<()> {
        let (ledger, budgets) = self.storage.load(&self.user)?;
        self.ledger = ledger;
        self.budgets = budgets;
        Ok(())
    }

    fn commit_ledger(&mut self, ledger: Ledger) -> ExpenseResult<()> {
        if let Err(e) = self.storage.save_ledger(&self.user, &ledger) {
            warn!(user = %self.user, error = %e, "ledger not saved, change discarded");
            return Err(e);
        }
        self.ledger = ledger;
        Ok(())
    }
}
