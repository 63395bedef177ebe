use chrono::NaiveDate;
use tempfile::TempDir;

use expense_ledger::config::{ExpensePaths, Settings};
use expense_ledger::models::{ExpenseDraft, ExpenseSelector, ExpenseUpdate};
use expense_ledger::reports::{top_categories, total_spent};
use expense_ledger::storage::{FileStorage, MemoryStorage};
use expense_ledger::{BudgetStatus, Money, MonthKey, UserSession};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn draft(d: NaiveDate, category: &str, units: i64) -> ExpenseDraft {
    ExpenseDraft::new(d, category, Money::from_units(units), "")
}

#[test]
fn session_survives_restart_on_disk() {
    let dir = TempDir::new().unwrap();
    let paths = ExpensePaths::with_base_dir(dir.path().to_path_buf());
    let settings = Settings::default();
    let jan = MonthKey::new(2025, 1).unwrap();

    {
        let storage = FileStorage::new(paths.clone()).unwrap();
        let mut session =
            UserSession::login(&storage, "a@b.com", settings.thresholds()).unwrap();
        session.add_expense(draft(date(2025, 1, 3), "Bills", 700)).unwrap();
        session.add_expense(draft(date(2025, 1, 9), "Food", 250)).unwrap();
        session.set_budget(jan, Money::from_units(900)).unwrap();
    }

    let storage = FileStorage::new(paths).unwrap();
    let session = UserSession::login(&storage, " a@b.com ", settings.thresholds()).unwrap();

    let report = session.month_report(jan);
    assert_eq!(report.total_spent, Money::from_units(950));
    assert_eq!(report.evaluation.remaining, Money::from_units(-50));
    assert_eq!(report.evaluation.status, BudgetStatus::Over);
    assert_eq!(report.evaluation.progress(), 100);
    assert_eq!(report.overspend_days.len(), 1);
}

#[test]
fn failed_saves_do_not_commit() {
    let storage = MemoryStorage::new();
    let mut session =
        UserSession::login(&storage, "a@b.com", Settings::default().thresholds()).unwrap();
    let first = session.add_expense(draft(date(2025, 1, 3), "Food", 10)).unwrap();

    storage.fail_saves(true);
    assert!(session
        .update_expense(first.id, &ExpenseUpdate::new().amount(Money::from_units(99)))
        .unwrap_err()
        .is_persistence());
    assert_eq!(session.ledger().get(first.id).unwrap().amount, Money::from_units(10));

    storage.fail_saves(false);
    session
        .update_expense(first.id, &ExpenseUpdate::new().amount(Money::from_units(99)))
        .unwrap();
    session.reload().unwrap();
    assert_eq!(session.ledger().get(first.id).unwrap().amount, Money::from_units(99));
}

#[test]
fn month_statistics_match_filtered_records() {
    let storage = MemoryStorage::new();
    let mut session =
        UserSession::login(&storage, "stats@example.com", Settings::default().thresholds())
            .unwrap();

    for (d, category, units) in [
        (date(2025, 1, 1), "Food", 100),
        (date(2025, 1, 1), "Travel", 300),
        (date(2025, 1, 2), "Shopping", 200),
        (date(2025, 1, 31), "Bills", 50),
        (date(2025, 1, 31), "Food", 150),
        (date(2025, 2, 1), "Food", 999),
        (date(2024, 1, 15), "Food", 999),
    ] {
        session.add_expense(draft(d, category, units)).unwrap();
    }

    let jan = MonthKey::new(2025, 1).unwrap();
    let records = session.month_records(jan);
    assert_eq!(total_spent(&records), Money::from_units(800));

    let top = top_categories(&records, 3);
    assert_eq!(top.len(), 3);
    assert!(top.windows(2).all(|w| w[0].total >= w[1].total));
    let top_sum: Money = top.iter().map(|c| c.total).sum();
    assert!(top_sum <= total_spent(&records));
    assert_eq!(top_sum, Money::from_units(750));
}

#[test]
fn strict_selector_refuses_duplicates() {
    let storage = MemoryStorage::new();
    let mut session =
        UserSession::login(&storage, "a@b.com", Settings::default().thresholds()).unwrap();
    let a = session.add_expense(draft(date(2025, 1, 3), "Food", 10)).unwrap();
    session.add_expense(draft(date(2025, 1, 3), "Food", 10)).unwrap();

    let strict = ExpenseSelector::from_record(&a).strict();
    assert!(session.delete_matching(&strict).is_err());
    assert_eq!(session.ledger().len(), 2);

    assert_eq!(session.delete_matching(&ExpenseSelector::from_record(&a)).unwrap(), 2);
    assert!(session.ledger().is_empty());
}

#[test]
fn stale_session_replaces_other_writes_until_reloaded() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(ExpensePaths::with_base_dir(dir.path().to_path_buf())).unwrap();
    let thresholds = Settings::default().thresholds();

    let mut first = UserSession::login(&storage, "a@b.com", thresholds).unwrap();
    let mut second = UserSession::login(&storage, "a@b.com", thresholds).unwrap();

    first.add_expense(draft(date(2025, 1, 3), "Food", 10)).unwrap();
    second.add_expense(draft(date(2025, 1, 4), "Bills", 20)).unwrap();

    let on_disk = UserSession::login(&storage, "a@b.com", thresholds).unwrap();
    assert_eq!(on_disk.ledger().len(), 1);

    first.reload().unwrap();
    first.add_expense(draft(date(2025, 1, 5), "Travel", 30)).unwrap();

    let on_disk = UserSession::login(&storage, "a@b.com", thresholds).unwrap();
    assert_eq!(on_disk.ledger().len(), 2);
}
