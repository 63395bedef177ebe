use chrono::NaiveDate;
use tempfile::TempDir;

use expense_ledger::config::ExpensePaths;
use expense_ledger::models::{ExpenseDraft, MonthKey};
use expense_ledger::storage::{FileStorage, PersistenceAdapter};
use expense_ledger::{BudgetStore, Ledger, Money, UserId};

fn storage() -> (TempDir, FileStorage) {
    let temp_dir = TempDir::new().unwrap();
    let storage =
        FileStorage::new(ExpensePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
    (temp_dir, storage)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn ledger_round_trip_keeps_every_record() {
    let (_dir, storage) = storage();
    let user = UserId::derive("+919876543210");

    let mut ledger = Ledger::new();
    for (d, category, cents, note) in [
        (date(2025, 1, 15), "Food", 12_345, "dinner, \"fancy\""),
        (date(2025, 1, 15), "Food", 12_345, "dinner, \"fancy\""),
        (date(2024, 12, 31), "Entertainment", 1, ""),
        (date(2025, 2, 1), "Other", 0, "multi\nline"),
    ] {
        ledger
            .add(
                ExpenseDraft::new(d, category, Money::from_cents(cents), note)
                    .validate()
                    .unwrap(),
            )
            .unwrap();
    }

    storage.save_ledger(&user, &ledger).unwrap();
    let loaded = storage.load_ledger(&user).unwrap();

    assert_eq!(loaded, ledger);
    assert_eq!(loaded.len(), 4);
}

#[test]
fn budgets_round_trip() {
    let (_dir, storage) = storage();
    let user = UserId::derive("a@b.com");

    let budgets: BudgetStore = [
        (MonthKey::new(2025, 1).unwrap(), Money::from_cents(150_050)),
        (MonthKey::new(2024, 12).unwrap(), Money::zero()),
    ]
    .into_iter()
    .collect();

    storage.save_budgets(&user, &budgets).unwrap();
    assert_eq!(storage.load_budgets(&user).unwrap(), budgets);
}

#[test]
fn overwrite_leaves_no_temp_files() {
    let (dir, storage) = storage();
    let user = UserId::derive("a@b.com");
    let mut ledger = Ledger::new();

    for day in 1..=3 {
        ledger
            .add(
                ExpenseDraft::new(date(2025, 3, day), "Bills", Money::from_units(10), "")
                    .validate()
                    .unwrap(),
            )
            .unwrap();
        storage.save_ledger(&user, &ledger).unwrap();
    }

    let leftovers: Vec<_> = std::fs::read_dir(dir.path().join("user_data"))
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
        .collect();
    assert!(leftovers.is_empty());
    assert_eq!(storage.load_ledger(&user).unwrap().len(), 3);
}

#[test]
fn reads_files_written_without_ids() {
    let (dir, storage) = storage();
    let user = UserId::derive("old@user.com");

    std::fs::write(
        dir.path().join("user_data").join("expenses_old_at_user_dot_com.csv"),
        "Date,Category,Amount,Note\n2025-01-15,Food,250.0,Lunch\n2024-12-20 00:00:00,Travel,80,\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("user_data").join("budgets_old_at_user_dot_com.json"),
        r#"{"January 2025": 1500.0}"#,
    )
    .unwrap();

    let (ledger, budgets) = storage.load(&user).unwrap();
    assert_eq!(ledger.len(), 2);
    assert_eq!(
        ledger.available_months(),
        vec![MonthKey::new(2025, 1).unwrap(), MonthKey::new(2024, 12).unwrap()]
    );
    assert_eq!(
        budgets.explicit(MonthKey::new(2025, 1).unwrap()),
        Some(Money::from_units(1500))
    );

    // Saving back assigns the minted ids permanently
    storage.save_ledger(&user, &ledger).unwrap();
    assert_eq!(storage.load_ledger(&user).unwrap(), ledger);
}

#[test]
fn malformed_ledger_is_a_persistence_failure() {
    let (dir, storage) = storage();
    let user = UserId::derive("a@b.com");
    std::fs::write(
        dir.path().join("user_data").join("expenses_a_at_b_dot_com.csv"),
        "Date,Category,Amount,Note\nyesterday,Food,1,\n",
    )
    .unwrap();

    assert!(storage.load_ledger(&user).unwrap_err().is_persistence());
}
