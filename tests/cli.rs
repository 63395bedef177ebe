use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "expense";
const USER: &str = "cli.tester@example.com";

fn expense(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("EXPENSE_LEDGER_DATA_DIR", data_dir.path())
        .env_remove("EXPENSE_LEDGER_USER")
        .env("RUST_LOG", "off");
    cmd
}

fn add(data_dir: &TempDir, amount: &str, category: &str, date: &str, note: &str) -> String {
    let output = expense(data_dir)
        .args(["--user", USER, "add", amount, category, "--date", date, "--note", note])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    stdout
        .lines()
        .find_map(|line| line.trim().strip_prefix("ID: "))
        .expect("id printed")
        .to_string()
}

#[test]
fn cli_add_and_list() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .args(["--user", USER, "add", "250", "Food", "--date", "2025-01-15", "--note", "lunch"])
        .assert()
        .success()
        .stdout(contains("Added ₹250.00 to 'Food' on Jan 15, 2025."));

    expense(&data_dir)
        .args(["--user", USER, "list"])
        .assert()
        .success()
        .stdout(contains("Expenses for January 2025").and(contains("lunch")));

    assert!(data_dir
        .path()
        .join("user_data")
        .join("expenses_cli_dot_tester_at_example_dot_com.csv")
        .exists());
}

#[test]
fn cli_rejects_unknown_category() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .args(["--user", USER, "add", "10", "Groceries", "--date", "2025-01-15"])
        .assert()
        .failure()
        .stderr(contains("Invalid record"));
}

#[test]
fn cli_requires_user() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .args(["list"])
        .assert()
        .failure()
        .stderr(contains("No user given"));
}

#[test]
fn cli_user_from_environment() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, "40", "Travel", "2025-02-01", "bus");

    expense(&data_dir)
        .env("EXPENSE_LEDGER_USER", USER)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("bus"));
}

#[test]
fn cli_users_are_separate() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, "40", "Travel", "2025-02-01", "bus");

    expense(&data_dir)
        .args(["--user", "someone.else@example.com", "months"])
        .assert()
        .success()
        .stdout(contains("No expenses recorded yet."));
}

#[test]
fn cli_months_most_recent_first() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, "12", "Food", "2024-12-30", "");
    add(&data_dir, "50", "Travel", "2025-01-02", "");

    expense(&data_dir)
        .args(["--user", USER, "months"])
        .assert()
        .success()
        .stdout("January 2025\nDecember 2024\n");
}

#[test]
fn cli_edit_and_delete_by_id() {
    let data_dir = TempDir::new().unwrap();
    let id = add(&data_dir, "250", "Food", "2025-01-15", "lunch");

    expense(&data_dir)
        .args(["--user", USER, "edit", &id, "--amount", "300", "--note", "brunch"])
        .assert()
        .success()
        .stdout(contains("₹300.00").and(contains("brunch")));

    expense(&data_dir)
        .args(["--user", USER, "delete", &id])
        .assert()
        .success()
        .stdout(contains("Deleted ₹300.00 Food expense"));

    expense(&data_dir)
        .args(["--user", USER, "delete", &id])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn cli_budget_and_report() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, "800", "Bills", "2025-01-03", "rent");
    add(&data_dir, "150", "Food", "2025-01-04", "");

    expense(&data_dir)
        .args(["--user", USER, "budget", "show", "--month", "2025-01"])
        .assert()
        .success()
        .stdout(contains("₹1000.00 (default)").and(contains("Near limit")));

    expense(&data_dir)
        .args(["--user", USER, "budget", "set", "2000", "--month", "January 2025"])
        .assert()
        .success()
        .stdout(contains("Budget for January 2025 set to ₹2000.00"));

    expense(&data_dir)
        .args(["--user", USER, "report"])
        .assert()
        .success()
        .stdout(
            contains("let's track your expenses!")
                .and(contains("Within budget! ₹1050.00 remaining."))
                .and(contains("Bills"))
                .and(contains("Jan 03, 2025")),
        );
}

#[test]
fn cli_export_month() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, "250", "Food", "2025-01-15", "lunch");
    add(&data_dir, "99", "Other", "2024-12-01", "");

    expense(&data_dir)
        .args(["--user", USER, "export", "--month", "2025-01"])
        .assert()
        .success()
        .stdout("Date,Category,Amount,Note\n2025-01-15,Food,250.00,lunch\n");

    let out = data_dir.path().join("january.csv");
    expense(&data_dir)
        .args(["--user", USER, "export", "--month", "2025-01", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Exported 1 expense(s) for January 2025"));
    assert!(std::fs::read_to_string(&out).unwrap().contains("lunch"));
}

#[test]
fn cli_config_shows_paths() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Data directory").and(contains("Default budget:        1000.00")));
}
