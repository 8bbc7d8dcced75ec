use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", dir.path())
        .env("RUST_LOG", "off")
        .env_remove("API_KEY");
    cmd
}

#[test]
fn test_add_then_dashboard() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["tx", "add", "Salary", "5000", "--type", "income", "-c", "salary"])
        .args(["--date", "2024-06-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded transaction txn-"));

    fintrack(&dir)
        .args(["tx", "add", "Groceries", "89,90", "-c", "food", "-m", "pix"])
        .args(["--date", "2024-06-03"])
        .assert()
        .success();

    fintrack(&dir)
        .args(["budget", "set", "Food=100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 100.00"));

    fintrack(&dir)
        .args(["dashboard", "--today", "2024-06-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-06-01 to 2024-06-30"))
        .stdout(predicate::str::contains("R$ 4910.10"))
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("Pix"))
        .stdout(predicate::str::contains("warning"));
}

#[test]
fn test_dashboard_empty_store() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["dashboard", "--today", "2024-06-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found in this period."))
        .stdout(predicate::str::contains("No budget goals configured."));
}

#[test]
fn test_invalid_amount_fails() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["tx", "add", "Coffee", "cheap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid money format"));
}

#[test]
fn test_delete_unknown_transaction_fails() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["tx", "delete", "txn-deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction not found"));
}

#[test]
fn test_ask_without_key_prints_fallback() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["ask", "how", "am", "I", "doing?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration pending"));
}
