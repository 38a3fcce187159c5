use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").expect("binary builds");
    cmd.env("FINTRACK_HOME", home.path());
    cmd
}

#[test]
fn log_budget_report_flow() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["budget", "food", "2024-03", "70"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget of 70.00 set for Food in 2024-03."));

    fintrack(&home)
        .args(["log", "2024-03-05", "50", "Food", "weekly", "groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense logged successfully!"))
        .stdout(predicate::str::contains("BUDGET ALERT").not());

    fintrack(&home)
        .args(["log", "2024-03-20", "30", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "!!! BUDGET ALERT !!! You are OVER BUDGET by 10.00 for Food in 2024-03.",
        ));

    fintrack(&home)
        .args(["log", "2024-03-10", "20", "Transport"])
        .assert()
        .success();

    fintrack(&home)
        .args(["report", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total spending: 100.00"))
        .stdout(predicate::str::contains("OVER BUDGET by 10.00"))
        .stdout(predicate::str::contains("No budget set."));
}

#[test]
fn spending_lists_category_totals() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["log", "2024-03-05", "12.5", "Food"])
        .assert()
        .success();
    fintrack(&home)
        .args(["log", "2024-04-01", "99", "Food"])
        .assert()
        .success();

    fintrack(&home)
        .args(["spending", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spending for 2024-03: 12.50"))
        .stdout(predicate::str::contains("99").not());
}

#[test]
fn report_on_empty_month_is_friendly() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["report", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total spending: 0.00"))
        .stdout(predicate::str::contains("No spending or budgets for this month."));
}

#[test]
fn rejects_invalid_expense_input() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["log", "2024-03-05", "-5", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be positive."));

    fintrack(&home)
        .args(["log", "03/05/2024", "5", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected YYYY-MM-DD"));

    fintrack(&home)
        .args(["log", "2024-03-05", "five", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid amount"));
}

#[test]
fn rejects_invalid_budget_input() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .args(["budget", "Food", "2024-03", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Budget amount cannot be negative."));

    fintrack(&home)
        .args(["budget", "  ", "2024-03", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category cannot be empty."));

    fintrack(&home)
        .args(["budget", "Food", "March", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected YYYY-MM"));
}

#[test]
fn unknown_command_prints_usage_and_fails() {
    let home = TempDir::new().unwrap();

    fintrack(&home)
        .arg("frobnicate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Usage: fintrack"));
}

#[test]
fn corrupt_data_file_warns_but_proceeds() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("ledger.json"), "not json at all").unwrap();

    fintrack(&home)
        .args(["report", "2024-03"])
        .assert()
        .success()
        .stderr(predicate::str::contains("data file was unreadable"))
        .stdout(predicate::str::contains("Total spending: 0.00"));
}
