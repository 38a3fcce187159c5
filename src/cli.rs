//! Thin command-line boundary: parses and validates user input, invokes the
//! store, and renders plain-text output. All field/number/positivity checks
//! live here; the core assumes validated input.

use chrono::{Local, NaiveDate};
use colored::Colorize;

use crate::{
    errors::LedgerError,
    ledger::{normalize_category, Expense},
    report::BudgetAlert,
    storage::{JsonStorage, LoadSource},
    store::LedgerStore,
};

const USAGE: &str = "\
Usage: fintrack <command> [args]

Commands:
  log <date> <amount> <category> [description...]   Log an expense (date YYYY-MM-DD, amount > 0)
  budget <category> <month> <amount>                Set a monthly budget (month YYYY-MM, amount >= 0)
  report [month]                                    Budget-vs-actual report (defaults to current month)
  spending [month]                                  Raw category totals (defaults to current month)
  help                                              Show this message";

pub fn run(args: &[String]) -> Result<(), LedgerError> {
    let Some(command) = args.first() else {
        println!("{USAGE}");
        return Err(LedgerError::InvalidInput("missing command".into()));
    };

    if command == "help" {
        println!("{USAGE}");
        return Ok(());
    }

    let store = LedgerStore::open(Box::new(JsonStorage::default_location()));
    if store.load_source() == LoadSource::CorruptDefault {
        eprintln!(
            "{}",
            "Warning: the data file was unreadable; starting from an empty ledger.".yellow()
        );
    }

    match command.as_str() {
        "log" => log_expense(&store, &args[1..]),
        "budget" => set_budget(&store, &args[1..]),
        "report" => show_report(&store, &args[1..]),
        "spending" => show_spending(&store, &args[1..]),
        other => {
            println!("{USAGE}");
            Err(LedgerError::InvalidInput(format!("unknown command `{other}`")))
        }
    }
}

fn log_expense(store: &LedgerStore, args: &[String]) -> Result<(), LedgerError> {
    let [date, amount, category, description @ ..] = args else {
        return Err(LedgerError::InvalidInput(
            "usage: fintrack log <date> <amount> <category> [description...]".into(),
        ));
    };
    let date = parse_date(date)?;
    let amount = parse_amount(amount)?;
    if amount <= 0.0 {
        return Err(LedgerError::InvalidInput("Amount must be positive.".into()));
    }
    let category = require_category(category)?;
    let description = match description {
        [] => None,
        words => Some(words.join(" ")),
    };

    let alert = store.log_expense(Expense::new(date, amount, Some(category), description))?;
    println!("{}", "Expense logged successfully!".green());
    if let Some(alert) = alert {
        print_alert(&alert);
    }
    Ok(())
}

fn set_budget(store: &LedgerStore, args: &[String]) -> Result<(), LedgerError> {
    let [category, month, amount] = args else {
        return Err(LedgerError::InvalidInput(
            "usage: fintrack budget <category> <month> <amount>".into(),
        ));
    };
    let category = require_category(category)?;
    let month = parse_month(month)?;
    let amount = parse_amount(amount)?;
    if amount < 0.0 {
        return Err(LedgerError::InvalidInput(
            "Budget amount cannot be negative.".into(),
        ));
    }

    let alert = store.set_budget(&category, &month, amount)?;
    // Echo the key the budget was actually stored under.
    let stored_as = normalize_category(&category);
    println!(
        "{}",
        format!("Budget of {amount:.2} set for {stored_as} in {month}.").green()
    );
    if let Some(alert) = alert {
        print_alert(&alert);
    }
    Ok(())
}

fn show_report(store: &LedgerStore, args: &[String]) -> Result<(), LedgerError> {
    let month = month_arg(args)?;
    let spending = store.monthly_spending(&month);
    let rows = store.monthly_report(&month);

    println!("Report for {month}");
    println!("Total spending: {:.2}", spending.total);
    if rows.is_empty() {
        println!("No spending or budgets for this month.");
        return Ok(());
    }

    println!("{:<20} {:>10} {:>10}  Status", "Category", "Spent", "Budget");
    for row in rows {
        let line = format!(
            "{:<20} {:>10.2} {:>10.2}  {}",
            row.category, row.spent, row.budget, row.status
        );
        if row.is_alert {
            println!("{}", line.red());
        } else {
            println!("{line}");
        }
    }
    Ok(())
}

fn show_spending(store: &LedgerStore, args: &[String]) -> Result<(), LedgerError> {
    let month = month_arg(args)?;
    let spending = store.monthly_spending(&month);

    println!("Spending for {month}: {:.2}", spending.total);
    for (category, amount) in &spending.by_category {
        println!("{category:<20} {amount:>10.2}");
    }
    Ok(())
}

fn month_arg(args: &[String]) -> Result<String, LedgerError> {
    match args {
        [] => Ok(current_month()),
        [month] => parse_month(month),
        _ => Err(LedgerError::InvalidInput("expected at most one month argument".into())),
    }
}

fn print_alert(alert: &BudgetAlert) {
    println!(
        "{}",
        format!(
            "!!! BUDGET ALERT !!! You are OVER BUDGET by {:.2} for {} in {}. Budget: {:.2}, Spent: {:.2}",
            alert.over_by, alert.category, alert.month, alert.budget, alert.spent
        )
        .yellow()
        .bold()
    );
}

fn current_month() -> String {
    Local::now().format("%Y-%m").to_string()
}

fn parse_date(raw: &str) -> Result<String, LedgerError> {
    // chrono tolerates single-digit months; require the canonical width so
    // the stored string always carries a YYYY-MM month key.
    if raw.len() == 10 && NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok() {
        Ok(raw.to_string())
    } else {
        Err(LedgerError::InvalidInput(format!(
            "invalid date `{raw}`, expected YYYY-MM-DD"
        )))
    }
}

fn parse_month(raw: &str) -> Result<String, LedgerError> {
    if raw.len() == 7 && NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").is_ok() {
        Ok(raw.to_string())
    } else {
        Err(LedgerError::InvalidInput(format!(
            "invalid month `{raw}`, expected YYYY-MM"
        )))
    }
}

fn parse_amount(raw: &str) -> Result<f64, LedgerError> {
    raw.parse::<f64>()
        .map_err(|_| LedgerError::InvalidInput(format!("invalid amount `{raw}`")))
}

fn require_category(raw: &str) -> Result<String, LedgerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidInput("Category cannot be empty.".into()));
    }
    Ok(trimmed.to_string())
}
