//! Aggregation and budget-alert engine: pure, single-pass computations over
//! a [`Ledger`]. Nothing in here mutates state or touches storage; totals
//! are recomputed from the expense list on every call.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::ledger::{month_key, CategoryKey, Ledger};

/// Spending totals for one queried month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySpending {
    pub month: String,
    pub total: f64,
    /// Keyed only by categories that actually had spending this month;
    /// a zero-spend category is absent, not present-with-zero.
    pub by_category: BTreeMap<CategoryKey, f64>,
}

/// Structured signal that a category's spending exceeded its threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAlert {
    pub category: String,
    pub month: String,
    pub budget: f64,
    pub spent: f64,
    pub over_by: f64,
}

/// One category's budget-vs-actual line for a queried month.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub category: String,
    pub spent: f64,
    pub budget: f64,
    pub status: RowStatus,
    pub is_alert: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowStatus {
    Over { by: f64 },
    Met,
    Remaining { left: f64 },
    NoBudget,
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Over { by } => write!(f, "OVER BUDGET by {by:.2}"),
            Self::Met => write!(f, "Budget met."),
            Self::Remaining { left } => write!(f, "Remaining: {left:.2}"),
            Self::NoBudget => write!(f, "No budget set."),
        }
    }
}

/// Rolls up every expense whose date falls in `month` (`YYYY-MM`).
///
/// Records with a missing or truncated date are excluded rather than
/// treated as an error; a record without a category accumulates into the
/// [`CategoryKey::Uncategorized`] bucket.
pub fn monthly_spending(ledger: &Ledger, month: &str) -> MonthlySpending {
    let mut total = 0.0;
    let mut by_category: BTreeMap<CategoryKey, f64> = BTreeMap::new();

    for expense in &ledger.expenses {
        let Some(expense_month) = expense.month_key() else {
            continue;
        };
        if expense_month != month {
            continue;
        }
        let key = CategoryKey::from_submitted(expense.category.as_deref());
        total += expense.amount;
        *by_category.entry(key).or_insert(0.0) += expense.amount;
    }

    MonthlySpending {
        month: month.to_string(),
        total,
        by_category,
    }
}

/// Evaluates whether spending for `category` in the month of `date` is
/// strictly over its threshold.
///
/// An absent or zero threshold means "no budget", never "zero allowance",
/// and spending exactly equal to the threshold does not alert. The category
/// string is matched against budget keys as-is; callers setting budgets
/// normalize before calling.
pub fn budget_alert(ledger: &Ledger, date: &str, category: &str) -> Option<BudgetAlert> {
    let month = month_key(date)?;
    let budget = ledger.budget_for(category, month);
    if budget <= 0.0 {
        return None;
    }

    let spending = monthly_spending(ledger, month);
    let key = CategoryKey::Named(category.to_string());
    let spent = spending.by_category.get(&key).copied().unwrap_or(0.0);

    if spent > budget {
        Some(BudgetAlert {
            category: category.to_string(),
            month: month.to_string(),
            budget,
            spent,
            over_by: spent - budget,
        })
    } else {
        None
    }
}

/// Builds the budget-vs-actual rows for one month.
///
/// Covers the union of categories with spending this month and categories
/// with a budget set in any month, sorted by name. A row with neither a
/// threshold for this month nor any spending is suppressed as noise.
pub fn build_report(ledger: &Ledger, month: &str) -> Vec<ReportRow> {
    let spending = monthly_spending(ledger, month);

    let mut categories: BTreeSet<CategoryKey> = spending.by_category.keys().cloned().collect();
    categories.extend(
        ledger
            .budget_categories()
            .map(|name| CategoryKey::Named(name.to_string())),
    );

    let mut rows = Vec::new();
    for key in categories {
        let spent = spending.by_category.get(&key).copied().unwrap_or(0.0);
        // The fallback bucket can never carry a threshold; only named
        // categories are budget keys.
        let budget = match &key {
            CategoryKey::Named(name) => ledger.budget_for(name, month),
            CategoryKey::Uncategorized => 0.0,
        };
        let balance = budget - spent;

        let status = if budget > 0.0 {
            if balance < 0.0 {
                RowStatus::Over { by: -balance }
            } else if balance == 0.0 {
                RowStatus::Met
            } else {
                RowStatus::Remaining { left: balance }
            }
        } else if spent > 0.0 {
            RowStatus::NoBudget
        } else {
            continue;
        };

        rows.push(ReportRow {
            category: key.name().to_string(),
            spent,
            budget,
            is_alert: matches!(status, RowStatus::Over { .. }),
            status,
        });
    }
    rows
}
