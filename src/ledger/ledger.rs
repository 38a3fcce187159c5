use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::normalize_category;
use super::expense::Expense;

/// Budget thresholds: category name -> (month `YYYY-MM` -> ceiling amount).
/// At most one threshold exists per category/month pair; setting again
/// overwrites.
pub type Budgets = BTreeMap<String, BTreeMap<String, f64>>;

/// Full tracker state: the append-only expense list and the budget map.
/// This is also the persisted document shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub budgets: Budgets,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an expense record. Insertion order is preserved for display;
    /// it carries no aggregation meaning. The caller has already validated
    /// `amount > 0`.
    pub fn append_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Upserts a budget threshold. The category is normalized before use as
    /// a key, so "food" and "Food" land in the same bucket. The caller has
    /// already validated `amount >= 0`.
    pub fn set_budget(&mut self, category: &str, month: &str, amount: f64) {
        let key = normalize_category(category);
        self.budgets
            .entry(key)
            .or_default()
            .insert(month.to_string(), amount);
    }

    /// Resolves the threshold for a category/month pair, defaulting to 0.0
    /// when either level of the map is absent. The category string is used
    /// as-is; normalization happens only on write.
    pub fn budget_for(&self, category: &str, month: &str) -> f64 {
        self.budgets
            .get(category)
            .and_then(|months| months.get(month))
            .copied()
            .unwrap_or(0.0)
    }

    /// Every category that has ever had a budget set, across all months.
    pub fn budget_categories(&self) -> impl Iterator<Item = &str> {
        self.budgets.keys().map(String::as_str)
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }
}
