//! The owned state object collaborators hold for the process lifetime:
//! loads once on open, then runs the load-mutate-save cycle under a single
//! lock, persisting after every mutation.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{
    ledger::{normalize_category, Expense, Ledger},
    report::{self, BudgetAlert, MonthlySpending, ReportRow},
    storage::{LoadSource, Result, StorageBackend},
};

pub struct LedgerStore {
    storage: Box<dyn StorageBackend>,
    state: Mutex<Ledger>,
    loaded_from: LoadSource,
}

impl LedgerStore {
    /// Loads state from the backend (fail-open) and takes ownership of it.
    pub fn open(storage: Box<dyn StorageBackend>) -> Self {
        let report = storage.load();
        tracing::info!(
            expenses = report.ledger.expense_count(),
            source = ?report.source,
            "ledger store opened"
        );
        Self {
            storage,
            state: Mutex::new(report.ledger),
            loaded_from: report.source,
        }
    }

    /// Where the in-memory state originally came from, so boundaries can
    /// warn the user when a corrupt file was replaced by an empty ledger.
    pub fn load_source(&self) -> LoadSource {
        self.loaded_from
    }

    /// Appends a validated expense (`amount > 0` checked by the caller),
    /// persists, and reports any budget alert the new record triggered.
    pub fn log_expense(&self, expense: Expense) -> Result<Option<BudgetAlert>> {
        let mut state = self.lock();
        let date = expense.date.clone();
        let category = expense.category.clone();
        state.append_expense(expense);
        self.storage.save(&state)?;
        Ok(category.and_then(|category| report::budget_alert(&state, &date, &category)))
    }

    /// Upserts a validated budget threshold (`amount >= 0` checked by the
    /// caller), persists, and re-evaluates the month against the new
    /// ceiling.
    pub fn set_budget(&self, category: &str, month: &str, amount: f64) -> Result<Option<BudgetAlert>> {
        let mut state = self.lock();
        state.set_budget(category, month, amount);
        self.storage.save(&state)?;
        // Alerts key on the normalized budget category; evaluate at the
        // first day of the month being budgeted.
        let first_day = format!("{month}-01");
        let key = normalize_category(category);
        Ok(report::budget_alert(&state, &first_day, &key))
    }

    pub fn monthly_spending(&self, month: &str) -> MonthlySpending {
        report::monthly_spending(&self.lock(), month)
    }

    pub fn budget_alert(&self, date: &str, category: &str) -> Option<BudgetAlert> {
        report::budget_alert(&self.lock(), date, category)
    }

    pub fn monthly_report(&self, month: &str) -> Vec<ReportRow> {
        report::build_report(&self.lock(), month)
    }

    /// Copy of the current state, for display of raw records.
    pub fn snapshot(&self) -> Ledger {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Ledger> {
        // A poisoned lock only means another thread panicked mid-request;
        // the ledger itself is still structurally sound.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
