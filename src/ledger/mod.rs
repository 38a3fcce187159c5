//! Ledger domain models, persistence-friendly types, and helpers.

pub mod category;
pub mod expense;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use category::{normalize_category, CategoryKey};
pub use expense::{month_key, Expense};
pub use ledger::{Budgets, Ledger};
