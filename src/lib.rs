//! Fintrack offers the ledger, aggregation, and budget-alert primitives that
//! power a small personal finance tracker and its CLI.

pub mod cli;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod storage;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fintrack tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
