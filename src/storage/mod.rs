pub mod json_backend;

use crate::{errors::LedgerError, ledger::Ledger};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends holding the full tracker state.
pub trait StorageBackend: Send + Sync {
    /// Reads the persisted state. Loading never fails: a missing or
    /// unreadable source yields a fresh empty ledger, tagged with where the
    /// state actually came from so callers can warn on corruption.
    fn load(&self) -> LoadReport;

    /// Writes the complete current state, replacing prior contents in full.
    fn save(&self, ledger: &Ledger) -> Result<()>;
}

/// Outcome of a load, carrying the recovery policy decision alongside the
/// state itself.
#[derive(Debug)]
pub struct LoadReport {
    pub ledger: Ledger,
    pub source: LoadSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from the data file as-is.
    Disk,
    /// No data file existed; started empty.
    MissingDefault,
    /// The data file was unreadable or unparseable; started empty.
    CorruptDefault,
}

pub use json_backend::JsonStorage;
