use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::{ledger::Ledger, utils::paths};

use super::{LoadReport, LoadSource, Result, StorageBackend};

const TMP_SUFFIX: &str = "tmp";

/// Stores the whole tracker state as one pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Backend pointed at the default data file (`~/.fintrack/ledger.json`,
    /// overridable via `FINTRACK_HOME`).
    pub fn default_location() -> Self {
        Self::new(paths::data_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> LoadReport {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no data file yet, starting empty");
                return LoadReport {
                    ledger: Ledger::new(),
                    source: LoadSource::MissingDefault,
                };
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "data file unreadable, starting empty"
                );
                return LoadReport {
                    ledger: Ledger::new(),
                    source: LoadSource::CorruptDefault,
                };
            }
        };

        match serde_json::from_str(&data) {
            Ok(ledger) => LoadReport {
                ledger,
                source: LoadSource::Disk,
            },
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "data file corrupt, starting empty"
                );
                LoadReport {
                    ledger: Ledger::new(),
                    source: LoadSource::CorruptDefault,
                }
            }
        }
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        let json = serde_json::to_string_pretty(ledger)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "ledger saved");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
