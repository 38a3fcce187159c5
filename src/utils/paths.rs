use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".fintrack";
const DATA_FILE: &str = "ledger.json";

/// Returns the application-specific data directory, defaulting to `~/.fintrack`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("FINTRACK_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path to the single ledger data file.
pub fn data_file() -> PathBuf {
    app_data_dir().join(DATA_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_file_lives_under_app_dir() {
        assert_eq!(data_file().parent(), Some(app_data_dir().as_path()));
    }
}
