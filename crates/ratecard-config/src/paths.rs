use std::{env, path::PathBuf};

use dirs::home_dir;

/// Environment variable that relocates every file the app writes.
pub const HOME_ENV: &str = "RATECARD_HOME";
const DEFAULT_DIR_NAME: &str = ".ratecard";
const HISTORY_DIR: &str = "history";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
const EXPORTS_DIR: &str = "exports";

/// Resolved locations of the app's data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// `$RATECARD_HOME`, defaulting to `~/.ratecard`.
    pub fn resolve() -> Self {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return Self::new(PathBuf::from(custom));
        }
        Self::new(
            home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DEFAULT_DIR_NAME),
        )
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    pub fn history_dir(&self) -> PathBuf {
        self.root.join(HISTORY_DIR)
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    pub fn exports_dir(&self) -> PathBuf {
        self.root.join(EXPORTS_DIR)
    }
}
