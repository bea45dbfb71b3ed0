#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use assert_cmd::{assert::Assert, Command};
use once_cell::sync::Lazy;
use serde_json::Value;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// A fresh data root for one test.
pub fn isolated_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Runs the CLI in script mode against `home`, feeding `script` on stdin.
pub fn run_script(home: &Path, script: &str) -> Assert {
    Command::cargo_bin("ratecard_cli")
        .expect("binary built")
        .env("RATECARD_CLI_SCRIPT", "1")
        .env("RATECARD_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RATECARD_EXCHANGE_API_KEY")
        .env_remove("RUST_LOG")
        .write_stdin(script)
        .assert()
}

pub fn history_file(home: &Path) -> PathBuf {
    home.join("history").join("freelance-calculator-storage.json")
}

/// Persisted calculations, newest first.
pub fn stored_calculations(home: &Path) -> Vec<Value> {
    let raw = fs::read_to_string(history_file(home)).expect("read history file");
    let value: Value = serde_json::from_str(&raw).expect("history is json");
    value["calculations"]
        .as_array()
        .cloned()
        .expect("calculations array")
}
