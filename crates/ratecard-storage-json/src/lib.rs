//! ratecard-storage-json
//!
//! Filesystem JSON persistence for the calculation history plus JSON exports
//! of single calculations.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use ratecard_core::{export_file_stem, CoreError, HistorySnapshot, HistoryStorage};
use ratecard_domain::Calculation;
use serde::Deserialize;
use serde_json::Value;

const FILE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Stores each key as `<root>/<key>.json`, written atomically.
#[derive(Debug, Clone)]
pub struct JsonHistoryStorage {
    root: PathBuf,
}

impl JsonHistoryStorage {
    pub fn new(root: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_key(key), FILE_EXTENSION))
    }
}

impl HistoryStorage for JsonHistoryStorage {
    fn load(&self, key: &str) -> Result<Option<HistorySnapshot>, CoreError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path)?;
        decode_snapshot(&data).map(Some)
    }

    fn save(&self, key: &str, snapshot: &HistorySnapshot) -> Result<(), CoreError> {
        let path = self.path_for(key);
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(path = %path.display(), entries = snapshot.calculations.len(), "history saved");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!(path = %path.display(), "history removed");
        }
        Ok(())
    }
}

const ENVELOPE_STATE_KEY: &str = "state";

/// Parses either the native snapshot or the browser envelope
/// (`{ "state": {...}, "version": 0 }`). The presence of `state` selects the
/// envelope, so a malformed envelope is an error rather than an empty history.
pub fn decode_snapshot(data: &str) -> Result<HistorySnapshot, CoreError> {
    let mut value: Value =
        serde_json::from_str(data).map_err(|err| CoreError::Serde(err.to_string()))?;
    if let Some(state) = value
        .as_object_mut()
        .and_then(|object| object.remove(ENVELOPE_STATE_KEY))
    {
        value = state;
    }
    HistorySnapshot::deserialize(value).map_err(|err| CoreError::Serde(err.to_string()))
}

/// Writes `calculation` as pretty JSON to `<dir>/<name or budget>-<id>.json`.
pub fn write_calculation_export(calculation: &Calculation, dir: &Path) -> Result<PathBuf, CoreError> {
    fs::create_dir_all(dir)?;
    let stem = sanitize_file_stem(&export_file_stem(calculation));
    let path = dir.join(format!("{}.{}", stem, FILE_EXTENSION));
    let json = serde_json::to_string_pretty(calculation)
        .map_err(|err| CoreError::Serde(err.to_string()))?;
    write_atomic(&path, &json)?;
    Ok(path)
}

fn canonical_key(key: &str) -> String {
    let sanitized: String = key
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "history".into()
    } else {
        sanitized
    }
}

fn sanitize_file_stem(stem: &str) -> String {
    stem.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
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

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
