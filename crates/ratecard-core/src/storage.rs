use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use ratecard_domain::Calculation;
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Fixed namespaced key the calculation history is persisted under.
pub const HISTORY_STORAGE_KEY: &str = "freelance-calculator-storage";

/// Serialized shape of the history: `{ "calculations": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HistorySnapshot {
    #[serde(default)]
    pub calculations: Vec<Calculation>,
}

impl HistorySnapshot {
    pub fn new(calculations: Vec<Calculation>) -> Self {
        Self { calculations }
    }
}

/// Abstraction over durable key/value backends that hold history snapshots.
pub trait HistoryStorage: Send + Sync {
    /// Returns `Ok(None)` when nothing was ever stored under `key`.
    fn load(&self, key: &str) -> Result<Option<HistorySnapshot>, CoreError>;
    fn save(&self, key: &str, snapshot: &HistorySnapshot) -> Result<(), CoreError>;
    /// Drops whatever is stored under `key`; a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), CoreError>;
}

/// Process-local storage. Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryStorage {
    entries: Arc<Mutex<HashMap<String, HistorySnapshot>>>,
}

impl InMemoryHistoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the snapshot stored under `key`.
    pub fn snapshot(&self, key: &str) -> Option<HistorySnapshot> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }
}

impl HistoryStorage for InMemoryHistoryStorage {
    fn load(&self, key: &str) -> Result<Option<HistorySnapshot>, CoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Storage("in-memory storage lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, snapshot: &HistorySnapshot) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Storage("in-memory storage lock poisoned".into()))?;
        entries.insert(key.to_string(), snapshot.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Storage("in-memory storage lock poisoned".into()))?;
        entries.remove(key);
        Ok(())
    }
}
