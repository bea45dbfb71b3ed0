//! Bounded, persisted, most-recent-first history of calculations.

use std::sync::Arc;

use ratecard_domain::{Calculation, Identifiable, PricingResult};

use crate::{
    ids::{IdGenerator, UuidIdGenerator},
    storage::{HistorySnapshot, HistoryStorage, HISTORY_STORAGE_KEY},
    time::{Clock, SystemClock},
};

/// Maximum number of calculations kept; older ones are evicted on insert.
pub const HISTORY_CAPACITY: usize = 10;

/// Owns the calculation history and writes a snapshot after every mutation.
///
/// Construct one per session and pass it to whatever needs it.
pub struct HistoryStore {
    key: String,
    calculations: Vec<Calculation>,
    storage: Box<dyn HistoryStorage>,
    clock: Arc<dyn Clock>,
    ids: Box<dyn IdGenerator>,
}

impl HistoryStore {
    /// Opens the history stored under the default key with real time and UUID ids.
    pub fn open_default(storage: Box<dyn HistoryStorage>) -> Self {
        Self::open(storage, Arc::new(SystemClock), Box::new(UuidIdGenerator))
    }

    pub fn open(
        storage: Box<dyn HistoryStorage>,
        clock: Arc<dyn Clock>,
        ids: Box<dyn IdGenerator>,
    ) -> Self {
        Self::open_with_key(HISTORY_STORAGE_KEY, storage, clock, ids)
    }

    /// Rehydrates from `key`. Missing, unreadable or corrupt data yields an empty history.
    pub fn open_with_key(
        key: impl Into<String>,
        storage: Box<dyn HistoryStorage>,
        clock: Arc<dyn Clock>,
        ids: Box<dyn IdGenerator>,
    ) -> Self {
        let key = key.into();
        let calculations = match storage.load(&key) {
            Ok(Some(snapshot)) => {
                let mut calculations: Vec<Calculation> = snapshot
                    .calculations
                    .into_iter()
                    .map(Calculation::normalized)
                    .collect();
                calculations.truncate(HISTORY_CAPACITY);
                tracing::debug!(key = %key, count = calculations.len(), "history rehydrated");
                calculations
            }
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "discarding unreadable history");
                Vec::new()
            }
        };

        Self {
            key,
            calculations,
            storage,
            clock,
            ids,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stamps `result` with a fresh id and the current time and prepends it.
    pub fn add(&mut self, result: PricingResult) -> Calculation {
        let id = self.fresh_id();
        let calculation = Calculation::new(id, result, self.clock.now());
        self.calculations.insert(0, calculation.clone());
        self.calculations.truncate(HISTORY_CAPACITY);
        self.persist();
        calculation
    }

    /// Deletes the entry with `id`. Returns `false` (and writes nothing) when absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.calculations.len();
        self.calculations.retain(|calc| calc.id() != id);
        let removed = self.calculations.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    pub fn clear(&mut self) {
        self.calculations.clear();
        self.persist();
    }

    /// Most-recent-first.
    pub fn list(&self) -> &[Calculation] {
        &self.calculations
    }

    pub fn latest(&self) -> Option<&Calculation> {
        self.calculations.first()
    }

    pub fn get(&self, id: &str) -> Option<&Calculation> {
        self.calculations.iter().find(|calc| calc.id() == id)
    }

    pub fn len(&self) -> usize {
        self.calculations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculations.is_empty()
    }

    fn fresh_id(&self) -> String {
        // At most HISTORY_CAPACITY ids are taken, so a non-repeating generator
        // lands on a free one within HISTORY_CAPACITY + 1 draws.
        let mut id = self.ids.next_id();
        for _ in 0..HISTORY_CAPACITY {
            if self.get(&id).is_none() {
                break;
            }
            id = self.ids.next_id();
        }
        id
    }

    fn persist(&self) {
        let snapshot = HistorySnapshot::new(self.calculations.clone());
        if let Err(err) = self.storage.save(&self.key, &snapshot) {
            tracing::error!(key = %self.key, error = %err, "failed to persist history");
        }
    }
}
