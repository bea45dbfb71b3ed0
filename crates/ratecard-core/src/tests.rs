use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::{
    export_file_stem, Clock, CoreError, HistorySnapshot, HistoryStorage, HistoryStore,
    InMemoryHistoryStorage, PricingService, SequentialIdGenerator, HISTORY_CAPACITY,
    HISTORY_STORAGE_KEY,
};
use ratecard_domain::{Calculation, CurrencyCode, Identifiable, PricingInput, PricingResult};

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

struct FailingStorage;

impl HistoryStorage for FailingStorage {
    fn load(&self, _key: &str) -> Result<Option<HistorySnapshot>, CoreError> {
        Err(CoreError::Serde("expected value at line 1 column 1".into()))
    }

    fn save(&self, _key: &str, _snapshot: &HistorySnapshot) -> Result<(), CoreError> {
        Err(CoreError::Storage("read-only".into()))
    }

    fn remove(&self, _key: &str) -> Result<(), CoreError> {
        Err(CoreError::Storage("read-only".into()))
    }
}

fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap()))
}

fn open_store(storage: &InMemoryHistoryStorage) -> HistoryStore {
    HistoryStore::open(
        Box::new(storage.clone()),
        clock(),
        Box::new(SequentialIdGenerator::default()),
    )
}

fn priced(name: &str) -> PricingResult {
    PricingService::price(PricingInput::new(name, CurrencyCode::default())).expect("valid input")
}

fn ids(store: &HistoryStore) -> Vec<String> {
    store.list().iter().map(|calc| calc.id().to_string()).collect()
}

#[test]
fn history_store_starts_empty_without_snapshot() {
    let store = open_store(&InMemoryHistoryStorage::new());
    assert!(store.is_empty());
    assert!(store.latest().is_none());
    assert_eq!(store.key(), HISTORY_STORAGE_KEY);
}

#[test]
fn add_stamps_id_and_time_and_prepends() {
    let storage = InMemoryHistoryStorage::new();
    let mut store = open_store(&storage);

    let first = store.add(priced("First"));
    let second = store.add(priced("Second"));

    assert_eq!(first.id(), "1");
    assert_eq!(second.id(), "2");
    assert_eq!(first.created_at(), clock().now());
    assert_eq!(ids(&store), vec!["2", "1"]);
    assert_eq!(store.latest().map(|calc| calc.id()), Some("2"));
}

#[test]
fn eleventh_add_evicts_the_oldest() {
    let mut store = open_store(&InMemoryHistoryStorage::new());
    for idx in 1..=11 {
        store.add(priced(&format!("Calc {idx}")));
    }

    assert_eq!(store.len(), HISTORY_CAPACITY);
    let expected: Vec<String> = (2..=11).rev().map(|idx| idx.to_string()).collect();
    assert_eq!(ids(&store), expected);
    assert!(store.get("1").is_none());
}

#[test]
fn remove_deletes_matching_entry_only() {
    let mut store = open_store(&InMemoryHistoryStorage::new());
    store.add(priced("Keep"));
    store.add(priced("Drop"));

    assert!(store.remove("2"));
    assert_eq!(ids(&store), vec!["1"]);

    assert!(!store.remove("does-not-exist"));
    assert_eq!(ids(&store), vec!["1"]);
}

#[test]
fn clear_empties_history() {
    let storage = InMemoryHistoryStorage::new();
    let mut store = open_store(&storage);
    store.add(priced("One"));
    store.add(priced("Two"));

    store.clear();
    assert!(store.list().is_empty());
    let persisted = storage.snapshot(HISTORY_STORAGE_KEY).expect("snapshot");
    assert!(persisted.calculations.is_empty());
}

#[test]
fn every_mutation_is_persisted_and_rehydrated() {
    let storage = InMemoryHistoryStorage::new();
    {
        let mut store = open_store(&storage);
        store.add(priced("Alpha"));
        store.add(priced("Beta"));
        store.remove("1");
    }

    let persisted = storage.snapshot(HISTORY_STORAGE_KEY).expect("snapshot");
    assert_eq!(persisted.calculations.len(), 1);

    let reopened = open_store(&storage);
    assert_eq!(ids(&reopened), vec!["2"]);
    assert_eq!(reopened.latest().map(|calc| calc.input().name.as_str()), Some("Beta"));
}

#[test]
fn reopened_store_does_not_reuse_existing_ids() {
    let storage = InMemoryHistoryStorage::new();
    open_store(&storage).add(priced("Existing"));

    let mut reopened = open_store(&storage);
    let added = reopened.add(priced("New"));
    assert_eq!(added.id(), "2");
    assert_eq!(ids(&reopened), vec!["2", "1"]);
}

#[test]
fn unreadable_storage_falls_back_to_empty_history() {
    let mut store = HistoryStore::open(
        Box::new(FailingStorage),
        clock(),
        Box::new(SequentialIdGenerator::default()),
    );
    assert!(store.is_empty());

    // Persistence failures are logged, the in-memory mutation stands.
    let added = store.add(priced("Offline"));
    assert_eq!(store.latest().map(|calc| calc.id()), Some(added.id()));
}

#[test]
fn oversized_snapshots_are_truncated_on_open() {
    let storage = InMemoryHistoryStorage::new();
    let created = clock().now();
    let calculations: Vec<Calculation> = (0..15)
        .map(|idx| {
            Calculation::new(
                format!("legacy-{idx}"),
                priced("Legacy"),
                created - Duration::minutes(idx),
            )
        })
        .collect();
    storage
        .save(HISTORY_STORAGE_KEY, &HistorySnapshot::new(calculations))
        .unwrap();

    let store = open_store(&storage);
    assert_eq!(store.len(), HISTORY_CAPACITY);
    assert_eq!(store.list()[0].id(), "legacy-0");
}

#[test]
fn export_stem_uses_name_or_budget() {
    let mut store = open_store(&InMemoryHistoryStorage::new());
    let named = store.add(priced("Brand refresh"));
    assert_eq!(export_file_stem(&named), "Brand refresh-1");

    let mut result = priced("placeholder");
    result.input.name = String::new();
    let unnamed = store.add(result);
    assert_eq!(export_file_stem(&unnamed), "budget-2");
}

#[test]
fn in_memory_remove_drops_the_key() {
    let storage = InMemoryHistoryStorage::new();
    let mut store = open_store(&storage);
    store.add(priced("Short-lived"));
    assert!(storage.load(HISTORY_STORAGE_KEY).unwrap().is_some());

    storage.remove(HISTORY_STORAGE_KEY).unwrap();
    assert!(storage.load(HISTORY_STORAGE_KEY).unwrap().is_none());
    storage.remove(HISTORY_STORAGE_KEY).unwrap();
    assert!(open_store(&storage).is_empty());
}
