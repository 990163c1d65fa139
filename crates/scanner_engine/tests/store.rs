use std::future;
use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use scanner_core::{LookupFailure, LookupOutcome, ScanPayload};
use scanner_engine::{
    Classifier, MemoryRecordStore, RecordPresence, RecordStore, StoreError, TimeoutRecordStore,
};

struct FailingStore;

#[async_trait::async_trait]
impl RecordStore for FailingStore {
    async fn lookup(&self, _key: &str) -> Result<RecordPresence, StoreError> {
        Err(StoreError::Query("database is locked".into()))
    }
}

struct HangingStore;

#[async_trait::async_trait]
impl RecordStore for HangingStore {
    async fn lookup(&self, _key: &str) -> Result<RecordPresence, StoreError> {
        future::pending().await
    }
}

#[tokio::test]
async fn memory_store_reports_presence() {
    let store = MemoryRecordStore::from_iter(["111", "333"]);
    assert_eq!(store.len(), 2);
    assert_eq!(store.lookup("111").await, Ok(RecordPresence::Exists));
    assert_eq!(store.lookup("222").await, Ok(RecordPresence::NotFound));
    assert_eq!(store.lookup("").await, Ok(RecordPresence::NotFound));

    assert_eq!(store.insert("222"), Ok(true));
    assert_eq!(store.insert("222"), Ok(false));
    assert_eq!(store.lookup("222").await, Ok(RecordPresence::Exists));

    assert_eq!(store.remove("111"), Ok(true));
    assert_eq!(store.lookup("111").await, Ok(RecordPresence::NotFound));
}

#[tokio::test]
async fn memory_store_matches_exact_text_only() {
    let store = MemoryRecordStore::from_iter(["abc"]);
    assert_eq!(store.lookup("ABC").await, Ok(RecordPresence::NotFound));
    assert_eq!(store.lookup("abc ").await, Ok(RecordPresence::NotFound));
}

#[tokio::test(start_paused = true)]
async fn timeout_store_fails_slow_lookups() {
    let store = TimeoutRecordStore::new(Arc::new(HangingStore), Duration::from_millis(500));
    assert_eq!(
        store.lookup("555").await,
        Err(StoreError::Timeout(Duration::from_millis(500)))
    );
}

#[tokio::test(start_paused = true)]
async fn timeout_store_passes_fast_replies_through() {
    let inner = Arc::new(MemoryRecordStore::from_iter(["111"]));
    let store = TimeoutRecordStore::new(inner, Duration::from_millis(500));
    assert_eq!(store.lookup("111").await, Ok(RecordPresence::Exists));
}

#[tokio::test]
async fn classifier_maps_store_replies() {
    let classifier = Classifier::new(Arc::new(MemoryRecordStore::from_iter(["111"])));
    assert_eq!(
        classifier.classify(ScanPayload::from("111")).await,
        LookupOutcome::Known(ScanPayload::from("111"))
    );
    assert_eq!(
        classifier.classify(ScanPayload::from("222")).await,
        LookupOutcome::Unknown(ScanPayload::from("222"))
    );
}

#[tokio::test]
async fn classifier_turns_store_errors_into_failures() {
    let classifier = Classifier::new(Arc::new(FailingStore));
    assert_eq!(
        classifier.classify(ScanPayload::from("555")).await,
        LookupOutcome::Failed(
            ScanPayload::from("555"),
            LookupFailure::new("record store query failed: database is locked")
        )
    );
}
