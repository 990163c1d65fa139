use std::collections::HashSet;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordPresence {
    Exists,
    NotFound,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("record store unavailable: {0}")]
    Unavailable(String),
    #[error("record store query failed: {0}")]
    Query(String),
    #[error("lookup timed out after {0:?}")]
    Timeout(Duration),
}

/// Key to record lookup. Implementations own any timeout policy.
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    async fn lookup(&self, key: &str) -> Result<RecordPresence, StoreError>;
}

/// In-memory set of known keys.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    keys: RwLock<HashSet<String>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: impl Into<String>) -> Result<bool, StoreError> {
        let mut keys = self
            .keys
            .write()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        Ok(keys.insert(key.into()))
    }

    pub fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let mut keys = self
            .keys
            .write()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        Ok(keys.remove(key))
    }

    pub fn len(&self) -> usize {
        self.keys.read().map(|keys| keys.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: Into<String>> FromIterator<K> for MemoryRecordStore {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            keys: RwLock::new(iter.into_iter().map(Into::into).collect()),
        }
    }
}

#[async_trait::async_trait]
impl RecordStore for MemoryRecordStore {
    async fn lookup(&self, key: &str) -> Result<RecordPresence, StoreError> {
        let exists = self
            .keys
            .read()
            .map(|keys| keys.contains(key))
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        if exists {
            Ok(RecordPresence::Exists)
        } else {
            Ok(RecordPresence::NotFound)
        }
    }
}

/// Bounds every lookup of the wrapped store by `timeout`.
pub struct TimeoutRecordStore {
    inner: Arc<dyn RecordStore>,
    timeout: Duration,
}

impl TimeoutRecordStore {
    pub fn new(inner: Arc<dyn RecordStore>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait::async_trait]
impl RecordStore for TimeoutRecordStore {
    async fn lookup(&self, key: &str) -> Result<RecordPresence, StoreError> {
        tokio::time::timeout(self.timeout, self.inner.lookup(key))
            .await
            .map_err(|_| StoreError::Timeout(self.timeout))?
    }
}
