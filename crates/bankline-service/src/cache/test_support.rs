//! In-memory and failing cache backends for tests.

use super::CacheBackend;
use bankline_core::{BanklineError, BanklineResult};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Backend storing entries in a map; TTLs are recorded but never expire.
pub(crate) struct InMemoryBackend {
    entries: Mutex<HashMap<String, String>>,
    last_ttl: Mutex<Option<Duration>>,
}

impl InMemoryBackend {
    pub(crate) fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            last_ttl: Mutex::new(None),
        }
    }

    pub(crate) fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    pub(crate) fn last_ttl(&self) -> Option<Duration> {
        *self.last_ttl.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl CacheBackend for InMemoryBackend {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn get(&self, key: &str) -> BanklineResult<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> BanklineResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        *self.last_ttl.lock().unwrap() = Some(ttl);
        Ok(())
    }
}

/// Backend whose every operation fails, for degradation tests.
pub(crate) struct FailingBackend;

#[async_trait::async_trait]
impl CacheBackend for FailingBackend {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn get(&self, _key: &str) -> BanklineResult<Option<String>> {
        Err(BanklineError::Cache("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> BanklineResult<()> {
        Err(BanklineError::Cache("connection refused".to_string()))
    }
}
