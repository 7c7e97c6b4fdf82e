//! Cache backend trait.

use bankline_core::BanklineResult;
use std::time::Duration;

/// Key/value cache backend with TTL support.
///
/// Abstracts over Redis so tests can substitute in-memory or failing
/// backends. Values are JSON strings; typed encoding lives in
/// [`AccountCache`](super::AccountCache), which is also where backend
/// errors are absorbed.
#[async_trait::async_trait]
pub trait CacheBackend: Send + Sync {
    /// Gets a raw JSON value.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get(&self, key: &str) -> BanklineResult<Option<String>>;

    /// Sets a raw JSON value with a TTL, overwriting any existing entry.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> BanklineResult<()>;

    /// Whether the backend is enabled at all.
    fn is_enabled(&self) -> bool;
}
