//! Redis-based cache backend.

use super::CacheBackend;
use bankline_core::{BanklineError, BanklineResult};
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Redis-based cache backend over a deadpool connection pool.
pub struct RedisCacheBackend {
    /// Redis connection pool; `None` when caching is disabled.
    pool: Option<Arc<Pool>>,
}

impl RedisCacheBackend {
    /// Creates a new Redis cache backend.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Creates a no-op backend (for when Redis is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    async fn get_conn(&self) -> BanklineResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool.get().await.map_err(|e| {
                BanklineError::Cache(format!("Failed to get Redis connection: {}", e))
            }),
            None => Err(BanklineError::Cache("Cache is disabled".to_string())),
        }
    }
}

#[async_trait::async_trait]
impl CacheBackend for RedisCacheBackend {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get(&self, key: &str) -> BanklineResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| BanklineError::Cache(format!("Failed to get key '{}': {}", key, e)))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> BanklineResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| BanklineError::Cache(format!("Failed to set key '{}': {}", key, e)))?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_backend_reads_as_miss() {
        let backend = RedisCacheBackend::disabled();
        assert!(!backend.is_enabled());
        assert_eq!(backend.get("accounts:cust1").await.unwrap(), None);
        assert!(backend
            .set("accounts:cust1", "[]", Duration::from_secs(60))
            .await
            .is_ok());
    }
}
