//! Typed account-list cache with error absorption.

use super::{cache_keys, CacheBackend};
use bankline_core::Account;
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Per-customer account list cache.
///
/// Every method is best-effort: backend and serialization failures are
/// logged and converted to a miss or no-op. Callers only ever observe
/// "hit" or "miss", never a cache failure. Every write resets the entry's
/// expiry to the configured TTL.
pub struct AccountCache {
    backend: Arc<dyn CacheBackend>,
    ttl: Duration,
}

impl AccountCache {
    /// Creates a new account cache with the given backend and TTL.
    #[must_use]
    pub fn new(backend: Arc<dyn CacheBackend>, ttl: Duration) -> Self {
        Self { backend, ttl }
    }

    /// Returns the cached account list for a customer, or `None` on miss.
    pub async fn get_accounts(&self, customer_id: &str) -> Option<Vec<Account>> {
        let accounts = self.read_entry(customer_id).await?;
        info!(
            "Retrieved {} accounts from cache for customer: {}",
            accounts.len(),
            customer_id
        );
        Some(accounts)
    }

    /// Caches the full account list for a customer.
    ///
    /// An empty list is a valid entry and is cached as such.
    pub async fn set_accounts(&self, customer_id: &str, accounts: &[Account]) {
        if self.write_entry(customer_id, accounts).await {
            info!("Cached accounts for customer: {}", customer_id);
        }
    }

    /// Appends a newly created account to an existing cached list.
    ///
    /// When no entry exists the cache is left absent rather than partially
    /// populated; the next full read repopulates it from the store.
    pub async fn append_account(&self, customer_id: &str, account: &Account) {
        let Some(mut accounts) = self.read_entry(customer_id).await else {
            info!(
                "Cache miss while appending account. No cache entry yet for customer: {}",
                customer_id
            );
            return;
        };

        accounts.push(account.clone());
        if self.write_entry(customer_id, &accounts).await {
            info!("Appended new account to cache for customer: {}", customer_id);
        }
    }

    /// Replaces the balance of a cached account in place.
    ///
    /// A missing entry or a missing IBAN within the entry is not an error;
    /// the cache self-corrects lazily on the next full read miss.
    pub async fn update_balance(&self, customer_id: &str, iban: &str, balance: Decimal) {
        let Some(mut accounts) = self.read_entry(customer_id).await else {
            info!("Cache miss while updating cache for IBAN: {}", iban);
            return;
        };

        match accounts.iter_mut().find(|account| account.iban == iban) {
            Some(account) => {
                account.balance = balance;
                if self.write_entry(customer_id, &accounts).await {
                    info!("Updated account in cache for IBAN: {}", iban);
                }
            }
            None => {
                warn!(
                    "Account with IBAN {} not found in cache for customer {}",
                    iban, customer_id
                );
            }
        }
    }

    /// Removes a cached account from an existing list.
    ///
    /// Removing the last account rewrites an empty list; the entry is never
    /// dropped by removal.
    pub async fn remove_account(&self, customer_id: &str, iban: &str) {
        let Some(mut accounts) = self.read_entry(customer_id).await else {
            info!("Cache miss while deleting account from cache for IBAN: {}", iban);
            return;
        };

        let before = accounts.len();
        accounts.retain(|account| account.iban != iban);

        if accounts.len() < before {
            if self.write_entry(customer_id, &accounts).await {
                info!("Removed account from cache for IBAN: {}", iban);
            }
        } else {
            warn!(
                "Account with IBAN {} not found in cache for customer {}",
                iban, customer_id
            );
        }
    }

    /// Reads and decodes the cached list; any failure is a miss.
    async fn read_entry(&self, customer_id: &str) -> Option<Vec<Account>> {
        let key = cache_keys::accounts(customer_id);

        let raw = match self.backend.get(&key).await {
            Ok(raw) => raw?,
            Err(e) => {
                error!("Redis error during read for key '{}': {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(accounts) => Some(accounts),
            Err(e) => {
                error!("Corrupt cache entry for key '{}': {}", key, e);
                None
            }
        }
    }

    /// Encodes and writes the list with a fresh TTL; returns whether the
    /// write happened. A zero TTL skips the write entirely (the entry would
    /// expire immediately), leaving the cache in its prior state.
    async fn write_entry(&self, customer_id: &str, accounts: &[Account]) -> bool {
        if self.ttl.is_zero() {
            debug!("Cache TTL is zero, skipping write for customer: {}", customer_id);
            return false;
        }

        let key = cache_keys::accounts(customer_id);

        let json = match serde_json::to_string(accounts) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to encode cache entry for key '{}': {}", key, e);
                return false;
            }
        };

        if let Err(e) = self.backend.set(&key, &json, self.ttl).await {
            error!("Redis error during write for key '{}': {}", key, e);
            return false;
        }

        true
    }
}
