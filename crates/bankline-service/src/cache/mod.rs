//! Caching infrastructure for the account service.
//!
//! The cache stores, per customer, the full list of that customer's
//! accounts with a fixed TTL. All operations here are advisory: any backend
//! failure is caught at this boundary, logged, and converted to a miss or
//! no-op. The cache must never be a single point of failure for the
//! account API.

mod account_cache;
mod backend;
pub mod cache_keys;
mod redis_cache;
mod ttl;

#[cfg(test)]
pub(crate) mod test_support;

pub use account_cache::AccountCache;
pub use backend::CacheBackend;
pub use redis_cache::RedisCacheBackend;
pub use ttl::parse_ttl;
