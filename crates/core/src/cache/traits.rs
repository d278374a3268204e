use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Trait for the read-path cache.
///
/// The contract is intentionally get/put only: there is no invalidate
/// operation. Entries leave the cache solely through TTL expiry (or
/// capacity eviction in bounded implementations), so callers needing
/// freshness must pick keys whose staleness window is acceptable, or
/// bypass the cache entirely.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key.
    ///
    /// An expired or absent entry is a miss; implementations may evict
    /// lazily on miss.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Stores a value under `key`, expiring `ttl` from now.
    ///
    /// Any existing entry for the same key is overwritten unconditionally.
    async fn put(&self, key: &str, value: &[u8], ttl: Duration) -> Result<()>;
}
