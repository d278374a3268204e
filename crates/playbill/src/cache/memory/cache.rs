//! In-memory cache implementation with LRU eviction.
//!
//! Thread-safe TTL cache using tokio synchronization primitives and an LRU
//! eviction policy to bound memory. There is no removal API: entries leave
//! through TTL expiry (collected lazily on access) or capacity eviction.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;

use playbill_core::cache::{Cache, Result};

/// A single cache entry with its absolute expiry instant.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    expires_at: Instant,
}

impl CacheEntry {
    /// Creates a new cache entry expiring `ttl` from now.
    fn new(value: Vec<u8>, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    /// Returns true if this entry has expired.
    fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }
}

/// In-memory cache with per-entry TTL and LRU eviction.
///
/// Concurrent gets and puts are serialized through a single `RwLock`; the
/// LRU bookkeeping makes even reads take the write lock, and a concurrent
/// put for the same key resolves last-writer-wins.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
}

impl MemoryCache {
    /// Creates a new in-memory cache holding at most `max_entries` values.
    ///
    /// # Panics
    ///
    /// Panics if `max_entries` is 0.
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).expect("max_entries must be > 0");
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut store = self.store.write().await;

        let expired = match store.peek(key) {
            Some(entry) => entry.is_expired(),
            None => return Ok(None),
        };

        if expired {
            // Lazy expiry: drop the dead entry now that we've seen it.
            store.pop(key);
            return Ok(None);
        }

        // A live hit also refreshes the entry's LRU recency.
        Ok(store.get(key).map(|entry| entry.value.clone()))
    }

    async fn put(&self, key: &str, value: &[u8], ttl: Duration) -> Result<()> {
        let mut store = self.store.write().await;
        store.put(key.to_string(), CacheEntry::new(value.to_vec(), ttl));
        Ok(())
    }
}
