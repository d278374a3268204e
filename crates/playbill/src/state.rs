//! Application state and backend wiring.
//!
//! The shared state is built once at startup, cloned into every request
//! handler, and torn down at process shutdown — the cache in particular is
//! a process-scoped component with an explicit lifecycle, not an ambient
//! singleton. The storage backend is selected at compile time via feature
//! flags.

use std::sync::Arc;

use playbill_core::catalog::Content;
use playbill_core::storage::ContentRepository;

use crate::config::Config;
use crate::service::CatalogService;

/// Shared application state.
///
/// Cloned for each request handler; all shared resources live behind
/// `Arc`s inside the service.
#[derive(Clone)]
pub struct AppState {
    /// The catalog orchestrator (store adapter + read cache).
    pub catalog: CatalogService,
    /// Direct handle to the store, used for seeding.
    content_repo: Arc<dyn ContentRepository>,
}

impl AppState {
    fn build(content_repo: Arc<dyn ContentRepository>, catalog: CatalogService) -> Self {
        Self {
            catalog,
            content_repo,
        }
    }

    /// Inserts the given contents if the store is currently empty.
    ///
    /// Used by `--seed` to populate a fresh store with demo data; a store
    /// that already has records is left untouched.
    pub async fn seed_if_empty(&self, contents: Vec<Content>) -> anyhow::Result<usize> {
        let existing = self.content_repo.find_all().await?;
        if !existing.is_empty() {
            tracing::debug!(count = existing.len(), "store already populated, skipping seed");
            return Ok(0);
        }

        let mut seeded = 0;
        for content in contents {
            self.content_repo.insert(&content).await?;
            seeded += 1;
        }

        tracing::info!(count = seeded, "seeded demo catalog");
        Ok(seeded)
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage and cache.
        ///
        /// No external dependencies; data lives only as long as the
        /// process.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            let catalog = CatalogService::new(repo.clone(), cache, config.cache_ttl());

            Ok(Self::build(repo, catalog))
        }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite_backend {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            let catalog = CatalogService::new(repo.clone(), cache, config.cache_ttl());

            Ok(Self::build(repo, catalog))
        }
    }
}
