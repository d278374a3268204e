//! Catalog service orchestration.
//!
//! Composes the store adapter and the read cache. Reads are cache-aside:
//! probe the cache, on miss fetch from the store and populate with the
//! configured TTL. Writes go straight to the store and never touch the
//! cache — cached views stay stale until their TTL runs out, a property
//! the rest of the system is built around.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use playbill_core::cache::{
    deserialize_content, deserialize_contents, item_key, list_key, serialize_content,
    serialize_contents, Cache,
};
use playbill_core::catalog::{
    filter_contents, paginate, with_genres_added, with_genres_removed, CatalogError, Content,
};
use playbill_core::storage::{ContentRepository, RepositoryError};

use crate::models::ContentInput;

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// The catalog orchestrator.
///
/// Constructed once at startup and cloned by reference into request
/// handlers; both collaborators are shared, concurrently-accessed
/// resources.
#[derive(Clone)]
pub struct CatalogService {
    repo: Arc<dyn ContentRepository>,
    cache: Arc<dyn Cache>,
    ttl: Duration,
}

impl CatalogService {
    /// Creates a new catalog service over the given store and cache.
    pub fn new(repo: Arc<dyn ContentRepository>, cache: Arc<dyn Cache>, ttl: Duration) -> Self {
        Self { repo, cache, ttl }
    }

    /// Returns one page of the collection, in store-iteration order.
    ///
    /// The page is cached under `list:{page}:{page_size}`. An empty slice
    /// yields `NotFound` — an out-of-range page and a genuinely empty
    /// collection are indistinguishable here — and is never cached.
    pub async fn list(&self, page: u64, page_size: u64) -> Result<Vec<Content>> {
        let cache_key = list_key(page, page_size);

        if let Ok(Some(bytes)) = self.cache.get(&cache_key).await {
            if let Ok(contents) = deserialize_contents(&bytes) {
                tracing::trace!(page, page_size, "cache hit for content page");
                return Ok(contents);
            }
            tracing::warn!(page, page_size, "cached content page failed to deserialize");
        }

        tracing::trace!(page, page_size, "cache miss for content page");
        let contents = self.repo.find_all().await?;
        let page_items = paginate(contents, page, page_size);

        if page_items.is_empty() {
            tracing::warn!(page, page_size, "no contents found for page");
            return Err(CatalogError::NotFound);
        }

        if let Ok(bytes) = serialize_contents(&page_items) {
            if let Err(err) = self.cache.put(&cache_key, &bytes, self.ttl).await {
                tracing::warn!(page, page_size, error = %err, "failed to cache content page");
            }
        }

        Ok(page_items)
    }

    /// Returns the contents matching the given title/genre filters.
    ///
    /// Filtered queries are never cached: the filter parameter space is
    /// unbounded.
    pub async fn list_filtered(
        &self,
        title: Option<&str>,
        genre: Option<&str>,
    ) -> Result<Vec<Content>> {
        let contents = self.repo.find_all().await?;
        let filtered = filter_contents(contents, title, genre);

        if filtered.is_empty() {
            tracing::warn!(?title, ?genre, "no filtered contents found");
            return Err(CatalogError::NotFound);
        }

        Ok(filtered)
    }

    /// Returns a single content by ID, cached under `item:{id}`.
    pub async fn get(&self, id: Uuid) -> Result<Content> {
        let cache_key = item_key(id);

        if let Ok(Some(bytes)) = self.cache.get(&cache_key).await {
            if let Ok(content) = deserialize_content(&bytes) {
                tracing::trace!(content_id = %id, "cache hit for content");
                return Ok(content);
            }
            tracing::warn!(content_id = %id, "cached content failed to deserialize");
        }

        tracing::trace!(content_id = %id, "cache miss for content");
        let Some(content) = self.repo.find_by_id(id).await? else {
            tracing::warn!(content_id = %id, "content not found");
            return Err(CatalogError::NotFound);
        };

        if let Ok(bytes) = serialize_content(&content) {
            if let Err(err) = self.cache.put(&cache_key, &bytes, self.ttl).await {
                tracing::warn!(content_id = %id, error = %err, "failed to cache content");
            }
        }

        Ok(content)
    }

    /// Creates a new content record from the given input.
    ///
    /// Any adapter failure collapses to `CreationFailed`, which the
    /// transport surfaces as a generic server error.
    pub async fn create(&self, input: ContentInput) -> Result<Content> {
        let content = input.into_content(Uuid::new_v4());

        match self.repo.insert(&content).await {
            Ok(stored) => {
                tracing::debug!(content_id = %stored.id, title = %stored.title, "content created");
                Ok(stored)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to create content");
                Err(CatalogError::CreationFailed)
            }
        }
    }

    /// Replaces the content stored under `id` wholesale.
    pub async fn update(&self, id: Uuid, input: ContentInput) -> Result<Content> {
        let content = input.into_content(id);
        let updated = self.replace(id, &content).await?;
        tracing::debug!(content_id = %id, "content updated");
        Ok(updated)
    }

    /// Deletes the content stored under `id`, returning the deleted ID.
    pub async fn delete(&self, id: Uuid) -> Result<Uuid> {
        match self.repo.delete_by_id(id).await {
            Ok(deleted) => {
                tracing::debug!(content_id = %id, "content deleted");
                Ok(deleted)
            }
            Err(RepositoryError::NotFound { .. }) => {
                tracing::warn!(content_id = %id, "content not found for delete");
                Err(CatalogError::NotFound)
            }
            Err(err) => Err(CatalogError::Store(err)),
        }
    }

    /// Appends genres to the content stored under `id`.
    ///
    /// Read-modify-write: the current record is fetched live from the
    /// store (never the cache — a stale base would compound concurrent
    /// writers' errors), rewritten with the genres appended without
    /// deduplication, and persisted wholesale. Concurrent mutations of the
    /// same ID race at the store; the last replace wins.
    pub async fn add_genres(&self, id: Uuid, genres: &[String]) -> Result<Content> {
        Self::validate_genres(genres)?;

        let content = self.fetch_for_mutation(id).await?;
        let updated = with_genres_added(&content, genres);
        let stored = self.replace(id, &updated).await?;

        tracing::debug!(content_id = %id, added = genres.len(), "genres added");
        Ok(stored)
    }

    /// Removes all occurrences of the given genres from the content stored
    /// under `id`. Same read-modify-write shape as [`add_genres`].
    ///
    /// [`add_genres`]: CatalogService::add_genres
    pub async fn remove_genres(&self, id: Uuid, genres: &[String]) -> Result<Content> {
        Self::validate_genres(genres)?;

        let content = self.fetch_for_mutation(id).await?;
        let updated = with_genres_removed(&content, genres);
        let stored = self.replace(id, &updated).await?;

        tracing::debug!(content_id = %id, removed = genres.len(), "genres removed");
        Ok(stored)
    }

    /// Rejects an empty genre delta before any store access.
    fn validate_genres(genres: &[String]) -> Result<()> {
        if genres.is_empty() {
            return Err(CatalogError::Validation(
                "genre list must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Fetches the live record for a read-modify-write cycle.
    async fn fetch_for_mutation(&self, id: Uuid) -> Result<Content> {
        match self.repo.find_by_id(id).await? {
            Some(content) => Ok(content),
            None => {
                tracing::warn!(content_id = %id, "content not found for genre mutation");
                Err(CatalogError::NotFound)
            }
        }
    }

    /// Persists a full replacement, translating an unmatched ID into
    /// `NotFound`.
    async fn replace(&self, id: Uuid, content: &Content) -> Result<Content> {
        match self.repo.replace(id, content).await {
            Ok(stored) => Ok(stored),
            Err(RepositoryError::NotFound { .. }) => {
                tracing::warn!(content_id = %id, "content not found for replace");
                Err(CatalogError::NotFound)
            }
            Err(err) => Err(CatalogError::Store(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use tokio::sync::RwLock;

    use playbill_core::cache::Result as CacheResult;
    use playbill_core::storage::Result as RepoResult;

    /// Mock repository that tracks call counts per operation.
    struct MockRepository {
        contents: RwLock<Vec<Content>>,
        find_all_calls: AtomicUsize,
        find_by_id_calls: AtomicUsize,
        replace_calls: AtomicUsize,
    }

    impl MockRepository {
        fn new() -> Self {
            Self {
                contents: RwLock::new(Vec::new()),
                find_all_calls: AtomicUsize::new(0),
                find_by_id_calls: AtomicUsize::new(0),
                replace_calls: AtomicUsize::new(0),
            }
        }

        async fn seed(&self, content: Content) {
            self.contents.write().await.push(content);
        }
    }

    #[async_trait]
    impl ContentRepository for MockRepository {
        async fn find_all(&self) -> RepoResult<Vec<Content>> {
            self.find_all_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.contents.read().await.clone())
        }

        async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Content>> {
            self.find_by_id_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .contents
                .read()
                .await
                .iter()
                .find(|c| c.id == id)
                .cloned())
        }

        async fn insert(&self, content: &Content) -> RepoResult<Content> {
            self.contents.write().await.push(content.clone());
            Ok(content.clone())
        }

        async fn replace(&self, id: Uuid, content: &Content) -> RepoResult<Content> {
            self.replace_calls.fetch_add(1, Ordering::SeqCst);
            let mut contents = self.contents.write().await;
            match contents.iter_mut().find(|c| c.id == id) {
                Some(slot) => {
                    *slot = content.clone();
                    Ok(content.clone())
                }
                None => Err(RepositoryError::NotFound {
                    entity_type: "Content",
                    id: id.to_string(),
                }),
            }
        }

        async fn delete_by_id(&self, id: Uuid) -> RepoResult<Uuid> {
            let mut contents = self.contents.write().await;
            let before = contents.len();
            contents.retain(|c| c.id != id);
            if contents.len() == before {
                return Err(RepositoryError::NotFound {
                    entity_type: "Content",
                    id: id.to_string(),
                });
            }
            Ok(id)
        }
    }

    /// Mock cache honoring TTL against a real clock.
    struct MockCache {
        store: RwLock<HashMap<String, (Vec<u8>, Instant)>>,
    }

    impl MockCache {
        fn new() -> Self {
            Self {
                store: RwLock::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl Cache for MockCache {
        async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
            let store = self.store.read().await;
            Ok(store
                .get(key)
                .filter(|(_, expires_at)| Instant::now() <= *expires_at)
                .map(|(value, _)| value.clone()))
        }

        async fn put(&self, key: &str, value: &[u8], ttl: Duration) -> CacheResult<()> {
            self.store
                .write()
                .await
                .insert(key.to_string(), (value.to_vec(), Instant::now() + ttl));
            Ok(())
        }
    }

    fn test_content(title: &str, genres: &[&str]) -> Content {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 20, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 22, 0, 0).unwrap();
        Content::new(
            title,
            "",
            "",
            "",
            120,
            start,
            end,
            genres.iter().map(|g| g.to_string()).collect(),
        )
    }

    fn test_input(title: &str) -> ContentInput {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 20, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 22, 0, 0).unwrap();
        ContentInput {
            title: title.to_string(),
            subtitle: String::new(),
            description: String::new(),
            image_url: String::new(),
            duration: 120,
            start_time: start,
            end_time: end,
            genres: Vec::new(),
        }
    }

    fn service_with(repo: Arc<MockRepository>, ttl: Duration) -> CatalogService {
        CatalogService::new(repo, Arc::new(MockCache::new()), ttl)
    }

    fn genre_list(genres: &[&str]) -> Vec<String> {
        genres.iter().map(|g| g.to_string()).collect()
    }

    const TTL: Duration = Duration::from_secs(300);

    #[tokio::test]
    async fn get_hits_cache_on_second_call() {
        let repo = Arc::new(MockRepository::new());
        let content = test_content("Feature", &[]);
        repo.seed(content.clone()).await;

        let service = service_with(repo.clone(), TTL);

        let first = service.get(content.id).await.unwrap();
        let second = service.get(content.id).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(repo.find_by_id_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let repo = Arc::new(MockRepository::new());
        let service = service_with(repo, TTL);

        let result = service.get(Uuid::new_v4()).await;
        assert_eq!(result, Err(CatalogError::NotFound));
    }

    #[tokio::test]
    async fn cached_read_is_stale_after_update() {
        let repo = Arc::new(MockRepository::new());
        let content = test_content("Original", &[]);
        repo.seed(content.clone()).await;

        let service = service_with(repo.clone(), TTL);

        // Prime the cache, then replace the record behind its back.
        let before = service.get(content.id).await.unwrap();
        service
            .update(content.id, test_input("Updated"))
            .await
            .unwrap();
        let after = service.get(content.id).await.unwrap();

        // The cached view survives the write until TTL expiry.
        assert_eq!(after.title, "Original");
        assert_eq!(before, after);
        assert_eq!(repo.find_by_id_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn staleness_window_ends_at_ttl_expiry() {
        let repo = Arc::new(MockRepository::new());
        let content = test_content("Original", &[]);
        repo.seed(content.clone()).await;

        let service = service_with(repo.clone(), Duration::from_millis(50));

        let _ = service.get(content.id).await.unwrap();
        service
            .update(content.id, test_input("Updated"))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(100)).await;

        let refreshed = service.get(content.id).await.unwrap();
        assert_eq!(refreshed.title, "Updated");
        assert_eq!(repo.find_by_id_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn list_caches_the_page_slice() {
        let repo = Arc::new(MockRepository::new());
        for i in 0..7 {
            repo.seed(test_content(&format!("Item {i}"), &[])).await;
        }

        let service = service_with(repo.clone(), TTL);

        let first = service.list(2, 3).await.unwrap();
        let second = service.list(2, 3).await.unwrap();

        let titles: Vec<&str> = first.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Item 3", "Item 4", "Item 5"]);
        assert_eq!(first, second);
        assert_eq!(repo.find_all_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn list_pages_are_keyed_independently() {
        let repo = Arc::new(MockRepository::new());
        for i in 0..7 {
            repo.seed(test_content(&format!("Item {i}"), &[])).await;
        }

        let service = service_with(repo.clone(), TTL);

        let page_one = service.list(1, 3).await.unwrap();
        let page_two = service.list(2, 3).await.unwrap();

        assert_ne!(page_one, page_two);
        assert_eq!(repo.find_all_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn list_out_of_range_page_is_not_found() {
        let repo = Arc::new(MockRepository::new());
        repo.seed(test_content("Only", &[])).await;

        let service = service_with(repo, TTL);

        let result = service.list(5, 10).await;
        assert_eq!(result, Err(CatalogError::NotFound));
    }

    #[tokio::test]
    async fn list_empty_result_is_not_cached() {
        let repo = Arc::new(MockRepository::new());
        let service = service_with(repo.clone(), TTL);

        assert_eq!(service.list(1, 10).await, Err(CatalogError::NotFound));

        // Once the store has data the same key must serve it.
        repo.seed(test_content("Late arrival", &[])).await;
        let listed = service.list(1, 10).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn filtered_list_is_conjunctive_and_uncached() {
        let repo = Arc::new(MockRepository::new());
        repo.seed(test_content("Foo", &["Action"])).await;
        repo.seed(test_content("Bar", &["Action", "Comedy"])).await;

        let service = service_with(repo.clone(), TTL);

        let filtered = service
            .list_filtered(Some("bar"), Some("comedy"))
            .await
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Bar");

        // A second identical query goes back to the store.
        let _ = service
            .list_filtered(Some("bar"), Some("comedy"))
            .await
            .unwrap();
        assert_eq!(repo.find_all_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn filtered_list_no_match_is_not_found() {
        let repo = Arc::new(MockRepository::new());
        repo.seed(test_content("Foo", &["Action"])).await;

        let service = service_with(repo, TTL);

        let result = service.list_filtered(Some("zzz"), None).await;
        assert_eq!(result, Err(CatalogError::NotFound));
    }

    #[tokio::test]
    async fn create_returns_stored_record() {
        let repo = Arc::new(MockRepository::new());
        let service = service_with(repo.clone(), TTL);

        let created = service.create(test_input("New Feature")).await.unwrap();
        assert_eq!(created.title, "New Feature");

        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let repo = Arc::new(MockRepository::new());
        let service = service_with(repo, TTL);

        let result = service.update(Uuid::new_v4(), test_input("Ghost")).await;
        assert_eq!(result, Err(CatalogError::NotFound));
    }

    #[tokio::test]
    async fn delete_returns_deleted_id() {
        let repo = Arc::new(MockRepository::new());
        let content = test_content("Doomed", &[]);
        repo.seed(content.clone()).await;

        let service = service_with(repo, TTL);

        assert_eq!(service.delete(content.id).await.unwrap(), content.id);
        assert_eq!(service.delete(content.id).await, Err(CatalogError::NotFound));
    }

    #[tokio::test]
    async fn add_genres_preserves_duplicates() {
        let repo = Arc::new(MockRepository::new());
        let content = test_content("Feature", &["Action"]);
        repo.seed(content.clone()).await;

        let service = service_with(repo, TTL);

        let updated = service
            .add_genres(content.id, &genre_list(&["Action"]))
            .await
            .unwrap();
        assert_eq!(updated.genres, vec!["Action", "Action"]);
    }

    #[tokio::test]
    async fn remove_genres_drops_all_occurrences() {
        let repo = Arc::new(MockRepository::new());
        let content = test_content("Feature", &["Action", "Action", "Comedy"]);
        repo.seed(content.clone()).await;

        let service = service_with(repo, TTL);

        let updated = service
            .remove_genres(content.id, &genre_list(&["Action"]))
            .await
            .unwrap();
        assert_eq!(updated.genres, vec!["Comedy"]);
    }

    #[tokio::test]
    async fn empty_genre_delta_fails_validation_before_store_access() {
        let repo = Arc::new(MockRepository::new());
        let service = service_with(repo.clone(), TTL);

        let add = service.add_genres(Uuid::new_v4(), &[]).await;
        let remove = service.remove_genres(Uuid::new_v4(), &[]).await;

        assert!(matches!(add, Err(CatalogError::Validation(_))));
        assert!(matches!(remove, Err(CatalogError::Validation(_))));
        assert_eq!(repo.find_by_id_calls.load(Ordering::SeqCst), 0);
        assert_eq!(repo.replace_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn genre_mutation_on_unknown_id_never_reaches_replace() {
        let repo = Arc::new(MockRepository::new());
        let service = service_with(repo.clone(), TTL);

        let result = service
            .add_genres(Uuid::new_v4(), &genre_list(&["Action"]))
            .await;

        assert_eq!(result, Err(CatalogError::NotFound));
        assert_eq!(repo.replace_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn genre_mutation_reads_live_store_not_cache() {
        let repo = Arc::new(MockRepository::new());
        let content = test_content("Feature", &["Action"]);
        repo.seed(content.clone()).await;

        let service = service_with(repo.clone(), TTL);

        // Prime the item cache, then mutate. The mutation must base itself
        // on the store read, so find_by_id is called again.
        let _ = service.get(content.id).await.unwrap();
        let calls_after_get = repo.find_by_id_calls.load(Ordering::SeqCst);

        let _ = service
            .add_genres(content.id, &genre_list(&["Comedy"]))
            .await
            .unwrap();

        assert_eq!(
            repo.find_by_id_calls.load(Ordering::SeqCst),
            calls_after_get + 1
        );
    }
}
