use uuid::Uuid;

/// Returns the cache key for a paginated list view.
pub fn list_key(page: u64, page_size: u64) -> String {
    format!("list:{page}:{page_size}")
}

/// Returns the cache key for a single content item.
pub fn item_key(id: Uuid) -> String {
    format!("item:{id}")
}

// Filtered queries are never cached: the filter parameter space is
// unbounded, so no key derivation exists for them.
