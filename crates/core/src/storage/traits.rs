use async_trait::async_trait;
use uuid::Uuid;

use crate::catalog::Content;

use super::Result;

/// Repository over the authoritative content store.
///
/// The store is a document collection addressable by identifier. Write
/// acknowledgment is carried in the `Result`: a replace or delete that
/// matched nothing reports `RepositoryError::NotFound` rather than a
/// nullable payload, keeping "not found" distinct from "store unavailable"
/// at the type level.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Returns the full collection in store-iteration order.
    async fn find_all(&self) -> Result<Vec<Content>>;

    /// Returns the content with the given ID, if any.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Content>>;

    /// Inserts a new content record, returning the stored record.
    async fn insert(&self, content: &Content) -> Result<Content>;

    /// Replaces the record stored under `id` wholesale with `content`.
    async fn replace(&self, id: Uuid, content: &Content) -> Result<Content>;

    /// Deletes the record stored under `id`, returning the deleted ID.
    async fn delete_by_id(&self, id: Uuid) -> Result<Uuid>;
}
