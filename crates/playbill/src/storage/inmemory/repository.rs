//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use playbill_core::catalog::Content;
use playbill_core::storage::{ContentRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// Records live in a `Vec` behind `Arc<RwLock<_>>`: iteration order is
/// insertion order, mirroring the natural-order cursor of the document
/// store this adapter stands in for. Data is not persisted and is lost
/// when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    contents: Arc<RwLock<Vec<Content>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentRepository for InMemoryRepository {
    async fn find_all(&self) -> Result<Vec<Content>> {
        let contents = self.contents.read().await;
        Ok(contents.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Content>> {
        let contents = self.contents.read().await;
        Ok(contents.iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, content: &Content) -> Result<Content> {
        let mut contents = self.contents.write().await;
        if contents.iter().any(|c| c.id == content.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Content",
                id: content.id.to_string(),
            });
        }
        contents.push(content.clone());
        Ok(content.clone())
    }

    async fn replace(&self, id: Uuid, content: &Content) -> Result<Content> {
        let mut contents = self.contents.write().await;
        match contents.iter_mut().find(|c| c.id == id) {
            Some(slot) => {
                // Wholesale replacement in place keeps the record's
                // position in iteration order.
                *slot = content.clone();
                Ok(content.clone())
            }
            None => Err(RepositoryError::NotFound {
                entity_type: "Content",
                id: id.to_string(),
            }),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Uuid> {
        let mut contents = self.contents.write().await;
        match contents.iter().position(|c| c.id == id) {
            Some(index) => {
                contents.remove(index);
                Ok(id)
            }
            None => Err(RepositoryError::NotFound {
                entity_type: "Content",
                id: id.to_string(),
            }),
        }
    }
}
