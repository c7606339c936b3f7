use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::repository::{Entity, Repository, RepositoryError};

/// Vec-backed repository; keeps insertion order so list views stay stable.
pub struct InMemoryRepository<T> {
    items: RwLock<Vec<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<T>) -> Self {
        debug!("Seeding {} repository with {} records", T::KIND, items.len());
        Self {
            items: RwLock::new(items),
        }
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> Result<Vec<T>, RepositoryError> {
        Ok(self.items.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<T, RepositoryError> {
        self.items
            .read()
            .await
            .iter()
            .find(|item| item.id() == id)
            .cloned()
            .ok_or(RepositoryError::NotFound { kind: T::KIND, id })
    }

    async fn create(&self, item: T) -> Result<T, RepositoryError> {
        let mut items = self.items.write().await;
        let id = item.id();
        if items.iter().any(|existing| existing.id() == id) {
            return Err(RepositoryError::AlreadyExists { kind: T::KIND, id });
        }
        items.push(item.clone());
        debug!("Created {} {}", T::KIND, id);
        Ok(item)
    }

    async fn update(&self, item: T) -> Result<T, RepositoryError> {
        let mut items = self.items.write().await;
        let id = item.id();
        let slot = items
            .iter_mut()
            .find(|existing| existing.id() == id)
            .ok_or(RepositoryError::NotFound { kind: T::KIND, id })?;
        *slot = item.clone();
        debug!("Updated {} {}", T::KIND, id);
        Ok(item)
    }
}
