use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use shared_models::error::AppError;

/// A record addressable by a stable identifier.
pub trait Entity: Clone + Send + Sync + 'static {
    const KIND: &'static str;

    fn id(&self) -> Uuid;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: Uuid },

    #[error("{kind} {id} already exists")]
    AlreadyExists { kind: &'static str, id: Uuid },
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => AppError::NotFound(err.to_string()),
            RepositoryError::AlreadyExists { .. } => AppError::Conflict(err.to_string()),
        }
    }
}

/// Storage seam for every entity. `list` returns records in insertion order.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    async fn list(&self) -> Result<Vec<T>, RepositoryError>;

    async fn get(&self, id: Uuid) -> Result<T, RepositoryError>;

    async fn create(&self, item: T) -> Result<T, RepositoryError>;

    async fn update(&self, item: T) -> Result<T, RepositoryError>;
}
