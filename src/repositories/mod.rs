use async_trait::async_trait;
use thiserror::Error;

use crate::models::rooms::Room;

pub mod memory;
pub mod mongo;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("MongoDB operation failed: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

/// Storage for rooms, keyed by id.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Inserts or replaces the room, assigning an id first if it has none.
    async fn save(&self, room: Room) -> Result<Room, RepositoryError>;
    /// All rooms, in no particular order.
    async fn find_all(&self) -> Result<Vec<Room>, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Room>, RepositoryError>;
    /// Test support: clears the store between test cases.
    #[allow(dead_code)]
    async fn delete_all(&self) -> Result<(), RepositoryError>;
    async fn count(&self) -> Result<u64, RepositoryError>;
}
